//! Authentication utilities
//!
//! This module provides the HTTP Basic authentication primitives for
//! TaskNest.
//!
//! # Modules
//!
//! - [`basic`]: `Authorization: Basic` header parsing
//! - [`middleware`]: Axum middleware that resolves credentials to a user row
//!
//! Credentials are compared as plaintext against the users table. There is no
//! hashing, no token issuance, and no session state.
//!
//! # Example
//!
//! ```
//! use tasknest_shared::auth::basic::Credentials;
//!
//! let creds = Credentials::from_header("Basic aG9tZXI6ZHVmZmJlZXI=").unwrap();
//! assert_eq!(creds.username, "homer");
//! ```

pub mod basic;
pub mod middleware;
