//! Database models for TaskNest
//!
//! This module contains all database models and their CRUD operations.
//!
//! # Models
//!
//! - `user`: Accounts with Basic-auth credentials
//! - `project`: Task containers owned by a single user
//! - `task`: To-do items nested under a project
//! - `message`: One-way notes between two users
//!
//! # Example
//!
//! ```no_run
//! use tasknest_shared::models::user::{User, CreateUser};
//! use tasknest_shared::db::pool::{create_pool, DatabaseConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool(DatabaseConfig::default()).await?;
//!
//! let new_user = CreateUser {
//!     name: "Homer Simpson".to_string(),
//!     email: "homer@simpson.com".to_string(),
//!     username: "homer".to_string(),
//!     password: "duffbeer".to_string(),
//! };
//!
//! let user = User::create(&pool, new_user).await?;
//! # Ok(())
//! # }
//! ```

pub mod message;
pub mod project;
pub mod task;
pub mod user;
