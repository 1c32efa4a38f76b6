//! # TaskNest Shared Library
//!
//! This crate contains the types and persistence logic shared by the
//! TaskNest API server: database models, the connection pool and schema
//! bootstrap, and HTTP Basic authentication.
//!
//! ## Module Organization
//!
//! - `models`: Database models and their CRUD operations
//! - `db`: Connection pool and schema bootstrap
//! - `auth`: HTTP Basic credential parsing and the auth middleware

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the TaskNest shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
