//! Authentication middleware for Axum
//!
//! Validates HTTP Basic credentials on every request. The middleware parses
//! the `Authorization` header, looks up the user by its exact
//! username/password pair, and adds the resolved row to request extensions.
//!
//! There is no login endpoint and no session. Every protected request carries
//! the full credential pair and pays for one lookup.
//!
//! # Request Extensions
//!
//! After successful authentication the middleware adds:
//! - `User`: the authenticated account row
//!
//! # Example
//!
//! ```no_run
//! use axum::{middleware, routing::get, Extension, Router};
//! use sqlx::SqlitePool;
//! use tasknest_shared::auth::middleware::basic_auth_middleware;
//! use tasknest_shared::models::user::User;
//!
//! async fn whoami(Extension(user): Extension<User>) -> String {
//!     format!("Hello, {}!", user.username)
//! }
//!
//! fn protected(pool: SqlitePool) -> Router {
//!     Router::new()
//!         .route("/whoami", get(whoami))
//!         .layer(middleware::from_fn(move |req, next| {
//!             basic_auth_middleware(pool.clone(), req, next)
//!         }))
//! }
//! ```

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sqlx::SqlitePool;
use tracing::debug;

use super::basic::Credentials;
use crate::models::user::User;

/// Error type for authentication middleware
///
/// Every credential failure maps to the same 403 response so callers cannot
/// probe which part of the pair was wrong.
#[derive(Debug)]
pub enum AuthError {
    /// Missing authorization header
    MissingCredentials,

    /// Malformed authorization header
    InvalidFormat(String),

    /// No user row matches the supplied pair
    UnknownUser,

    /// Database error during lookup
    DatabaseError(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::MissingCredentials
            | AuthError::InvalidFormat(_)
            | AuthError::UnknownUser => (
                StatusCode::FORBIDDEN,
                Json(json!({ "message": "User not found" })),
            )
                .into_response(),
            AuthError::DatabaseError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Internal server error" })),
            )
                .into_response(),
        }
    }
}

/// Basic authentication middleware
///
/// Validates credentials from the `Authorization: Basic <base64>` header
/// against the users table.
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `req` - Request
/// * `next` - Next middleware/handler
///
/// # Returns
///
/// Response with a `User` extension added on success
///
/// # Errors
///
/// Returns 403 Forbidden if:
/// - Authorization header is missing
/// - Header is not a well-formed Basic pair
/// - No user matches the username and password exactly
pub async fn basic_auth_middleware(
    pool: SqlitePool,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    // Extract Authorization header
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingCredentials)?;

    // Parse Basic credentials
    let credentials = Credentials::from_header(auth_header).map_err(|e| {
        debug!("Rejected malformed Basic header: {}", e);
        AuthError::InvalidFormat(e.to_string())
    })?;

    // Look up the user by the exact pair (database lookup)
    let user = User::find_by_credentials(&pool, &credentials.username, &credentials.password)
        .await
        .map_err(|e| AuthError::DatabaseError(format!("Database error: {}", e)))?
        .ok_or_else(|| {
            debug!(username = %credentials.username, "No user matches credentials");
            AuthError::UnknownUser
        })?;

    // Add the authenticated user to request extensions
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
