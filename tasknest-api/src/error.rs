/// Error handling for the API server
///
/// This module provides a unified error type that maps to HTTP responses.
/// All handlers return `Result<T, ApiError>` which automatically converts to
/// the appropriate HTTP status code and JSON body.
///
/// Two body shapes exist side by side: authorization and lookup failures use
/// `{"message": ...}`, while validation and persistence failures use
/// `{"error": ...}`. Clients should rely on status codes, not message text.
///
/// # Example
///
/// ```
/// use tasknest_api::error::{ApiError, ApiResult};
/// use axum::Json;
/// use serde_json::{json, Value};
///
/// async fn handler(found: bool) -> ApiResult<Json<Value>> {
///     if !found {
///         return Err(ApiError::NotFound("Project not found".to_string()));
///     }
///     Ok(Json(json!({ "message": "ok" })))
/// }
/// ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Request validation failed (400), body `{"error": ...}`
    Validation(String),

    /// Persistence failure surfaced to the client (400), body `{"error": ...}`
    ///
    /// Carries the stringified database error, including unique constraint
    /// violations on registration.
    Persistence(String),

    /// Forbidden (403), body `{"message": ...}`
    Forbidden(String),

    /// Not found (404), body `{"message": ...}`
    NotFound(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "Validation failed: {}", msg),
            ApiError::Persistence(msg) => write!(f, "Persistence error: {}", msg),
            ApiError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            ApiError::Persistence(msg) => {
                tracing::warn!("Persistence error returned to client: {}", msg);
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            ApiError::Forbidden(msg) => {
                (StatusCode::FORBIDDEN, Json(json!({ "message": msg }))).into_response()
            }
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": msg }))).into_response()
            }
        }
    }
}

/// Convert sqlx errors to API errors
///
/// `RowNotFound` becomes a 404; everything else is handed to the client as a
/// 400 with the stringified cause.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".to_string()),
            _ => ApiError::Persistence(err.to_string()),
        }
    }
}
