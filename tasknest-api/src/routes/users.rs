/// User endpoints
///
/// Registration plus the profile of whoever authenticated:
///
/// - `POST /api/user/register/` - Register new user (public)
/// - `GET /api/user/` - Current user's profile
/// - `PUT /api/user/` - Update current user

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::MessageResponse,
};
use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};
use tasknest_shared::models::user::{CreateUser, UpdateUser, User};

/// Register request
///
/// Absent fields deserialize to empty strings and are rejected by the
/// handler, so a short body fails validation instead of the parser.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Display name
    #[serde(default)]
    pub name: String,

    /// Email address, unique across users
    #[serde(default)]
    pub email: String,

    /// Login name, unique across users
    #[serde(default)]
    pub username: String,

    /// Password, stored as-is
    #[serde(default)]
    pub password: String,
}

/// Profile returned from `GET /api/user/`
///
/// The password never leaves the server.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// User ID
    pub id: i64,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Login name
    pub username: String,
}

/// Update request, all fields optional
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    /// New display name
    pub name: Option<String>,

    /// New email address
    pub email: Option<String>,
}

/// Register a new user
///
/// # Endpoint
///
/// ```text
/// POST /api/user/register/
/// Content-Type: application/json
///
/// {
///   "name": "Homer Simpson",
///   "email": "homer@simpson.com",
///   "username": "homer",
///   "password": "duffbeer"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: A required field is missing or empty
/// - `400 Bad Request`: Email or username already taken
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    if req.name.is_empty()
        || req.email.is_empty()
        || req.username.is_empty()
        || req.password.is_empty()
    {
        return Err(ApiError::Validation("Missing required fields".to_string()));
    }

    let user = User::create(
        &state.db,
        CreateUser {
            name: req.name,
            email: req.email,
            username: req.username,
            password: req.password,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

/// Get the authenticated user's profile
///
/// The auth middleware already resolved the user, so this just shapes
/// the row for the response.
pub async fn get_current_user(Extension(user): Extension<User>) -> Json<UserResponse> {
    Json(UserResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        username: user.username,
    })
}

/// Update the authenticated user's profile
///
/// Partial update; fields left out of the body keep their stored value.
///
/// # Errors
///
/// - `400 Bad Request`: Persistence failure (e.g. email already taken)
/// - `404 Not Found`: The user row vanished between auth and update
pub async fn update_current_user(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let updated = User::update(
        &state.db,
        user.id,
        UpdateUser {
            name: req.name,
            email: req.email,
        },
    )
    .await?;

    match updated {
        Some(_) => Ok(Json(MessageResponse::new("User updated successfully"))),
        None => Err(ApiError::NotFound("User not found".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_defaults_missing_fields() {
        let req: RegisterRequest =
            serde_json::from_str(r#"{"username": "homer", "password": "duffbeer"}"#)
                .expect("Should deserialize with missing fields");

        assert_eq!(req.username, "homer");
        assert!(req.name.is_empty());
        assert!(req.email.is_empty());
    }

    #[test]
    fn test_update_request_is_partial() {
        let req: UpdateUserRequest =
            serde_json::from_str(r#"{"email": "homer@plant.com"}"#).expect("Should deserialize");

        assert_eq!(req.email.as_deref(), Some("homer@plant.com"));
        assert!(req.name.is_none());
    }
}
