/// Message endpoints
///
/// Direct messages between users. Visibility is symmetric: a message
/// can be read and deleted by its sender or its receiver, nobody else.
///
/// # Endpoints
///
/// - `GET /api/messages/` - List messages involving the acting user
/// - `POST /api/messages/` - Send a message
/// - `GET /api/messages/{id}/` - Fetch one message
/// - `DELETE /api/messages/{id}/` - Delete a message

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::MessageResponse,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use tasknest_shared::models::{
    message::{CreateMessage, Message},
    user::User,
};

/// Send request
///
/// The sender is always the acting user; the receiver id is taken at
/// face value and not checked against the users table.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    /// Receiving user's id
    #[serde(default)]
    pub receiver_id: i64,

    /// Message body
    #[serde(default)]
    pub content: String,

    /// Creation date, free-form text
    #[serde(default)]
    pub creation_date: String,
}

/// List messages the acting user sent or received
pub async fn list_messages(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> ApiResult<Json<Vec<Message>>> {
    let messages = Message::list_for_user(&state.db, user.id).await?;
    Ok(Json(messages))
}

/// Send a message
///
/// # Endpoint
///
/// ```text
/// POST /api/messages/
/// Content-Type: application/json
///
/// {
///   "receiver_id": 2,
///   "content": "Lunch at Moe's?",
///   "creation_date": "2024-01-15"
/// }
/// ```
pub async fn send_message(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(req): Json<SendMessageRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let message = Message::create(
        &state.db,
        CreateMessage {
            sender_id: user.id,
            receiver_id: req.receiver_id,
            content: req.content,
            creation_date: req.creation_date,
        },
    )
    .await?;

    tracing::debug!(
        message_id = message.id,
        sender_id = user.id,
        receiver_id = message.receiver_id,
        "message sent"
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Message sent successfully")),
    ))
}

/// Fetch one message
///
/// # Errors
///
/// - `404 Not Found`: The acting user is neither sender nor receiver
pub async fn get_message(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(message_id): Path<i64>,
) -> ApiResult<Json<Message>> {
    match Message::find_for_user(&state.db, message_id, user.id).await? {
        Some(message) => Ok(Json(message)),
        None => Err(ApiError::NotFound("Message not found".to_string())),
    }
}

/// Delete a message
///
/// Either participant can delete; the row is gone for both.
pub async fn delete_message(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(message_id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    if Message::delete(&state.db, message_id, user.id).await? {
        Ok(Json(MessageResponse::new("Message deleted successfully")))
    } else {
        Err(ApiError::NotFound("Message not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_request_defaults_absent_fields() {
        let req: SendMessageRequest =
            serde_json::from_str(r#"{"content": "Lunch at Moe's?"}"#).expect("Should deserialize");

        assert_eq!(req.content, "Lunch at Moe's?");
        assert_eq!(req.receiver_id, 0);
        assert!(req.creation_date.is_empty());
    }
}
