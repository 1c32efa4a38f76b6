/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `root`: Service banner
/// - `health`: Health check endpoint
/// - `users`: Registration and profile endpoints
/// - `projects`: Project CRUD for the authenticated owner
/// - `tasks`: Task CRUD nested under an owned project
/// - `messages`: Messages between users

pub mod health;
pub mod messages;
pub mod projects;
pub mod root;
pub mod tasks;
pub mod users;

use serde::{Deserialize, Serialize};

/// Standard `{"message": ...}` body returned by mutation endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable outcome description
    pub message: String,
}

impl MessageResponse {
    /// Creates a response with the given text
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
