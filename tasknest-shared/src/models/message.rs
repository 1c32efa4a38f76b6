//! Message model and database operations
//!
//! Messages are one-way notes between two users. A user sees a message when
//! they are either the sender or the receiver; everyone else gets None from
//! the scoped lookups.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE messages (
//!     id INTEGER PRIMARY KEY AUTOINCREMENT,
//!     sender_id INTEGER NOT NULL REFERENCES users(id),
//!     receiver_id INTEGER NOT NULL REFERENCES users(id),
//!     content TEXT NOT NULL,
//!     creation_date TEXT NOT NULL
//! );
//! ```

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Message model representing a note from one user to another
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    /// Unique message ID (autoincrement)
    pub id: i64,

    /// User who sent the message
    pub sender_id: i64,

    /// User the message is addressed to
    pub receiver_id: i64,

    /// Message body
    pub content: String,

    /// Creation date as supplied by the client
    pub creation_date: String,
}

/// Input for creating a new message
///
/// The receiver is written as given; there is no check that the id points at
/// an existing user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMessage {
    /// Sending user
    pub sender_id: i64,

    /// Receiving user
    pub receiver_id: i64,

    /// Message body
    pub content: String,

    /// Creation date (free-form text from the client)
    pub creation_date: String,
}

impl Message {
    /// Creates a new message
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create(pool: &SqlitePool, data: CreateMessage) -> Result<Self, sqlx::Error> {
        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (sender_id, receiver_id, content, creation_date)
            VALUES (?, ?, ?, ?)
            RETURNING id, sender_id, receiver_id, content, creation_date
            "#,
        )
        .bind(data.sender_id)
        .bind(data.receiver_id)
        .bind(data.content)
        .bind(data.creation_date)
        .fetch_one(pool)
        .await?;

        Ok(message)
    }

    /// Lists all messages a user participates in, oldest first
    ///
    /// Sent and received messages come back in one list.
    pub async fn list_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT id, sender_id, receiver_id, content, creation_date
            FROM messages
            WHERE sender_id = ? OR receiver_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(user_id)
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(messages)
    }

    /// Finds a message by ID, visible only to its two participants
    pub async fn find_for_user(
        pool: &SqlitePool,
        id: i64,
        user_id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        let message = sqlx::query_as::<_, Message>(
            r#"
            SELECT id, sender_id, receiver_id, content, creation_date
            FROM messages
            WHERE id = ? AND (sender_id = ? OR receiver_id = ?)
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(message)
    }

    /// Deletes a message, allowed for either participant
    ///
    /// # Returns
    ///
    /// True if a row was deleted, false if the message was missing or the
    /// user is not part of it
    pub async fn delete(pool: &SqlitePool, id: i64, user_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM messages WHERE id = ? AND (sender_id = ? OR receiver_id = ?)",
        )
        .bind(id)
        .bind(user_id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
