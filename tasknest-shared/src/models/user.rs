//! User model and database operations
//!
//! Users are the owners of projects and the endpoints of messages. Each user
//! authenticates with HTTP Basic credentials that are compared byte for byte
//! against the stored row.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE users (
//!     id INTEGER PRIMARY KEY AUTOINCREMENT,
//!     name TEXT NOT NULL,
//!     email TEXT NOT NULL UNIQUE,
//!     username TEXT NOT NULL UNIQUE,
//!     password TEXT NOT NULL
//! );
//! ```
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
//! println!("Created user: {}", user.id);
//!
//! // Credential lookup, as performed by the auth middleware
//! let found = User::find_by_credentials(&pool, "homer", "duffbeer").await?;
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// User model representing an account
///
/// Passwords are stored and compared as plaintext. The auth middleware looks
/// rows up by the exact username/password pair from the Basic header.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (autoincrement)
    pub id: i64,

    /// Display name
    pub name: String,

    /// Email address
    ///
    /// Must be unique across all users
    pub email: String,

    /// Login name for Basic auth
    ///
    /// Must be unique across all users
    pub username: String,

    /// Plaintext password compared byte for byte during auth
    pub password: String,
}

/// Input for creating a new user
///
/// All four fields are required at the API boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name
    pub name: String,

    /// Email address (unique)
    pub email: String,

    /// Login name (unique)
    pub username: String,

    /// Plaintext password
    pub password: String,
}

/// Input for updating an existing user
///
/// Only the profile fields can change. Username and password are fixed at
/// registration. Only non-None fields will be updated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New display name
    pub name: Option<String>,

    /// New email address
    pub email: Option<String>,
}

impl User {
    /// Creates a new user in the database
    ///
    /// # Arguments
    ///
    /// * `pool` - Database connection pool
    /// * `data` - User creation data
    ///
    /// # Returns
    ///
    /// The newly created user with its generated ID
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Email or username already exists (unique constraint violation)
    /// - Database connection fails
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use tasknest_shared::models::user::{User, CreateUser};
    /// # use sqlx::SqlitePool;
    /// # async fn example(pool: SqlitePool) -> Result<(), sqlx::Error> {
    /// let new_user = CreateUser {
    ///     name: "Homer Simpson".to_string(),
    ///     email: "homer@simpson.com".to_string(),
    ///     username: "homer".to_string(),
    ///     password: "duffbeer".to_string(),
    /// };
    ///
    /// let user = User::create(&pool, new_user).await?;
    /// println!("Created user: {}", user.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(pool: &SqlitePool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, username, password)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, email, username, password
            "#,
        )
        .bind(data.name)
        .bind(data.email)
        .bind(data.username)
        .bind(data.password)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by ID
    ///
    /// # Arguments
    ///
    /// * `pool` - Database connection pool
    /// * `id` - User ID to search for
    ///
    /// # Returns
    ///
    /// The user if found, None otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, username, password
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by exact username and password
    ///
    /// This is the lookup behind HTTP Basic auth. Both values must match the
    /// stored row exactly; there is no hashing step.
    ///
    /// # Arguments
    ///
    /// * `pool` - Database connection pool
    /// * `username` - Login name from the Basic header
    /// * `password` - Plaintext password from the Basic header
    ///
    /// # Returns
    ///
    /// The user if the pair matches a row, None otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use tasknest_shared::models::user::User;
    /// # use sqlx::SqlitePool;
    /// # async fn example(pool: SqlitePool) -> Result<(), sqlx::Error> {
    /// if let Some(user) = User::find_by_credentials(&pool, "homer", "duffbeer").await? {
    ///     println!("Authenticated: {}", user.username);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn find_by_credentials(
        pool: &SqlitePool,
        username: &str,
        password: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, username, password
            FROM users
            WHERE username = ? AND password = ?
            "#,
        )
        .bind(username)
        .bind(password)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Updates the profile fields of an existing user
    ///
    /// Only non-None fields in `data` are written. An update with no fields
    /// present leaves the row untouched and returns it as-is.
    ///
    /// # Arguments
    ///
    /// * `pool` - Database connection pool
    /// * `id` - ID of user to update
    /// * `data` - Fields to update (only non-None values are updated)
    ///
    /// # Returns
    ///
    /// The updated user if found, None if the user doesn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Email already exists for another user
    /// - Database connection fails
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use tasknest_shared::models::user::{User, UpdateUser};
    /// # use sqlx::SqlitePool;
    /// # async fn example(pool: SqlitePool, user_id: i64) -> Result<(), sqlx::Error> {
    /// let update = UpdateUser {
    ///     email: Some("homer@springfield.com".to_string()),
    ///     ..Default::default()
    /// };
    ///
    /// if let Some(user) = User::update(&pool, user_id, update).await? {
    ///     println!("Updated user: {}", user.email);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: UpdateUser,
    ) -> Result<Option<Self>, sqlx::Error> {
        // Build dynamic update query based on which fields are present
        let mut sets: Vec<&str> = Vec::new();

        if data.name.is_some() {
            sets.push("name = ?");
        }
        if data.email.is_some() {
            sets.push("email = ?");
        }

        if sets.is_empty() {
            // Nothing to write; the stored row stands
            return Self::find_by_id(pool, id).await;
        }

        let query = format!(
            "UPDATE users SET {} WHERE id = ? RETURNING id, name, email, username, password",
            sets.join(", ")
        );

        // Binds must follow placeholder order: SET values first, then the id
        let mut q = sqlx::query_as::<_, User>(&query);

        if let Some(name) = data.name {
            q = q.bind(name);
        }
        if let Some(email) = data.email {
            q = q.bind(email);
        }

        let user = q.bind(id).fetch_optional(pool).await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_struct() {
        let create_user = CreateUser {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            username: "test".to_string(),
            password: "secret".to_string(),
        };

        assert_eq!(create_user.email, "test@example.com");
        assert_eq!(create_user.username, "test");
    }

    #[test]
    fn test_update_user_default() {
        let update = UpdateUser::default();
        assert!(update.name.is_none());
        assert!(update.email.is_none());
    }

    // Integration tests for database operations are in tests/model_tests.rs
}
