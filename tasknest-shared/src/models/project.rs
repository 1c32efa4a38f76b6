//! Project model and database operations
//!
//! Projects belong to exactly one user and act as containers for tasks. Every
//! API lookup goes through the owner-scoped queries so one user can never
//! reach another user's rows.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE projects (
//!     id INTEGER PRIMARY KEY AUTOINCREMENT,
//!     user_id INTEGER NOT NULL REFERENCES users(id),
//!     title TEXT NOT NULL,
//!     creation_date TEXT NOT NULL,
//!     last_updated TEXT NOT NULL
//! );
//! ```
//!
//! Dates are stored as plain text. The API writes `last_updated` itself on
//! every update, formatted as `YYYY-MM-DD`.
//!
//! # Example
//!
//! ```no_run
//! use tasknest_shared::models::project::{Project, CreateProject};
//! use tasknest_shared::db::pool::{create_pool, DatabaseConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool(DatabaseConfig::default()).await?;
//!
//! let project = Project::create(&pool, CreateProject {
//!     user_id: 1,
//!     title: "Home renovation".to_string(),
//!     creation_date: "2024-01-15".to_string(),
//!     last_updated: "2024-01-15".to_string(),
//! }).await?;
//!
//! let mine = Project::list_by_user(&pool, 1).await?;
//! assert!(mine.iter().any(|p| p.id == project.id));
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Project model representing a task container owned by one user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    /// Unique project ID (autoincrement)
    pub id: i64,

    /// Owning user
    pub user_id: i64,

    /// Project title
    pub title: String,

    /// Creation date as supplied by the client
    pub creation_date: String,

    /// Last update date, overwritten by the API on every update
    pub last_updated: String,
}

/// Input for creating a new project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProject {
    /// Owning user
    pub user_id: i64,

    /// Project title
    pub title: String,

    /// Creation date (free-form text from the client)
    pub creation_date: String,

    /// Initial last-updated date
    pub last_updated: String,
}

/// Input for updating a project
///
/// Only non-None fields will be updated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProject {
    /// New title
    pub title: Option<String>,

    /// New last-updated date
    pub last_updated: Option<String>,
}

impl Project {
    /// Creates a new project
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create(pool: &SqlitePool, data: CreateProject) -> Result<Self, sqlx::Error> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (user_id, title, creation_date, last_updated)
            VALUES (?, ?, ?, ?)
            RETURNING id, user_id, title, creation_date, last_updated
            "#,
        )
        .bind(data.user_id)
        .bind(data.title)
        .bind(data.creation_date)
        .bind(data.last_updated)
        .fetch_one(pool)
        .await?;

        Ok(project)
    }

    /// Lists all projects owned by a user, oldest first
    pub async fn list_by_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, user_id, title, creation_date, last_updated
            FROM projects
            WHERE user_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(projects)
    }

    /// Finds a project by ID with owner isolation
    ///
    /// This is the lookup API endpoints use. A project that exists but belongs
    /// to a different user comes back as None, indistinguishable from a
    /// missing row.
    pub async fn find_owned(
        pool: &SqlitePool,
        id: i64,
        user_id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, user_id, title, creation_date, last_updated
            FROM projects
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(project)
    }

    /// Updates a project owned by the given user
    ///
    /// Only non-None fields in `data` are written. Returns None when the
    /// project does not exist or belongs to someone else.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        user_id: i64,
        data: UpdateProject,
    ) -> Result<Option<Self>, sqlx::Error> {
        // Build dynamic update query based on which fields are present
        let mut sets: Vec<&str> = Vec::new();

        if data.title.is_some() {
            sets.push("title = ?");
        }
        if data.last_updated.is_some() {
            sets.push("last_updated = ?");
        }

        if sets.is_empty() {
            return Self::find_owned(pool, id, user_id).await;
        }

        let query = format!(
            "UPDATE projects SET {} WHERE id = ? AND user_id = ? \
             RETURNING id, user_id, title, creation_date, last_updated",
            sets.join(", ")
        );

        let mut q = sqlx::query_as::<_, Project>(&query);

        if let Some(title) = data.title {
            q = q.bind(title);
        }
        if let Some(last_updated) = data.last_updated {
            q = q.bind(last_updated);
        }

        let project = q.bind(id).bind(user_id).fetch_optional(pool).await?;

        Ok(project)
    }

    /// Deletes a project owned by the given user
    ///
    /// Tasks under the project are left in place with their project_id intact.
    /// The REFERENCES clause is declarative only, so nothing cascades.
    ///
    /// # Returns
    ///
    /// True if a row was deleted, false if the project was missing or foreign
    pub async fn delete(pool: &SqlitePool, id: i64, user_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_project_struct() {
        let create = CreateProject {
            user_id: 1,
            title: "Test project".to_string(),
            creation_date: "2024-01-15".to_string(),
            last_updated: "2024-01-15".to_string(),
        };

        assert_eq!(create.user_id, 1);
        assert_eq!(create.title, "Test project");
    }

    #[test]
    fn test_update_project_default() {
        let update = UpdateProject::default();
        assert!(update.title.is_none());
        assert!(update.last_updated.is_none());
    }

    // Integration tests for database operations are in tests/model_tests.rs
}
