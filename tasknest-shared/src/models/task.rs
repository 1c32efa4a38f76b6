//! Task model and database operations
//!
//! Tasks are to-do items nested under a project. All API access is scoped to
//! the project they belong to, and the project itself is only reachable by
//! its owner, so the scoping chain is user -> project -> task.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE tasks (
//!     id INTEGER PRIMARY KEY AUTOINCREMENT,
//!     project_id INTEGER NOT NULL REFERENCES projects(id),
//!     title TEXT NOT NULL,
//!     creation_date TEXT NOT NULL,
//!     completed BOOLEAN NOT NULL DEFAULT 0
//! );
//! ```
//!
//! Deleting a project does not touch its tasks. The REFERENCES clause is
//! declarative only, so orphaned rows keep their project_id.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Task model representing a single to-do item in a project
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID (autoincrement)
    pub id: i64,

    /// Project this task belongs to
    pub project_id: i64,

    /// Task title, unique within its project at creation time
    pub title: String,

    /// Creation date as supplied by the client
    pub creation_date: String,

    /// Whether the task has been completed
    pub completed: bool,
}

/// Input for creating a new task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Project this task belongs to
    pub project_id: i64,

    /// Task title
    pub title: String,

    /// Creation date (free-form text from the client)
    pub creation_date: String,

    /// Initial completion flag
    pub completed: bool,
}

/// Input for updating a task
///
/// Only non-None fields will be updated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    /// New title
    pub title: Option<String>,

    /// New creation date
    pub creation_date: Option<String>,

    /// New completion flag
    pub completed: Option<bool>,
}

impl Task {
    /// Creates a new task
    ///
    /// Callers are expected to run [`Task::title_exists`] first; this insert
    /// itself does not enforce title uniqueness.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create(pool: &SqlitePool, data: CreateTask) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (project_id, title, creation_date, completed)
            VALUES (?, ?, ?, ?)
            RETURNING id, project_id, title, creation_date, completed
            "#,
        )
        .bind(data.project_id)
        .bind(data.title)
        .bind(data.creation_date)
        .bind(data.completed)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Lists all tasks in a project, oldest first
    pub async fn list_by_project(
        pool: &SqlitePool,
        project_id: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, project_id, title, creation_date, completed
            FROM tasks
            WHERE project_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(project_id)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Finds a task by ID within a specific project
    ///
    /// This is the lookup API endpoints use. A task that exists under a
    /// different project comes back as None.
    pub async fn find_in_project(
        pool: &SqlitePool,
        id: i64,
        project_id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, project_id, title, creation_date, completed
            FROM tasks
            WHERE id = ? AND project_id = ?
            "#,
        )
        .bind(id)
        .bind(project_id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Finds a task by ID without project scoping
    ///
    /// Orphaned tasks whose project has been deleted are still reachable
    /// through this lookup.
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, project_id, title, creation_date, completed
            FROM tasks
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Checks whether a title is already taken within a project
    ///
    /// The check and any subsequent insert are separate statements, so two
    /// concurrent creates with the same title can both pass.
    pub async fn title_exists(
        pool: &SqlitePool,
        project_id: i64,
        title: &str,
    ) -> Result<bool, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM tasks WHERE project_id = ? AND title = ?")
                .bind(project_id)
                .bind(title)
                .fetch_one(pool)
                .await?;

        Ok(count > 0)
    }

    /// Updates a task within a specific project
    ///
    /// Only non-None fields in `data` are written. Returns None when the task
    /// does not exist under the given project.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        project_id: i64,
        data: UpdateTask,
    ) -> Result<Option<Self>, sqlx::Error> {
        // Build dynamic update query based on which fields are present
        let mut sets: Vec<&str> = Vec::new();

        if data.title.is_some() {
            sets.push("title = ?");
        }
        if data.creation_date.is_some() {
            sets.push("creation_date = ?");
        }
        if data.completed.is_some() {
            sets.push("completed = ?");
        }

        if sets.is_empty() {
            return Self::find_in_project(pool, id, project_id).await;
        }

        let query = format!(
            "UPDATE tasks SET {} WHERE id = ? AND project_id = ? \
             RETURNING id, project_id, title, creation_date, completed",
            sets.join(", ")
        );

        let mut q = sqlx::query_as::<_, Task>(&query);

        if let Some(title) = data.title {
            q = q.bind(title);
        }
        if let Some(creation_date) = data.creation_date {
            q = q.bind(creation_date);
        }
        if let Some(completed) = data.completed {
            q = q.bind(completed);
        }

        let task = q.bind(id).bind(project_id).fetch_optional(pool).await?;

        Ok(task)
    }

    /// Deletes a task within a specific project
    ///
    /// # Returns
    ///
    /// True if a row was deleted, false if the task was missing or lives
    /// under another project
    pub async fn delete(pool: &SqlitePool, id: i64, project_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ? AND project_id = ?")
            .bind(id)
            .bind(project_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
