/// Database schema bootstrap
///
/// This module creates the four application tables. There is no migrations
/// tooling beyond this: the schema is applied with `CREATE TABLE IF NOT
/// EXISTS` on startup, and `recreate_schema` resets everything for the
/// ephemeral in-memory variant and for tests.
///
/// # Example
///
/// ```no_run
/// use tasknest_shared::db::pool::{create_pool, DatabaseConfig};
/// use tasknest_shared::db::schema::create_schema;
///
/// # async fn example() -> Result<(), sqlx::Error> {
/// let config = DatabaseConfig {
///     url: "sqlite::memory:".to_string(),
///     ..Default::default()
/// };
/// let pool = create_pool(config).await?;
/// create_schema(&pool).await?;
/// # Ok(())
/// # }
/// ```

use sqlx::SqlitePool;
use tracing::{debug, info};

/// The application tables, in creation order.
///
/// REFERENCES clauses are declarative only: foreign-key enforcement stays
/// off (SQLite's default, never enabled here), so deleting a project leaves
/// its tasks in place. Task title uniqueness per project is checked at write
/// time, not by a constraint.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS projects (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(id),
        title TEXT NOT NULL,
        creation_date TEXT NOT NULL,
        last_updated TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        project_id INTEGER NOT NULL REFERENCES projects(id),
        title TEXT NOT NULL,
        creation_date TEXT NOT NULL,
        completed BOOLEAN NOT NULL DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS messages (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        sender_id INTEGER NOT NULL REFERENCES users(id),
        receiver_id INTEGER NOT NULL REFERENCES users(id),
        content TEXT NOT NULL,
        creation_date TEXT NOT NULL
    )",
];

/// Tables in drop order, children before parents. Nothing enforces the
/// references, so the order is cosmetic.
const TABLES: &[&str] = &["messages", "tasks", "projects", "users"];

/// Creates all application tables if they do not exist yet
///
/// Safe to call on every startup.
///
/// # Errors
///
/// Returns an error if any DDL statement fails to execute.
pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Creating database schema");

    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }

    debug!(tables = TABLES.len(), "Database schema ready");
    Ok(())
}

/// Drops and recreates all application tables
///
/// This permanently deletes all data. Used to reset the ephemeral in-memory
/// variant and by tests that need a clean database.
///
/// # Errors
///
/// Returns an error if any DDL statement fails to execute.
pub async fn recreate_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Recreating database schema");

    for table in TABLES {
        sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
            .execute(pool)
            .await?;
    }

    create_schema(pool).await
}
