/// Database layer for TaskNest
///
/// This module provides connection pooling and the schema bootstrap.
///
/// # Modules
///
/// - `pool`: SQLite connection pool management with a startup health check
/// - `schema`: table creation (no migrations tooling beyond this)
/// - Models are in the `models` module at crate root level
///
/// # Example
///
/// ```no_run
/// use tasknest_shared::db::pool::{create_pool, DatabaseConfig};
/// use tasknest_shared::db::schema::create_schema;
///
/// # async fn example() -> Result<(), sqlx::Error> {
/// let config = DatabaseConfig {
///     url: "sqlite:tasknest.db?mode=rwc".to_string(),
///     ..Default::default()
/// };
///
/// let pool = create_pool(config).await?;
/// create_schema(&pool).await?;
/// # Ok(())
/// # }
/// ```

pub mod pool;
pub mod schema;
