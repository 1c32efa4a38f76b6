/// Integration tests for schema bootstrap
///
/// These tests run against an in-memory SQLite database, so no external
/// services are needed.
/// Run with: cargo test --test db_schema_tests

use tasknest_shared::db::pool::{close_pool, create_pool, DatabaseConfig};
use tasknest_shared::db::schema::{create_schema, recreate_schema};

/// Helper to open a fresh in-memory database
async fn memory_pool() -> sqlx::SqlitePool {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        ..Default::default()
    };

    create_pool(config).await.expect("Failed to create pool")
}

/// Helper to check a table exists in sqlite_master
async fn table_exists(pool: &sqlx::SqlitePool, name: &str) -> bool {
    sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?)")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap_or_else(|e| panic!("Failed to check for table {}: {}", name, e))
}

#[tokio::test]
async fn test_create_schema_creates_all_tables() {
    let pool = memory_pool().await;

    create_schema(&pool).await.expect("Schema creation failed");

    for table in ["users", "projects", "tasks", "messages"] {
        assert!(
            table_exists(&pool, table).await,
            "Table '{}' should exist after schema creation",
            table
        );
    }

    close_pool(pool).await;
}

#[tokio::test]
async fn test_create_schema_is_idempotent() {
    let pool = memory_pool().await;

    create_schema(&pool).await.expect("First run failed");

    // Existing data must survive a second run
    sqlx::query("INSERT INTO users (name, email, username, password) VALUES (?, ?, ?, ?)")
        .bind("Homer Simpson")
        .bind("homer@simpson.com")
        .bind("homer")
        .bind("duffbeer")
        .execute(&pool)
        .await
        .expect("Insert failed");

    create_schema(&pool).await.expect("Second run failed");

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .expect("Count failed");

    assert_eq!(count, 1, "Schema re-run should not touch existing rows");

    close_pool(pool).await;
}

#[tokio::test]
async fn test_recreate_schema_wipes_data() {
    let pool = memory_pool().await;

    create_schema(&pool).await.expect("Schema creation failed");

    sqlx::query("INSERT INTO users (name, email, username, password) VALUES (?, ?, ?, ?)")
        .bind("Homer Simpson")
        .bind("homer@simpson.com")
        .bind("homer")
        .bind("duffbeer")
        .execute(&pool)
        .await
        .expect("Insert failed");

    recreate_schema(&pool).await.expect("Recreate failed");

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .expect("Count failed");

    assert_eq!(count, 0, "Recreate should start from empty tables");

    for table in ["users", "projects", "tasks", "messages"] {
        assert!(
            table_exists(&pool, table).await,
            "Table '{}' should exist after recreate",
            table
        );
    }

    close_pool(pool).await;
}

#[tokio::test]
async fn test_references_are_not_enforced() {
    let pool = memory_pool().await;

    create_schema(&pool).await.expect("Schema creation failed");

    // REFERENCES clauses are declarative only; inserting a task that points
    // at a project that was never created must succeed
    let result = sqlx::query(
        "INSERT INTO tasks (project_id, title, creation_date, completed) VALUES (?, ?, ?, ?)",
    )
    .bind(999i64)
    .bind("Orphan from day one")
    .bind("2024-01-15")
    .bind(false)
    .execute(&pool)
    .await;

    assert!(
        result.is_ok(),
        "Dangling project_id should be accepted: {:?}",
        result.err()
    );

    close_pool(pool).await;
}

#[tokio::test]
async fn test_unique_constraints_on_users() {
    let pool = memory_pool().await;

    create_schema(&pool).await.expect("Schema creation failed");

    sqlx::query("INSERT INTO users (name, email, username, password) VALUES (?, ?, ?, ?)")
        .bind("Homer Simpson")
        .bind("homer@simpson.com")
        .bind("homer")
        .bind("duffbeer")
        .execute(&pool)
        .await
        .expect("First insert failed");

    // Same username, different email
    let duplicate_username =
        sqlx::query("INSERT INTO users (name, email, username, password) VALUES (?, ?, ?, ?)")
            .bind("Other Homer")
            .bind("other@simpson.com")
            .bind("homer")
            .bind("duffbeer")
            .execute(&pool)
            .await;

    assert!(duplicate_username.is_err(), "Duplicate username should be rejected");

    // Same email, different username
    let duplicate_email =
        sqlx::query("INSERT INTO users (name, email, username, password) VALUES (?, ?, ?, ?)")
            .bind("Other Homer")
            .bind("homer@simpson.com")
            .bind("homer2")
            .bind("duffbeer")
            .execute(&pool)
            .await;

    assert!(duplicate_email.is_err(), "Duplicate email should be rejected");

    close_pool(pool).await;
}
