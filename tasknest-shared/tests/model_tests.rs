/// Integration tests for the database models
///
/// These tests run against an in-memory SQLite database, so no external
/// services are needed.
/// Run with: cargo test --test model_tests

use tasknest_shared::db::pool::{create_pool, DatabaseConfig};
use tasknest_shared::db::schema::create_schema;
use tasknest_shared::models::message::{CreateMessage, Message};
use tasknest_shared::models::project::{CreateProject, Project, UpdateProject};
use tasknest_shared::models::task::{CreateTask, Task, UpdateTask};
use tasknest_shared::models::user::{CreateUser, UpdateUser, User};

/// Helper to open a fresh database with the schema applied
async fn setup() -> sqlx::SqlitePool {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        ..Default::default()
    };

    let pool = create_pool(config).await.expect("Failed to create pool");
    create_schema(&pool).await.expect("Failed to create schema");
    pool
}

/// Helper to register a user with predictable fields
async fn make_user(pool: &sqlx::SqlitePool, username: &str) -> User {
    User::create(
        pool,
        CreateUser {
            name: format!("{} Simpson", username),
            email: format!("{}@simpson.com", username),
            username: username.to_string(),
            password: format!("{}-secret", username),
        },
    )
    .await
    .expect("Failed to create user")
}

/// Helper to create a project for a user
async fn make_project(pool: &sqlx::SqlitePool, user_id: i64, title: &str) -> Project {
    Project::create(
        pool,
        CreateProject {
            user_id,
            title: title.to_string(),
            creation_date: "2024-01-15".to_string(),
            last_updated: "2024-01-15".to_string(),
        },
    )
    .await
    .expect("Failed to create project")
}

#[tokio::test]
async fn test_user_create_and_find() {
    let pool = setup().await;

    let user = make_user(&pool, "homer").await;
    assert!(user.id > 0, "Autoincrement id should be positive");

    let found = User::find_by_id(&pool, user.id)
        .await
        .expect("Lookup failed")
        .expect("User should exist");

    assert_eq!(found.name, "homer Simpson");
    assert_eq!(found.email, "homer@simpson.com");
    assert_eq!(found.username, "homer");
    assert_eq!(found.password, "homer-secret");
}

#[tokio::test]
async fn test_user_duplicate_username_rejected() {
    let pool = setup().await;

    make_user(&pool, "homer").await;

    let result = User::create(
        &pool,
        CreateUser {
            name: "Impostor".to_string(),
            email: "other@simpson.com".to_string(),
            username: "homer".to_string(),
            password: "stolen".to_string(),
        },
    )
    .await;

    assert!(result.is_err(), "Duplicate username should be rejected");
}

#[tokio::test]
async fn test_find_by_credentials_requires_exact_pair() {
    let pool = setup().await;

    let user = make_user(&pool, "homer").await;

    let found = User::find_by_credentials(&pool, "homer", "homer-secret")
        .await
        .expect("Lookup failed");
    assert_eq!(found.map(|u| u.id), Some(user.id));

    let wrong_password = User::find_by_credentials(&pool, "homer", "wrong")
        .await
        .expect("Lookup failed");
    assert!(wrong_password.is_none(), "Wrong password should not match");

    let wrong_username = User::find_by_credentials(&pool, "bart", "homer-secret")
        .await
        .expect("Lookup failed");
    assert!(wrong_username.is_none(), "Unknown username should not match");
}

#[tokio::test]
async fn test_user_update_is_partial() {
    let pool = setup().await;

    let user = make_user(&pool, "homer").await;

    // Only the email changes; name must be retained
    let updated = User::update(
        &pool,
        user.id,
        UpdateUser {
            email: Some("homer@springfield.com".to_string()),
            ..Default::default()
        },
    )
    .await
    .expect("Update failed")
    .expect("User should exist");

    assert_eq!(updated.name, "homer Simpson");
    assert_eq!(updated.email, "homer@springfield.com");

    // An empty update leaves the row untouched
    let unchanged = User::update(&pool, user.id, UpdateUser::default())
        .await
        .expect("Update failed")
        .expect("User should exist");

    assert_eq!(unchanged.email, "homer@springfield.com");

    // Updating a missing user yields None
    let missing = User::update(&pool, 9999, UpdateUser::default())
        .await
        .expect("Update failed");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_project_listing_is_scoped_to_owner() {
    let pool = setup().await;

    let homer = make_user(&pool, "homer").await;
    let marge = make_user(&pool, "marge").await;

    make_project(&pool, homer.id, "Fix the car").await;
    make_project(&pool, homer.id, "Mow the lawn").await;
    make_project(&pool, marge.id, "Paint the kitchen").await;

    let homers = Project::list_by_user(&pool, homer.id).await.expect("List failed");
    assert_eq!(homers.len(), 2);
    assert!(homers.iter().all(|p| p.user_id == homer.id));

    let marges = Project::list_by_user(&pool, marge.id).await.expect("List failed");
    assert_eq!(marges.len(), 1);
    assert_eq!(marges[0].title, "Paint the kitchen");
}

#[tokio::test]
async fn test_project_find_owned_hides_foreign_rows() {
    let pool = setup().await;

    let homer = make_user(&pool, "homer").await;
    let marge = make_user(&pool, "marge").await;

    let project = make_project(&pool, homer.id, "Fix the car").await;

    let mine = Project::find_owned(&pool, project.id, homer.id)
        .await
        .expect("Lookup failed");
    assert!(mine.is_some());

    let foreign = Project::find_owned(&pool, project.id, marge.id)
        .await
        .expect("Lookup failed");
    assert!(foreign.is_none(), "Another user's project must look missing");
}

#[tokio::test]
async fn test_project_update_and_delete_are_owner_scoped() {
    let pool = setup().await;

    let homer = make_user(&pool, "homer").await;
    let marge = make_user(&pool, "marge").await;

    let project = make_project(&pool, homer.id, "Fix the car").await;

    // Foreign update is rejected by returning None
    let foreign = Project::update(
        &pool,
        project.id,
        marge.id,
        UpdateProject {
            title: Some("Hijacked".to_string()),
            ..Default::default()
        },
    )
    .await
    .expect("Update failed");
    assert!(foreign.is_none());

    // Owner update writes both fields
    let updated = Project::update(
        &pool,
        project.id,
        homer.id,
        UpdateProject {
            title: Some("Fix the wagon".to_string()),
            last_updated: Some("2024-02-01".to_string()),
        },
    )
    .await
    .expect("Update failed")
    .expect("Project should exist");

    assert_eq!(updated.title, "Fix the wagon");
    assert_eq!(updated.last_updated, "2024-02-01");
    assert_eq!(updated.creation_date, "2024-01-15");

    // Foreign delete is a no-op
    let deleted = Project::delete(&pool, project.id, marge.id).await.expect("Delete failed");
    assert!(!deleted);

    let deleted = Project::delete(&pool, project.id, homer.id).await.expect("Delete failed");
    assert!(deleted);

    let remaining = Project::list_by_user(&pool, homer.id).await.expect("List failed");
    assert!(remaining.is_empty());
}

#[tokio::test]
async fn test_task_crud_within_project() {
    let pool = setup().await;

    let homer = make_user(&pool, "homer").await;
    let project = make_project(&pool, homer.id, "Fix the car").await;

    let task = Task::create(
        &pool,
        CreateTask {
            project_id: project.id,
            title: "Buy spark plugs".to_string(),
            creation_date: "2024-01-16".to_string(),
            completed: false,
        },
    )
    .await
    .expect("Failed to create task");

    let listed = Task::list_by_project(&pool, project.id).await.expect("List failed");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, task.id);

    let found = Task::find_in_project(&pool, task.id, project.id)
        .await
        .expect("Lookup failed");
    assert!(found.is_some());

    // Wrong project id hides the task
    let elsewhere = Task::find_in_project(&pool, task.id, project.id + 1)
        .await
        .expect("Lookup failed");
    assert!(elsewhere.is_none());

    let updated = Task::update(
        &pool,
        task.id,
        project.id,
        UpdateTask {
            completed: Some(true),
            ..Default::default()
        },
    )
    .await
    .expect("Update failed")
    .expect("Task should exist");

    assert!(updated.completed);
    assert_eq!(updated.title, "Buy spark plugs");

    let deleted = Task::delete(&pool, task.id, project.id).await.expect("Delete failed");
    assert!(deleted);

    let listed = Task::list_by_project(&pool, project.id).await.expect("List failed");
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_task_title_exists_is_per_project() {
    let pool = setup().await;

    let homer = make_user(&pool, "homer").await;
    let garage = make_project(&pool, homer.id, "Garage").await;
    let garden = make_project(&pool, homer.id, "Garden").await;

    assert!(!Task::title_exists(&pool, garage.id, "Sweep").await.expect("Check failed"));

    Task::create(
        &pool,
        CreateTask {
            project_id: garage.id,
            title: "Sweep".to_string(),
            creation_date: "2024-01-16".to_string(),
            completed: false,
        },
    )
    .await
    .expect("Failed to create task");

    assert!(Task::title_exists(&pool, garage.id, "Sweep").await.expect("Check failed"));

    // The same title is free in a different project
    assert!(!Task::title_exists(&pool, garden.id, "Sweep").await.expect("Check failed"));
}

#[tokio::test]
async fn test_project_delete_leaves_tasks_behind() {
    let pool = setup().await;

    let homer = make_user(&pool, "homer").await;
    let project = make_project(&pool, homer.id, "Fix the car").await;

    let task = Task::create(
        &pool,
        CreateTask {
            project_id: project.id,
            title: "Buy spark plugs".to_string(),
            creation_date: "2024-01-16".to_string(),
            completed: false,
        },
    )
    .await
    .expect("Failed to create task");

    let deleted = Project::delete(&pool, project.id, homer.id).await.expect("Delete failed");
    assert!(deleted);

    // The task survives with its project_id pointing at a missing row
    let orphan = Task::find_by_id(&pool, task.id)
        .await
        .expect("Lookup failed")
        .expect("Task should survive project deletion");

    assert_eq!(orphan.project_id, project.id);
}

#[tokio::test]
async fn test_message_visibility_is_limited_to_participants() {
    let pool = setup().await;

    let homer = make_user(&pool, "homer").await;
    let marge = make_user(&pool, "marge").await;
    let flanders = make_user(&pool, "flanders").await;

    let message = Message::create(
        &pool,
        CreateMessage {
            sender_id: homer.id,
            receiver_id: marge.id,
            content: "Buy more Duff".to_string(),
            creation_date: "2024-01-17".to_string(),
        },
    )
    .await
    .expect("Failed to create message");

    // Both participants see it in their lists
    let homers = Message::list_for_user(&pool, homer.id).await.expect("List failed");
    assert_eq!(homers.len(), 1);

    let marges = Message::list_for_user(&pool, marge.id).await.expect("List failed");
    assert_eq!(marges.len(), 1);
    assert_eq!(marges[0].content, "Buy more Duff");

    // A third user sees nothing
    let neighbors = Message::list_for_user(&pool, flanders.id).await.expect("List failed");
    assert!(neighbors.is_empty());

    let hidden = Message::find_for_user(&pool, message.id, flanders.id)
        .await
        .expect("Lookup failed");
    assert!(hidden.is_none());
}

#[tokio::test]
async fn test_message_delete_allowed_for_either_participant() {
    let pool = setup().await;

    let homer = make_user(&pool, "homer").await;
    let marge = make_user(&pool, "marge").await;
    let flanders = make_user(&pool, "flanders").await;

    let message = Message::create(
        &pool,
        CreateMessage {
            sender_id: homer.id,
            receiver_id: marge.id,
            content: "Buy more Duff".to_string(),
            creation_date: "2024-01-17".to_string(),
        },
    )
    .await
    .expect("Failed to create message");

    // An outsider cannot delete
    let denied = Message::delete(&pool, message.id, flanders.id).await.expect("Delete failed");
    assert!(!denied);

    // The receiver can
    let deleted = Message::delete(&pool, message.id, marge.id).await.expect("Delete failed");
    assert!(deleted);

    let remaining = Message::list_for_user(&pool, homer.id).await.expect("List failed");
    assert!(remaining.is_empty());
}
