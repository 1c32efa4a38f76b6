/// Task endpoints
///
/// Task CRUD nested under a project. Every handler re-verifies that the
/// parent project belongs to the acting user before touching any task,
/// so a foreign or missing project id answers 404 no matter what the
/// task id is.
///
/// # Endpoints
///
/// - `GET /api/projects/{pk}/tasks/` - List tasks in a project
/// - `POST /api/projects/{pk}/tasks/` - Create a task
/// - `GET /api/projects/{pk}/tasks/{task_pk}/` - Fetch one task
/// - `PUT /api/projects/{pk}/tasks/{task_pk}/` - Update a task
/// - `DELETE /api/projects/{pk}/tasks/{task_pk}/` - Delete a task

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
    project::Project,
    task::{CreateTask, Task, UpdateTask},
    user::User,
};

/// Create request
///
/// Absent fields default: empty strings, `completed` false.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    /// Task title, unique within the project
    #[serde(default)]
    pub title: String,

    /// Creation date, free-form text
    #[serde(default)]
    pub creation_date: String,

    /// Whether the task starts out completed
    #[serde(default)]
    pub completed: bool,
}

/// Update request, all fields optional
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    /// New title
    pub title: Option<String>,

    /// New creation date
    pub creation_date: Option<String>,

    /// New completion flag
    pub completed: Option<bool>,
}

/// Resolves the parent project or rejects the request
///
/// Shared by every task handler. A project that exists but belongs to
/// someone else is reported exactly like a missing one.
async fn resolve_project(state: &AppState, project_id: i64, user_id: i64) -> ApiResult<Project> {
    match Project::find_owned(&state.db, project_id, user_id).await? {
        Some(project) => Ok(project),
        None => Err(ApiError::NotFound("Project not found".to_string())),
    }
}

/// List the tasks of one project
pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(project_id): Path<i64>,
) -> ApiResult<Json<Vec<Task>>> {
    let project = resolve_project(&state, project_id, user.id).await?;

    let tasks = Task::list_by_project(&state.db, project.id).await?;
    Ok(Json(tasks))
}

/// Create a task in a project
///
/// Titles are unique per project. The duplicate check and the insert
/// run as separate statements, so concurrent creates with the same
/// title can slip through.
///
/// # Errors
///
/// - `400 Bad Request`: A task with this title already exists here
/// - `404 Not Found`: The project is missing or not owned by the caller
pub async fn create_task(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(project_id): Path<i64>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let project = resolve_project(&state, project_id, user.id).await?;

    if Task::title_exists(&state.db, project.id, &req.title).await? {
        return Err(ApiError::Validation(
            "Task already exists for this project".to_string(),
        ));
    }

    let task = Task::create(
        &state.db,
        CreateTask {
            project_id: project.id,
            title: req.title,
            creation_date: req.creation_date,
            completed: req.completed,
        },
    )
    .await?;

    tracing::debug!(task_id = task.id, project_id = project.id, "task created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Task created successfully")),
    ))
}

/// Fetch one task
///
/// # Errors
///
/// - `404 Not Found`: Project not owned, or task not in this project
pub async fn get_task(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path((project_id, task_id)): Path<(i64, i64)>,
) -> ApiResult<Json<Task>> {
    let project = resolve_project(&state, project_id, user.id).await?;

    match Task::find_in_project(&state.db, task_id, project.id).await? {
        Some(task) => Ok(Json(task)),
        None => Err(ApiError::NotFound("Task not found".to_string())),
    }
}

/// Update a task
pub async fn update_task(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path((project_id, task_id)): Path<(i64, i64)>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let project = resolve_project(&state, project_id, user.id).await?;

    let updated = Task::update(
        &state.db,
        task_id,
        project.id,
        UpdateTask {
            title: req.title,
            creation_date: req.creation_date,
            completed: req.completed,
        },
    )
    .await?;

    match updated {
        Some(_) => Ok(Json(MessageResponse::new("Task updated successfully"))),
        None => Err(ApiError::NotFound("Task not found".to_string())),
    }
}

/// Delete a task
pub async fn delete_task(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path((project_id, task_id)): Path<(i64, i64)>,
) -> ApiResult<Json<MessageResponse>> {
    let project = resolve_project(&state, project_id, user.id).await?;

    if Task::delete(&state.db, task_id, project.id).await? {
        Ok(Json(MessageResponse::new("Task deleted successfully")))
    } else {
        Err(ApiError::NotFound("Task not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults_completed_to_false() {
        let req: CreateTaskRequest =
            serde_json::from_str(r#"{"title": "Buy beer"}"#).expect("Should deserialize");

        assert_eq!(req.title, "Buy beer");
        assert!(!req.completed);
    }

    #[test]
    fn test_update_request_parses_partial_body() {
        let req: UpdateTaskRequest =
            serde_json::from_str(r#"{"completed": true}"#).expect("Should deserialize");

        assert_eq!(req.completed, Some(true));
        assert!(req.title.is_none());
        assert!(req.creation_date.is_none());
    }
}
