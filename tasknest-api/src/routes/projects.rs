/// Project endpoints
///
/// CRUD over the authenticated user's projects. Every lookup is scoped
/// to the owner, so another user's project id behaves like a missing
/// row.
///
/// # Endpoints
///
/// - `GET /api/projects/` - List own projects
/// - `POST /api/projects/` - Create a project
/// - `GET /api/projects/{id}/` - Fetch one project
/// - `PUT /api/projects/{id}/` - Update title, restamp last_updated
/// - `DELETE /api/projects/{id}/` - Delete (tasks are left in place)

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
    project::{CreateProject, Project, UpdateProject},
    user::User,
};

/// Create request
///
/// No required-field validation: absent fields land as empty strings.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    /// Project title
    #[serde(default)]
    pub title: String,

    /// Creation date, free-form text
    #[serde(default)]
    pub creation_date: String,

    /// Initial last-updated date
    #[serde(default)]
    pub last_updated: String,
}

/// Update request
///
/// Only the title can be set by the client. `last_updated` is stamped
/// server-side regardless of what the body carries.
#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    /// New title
    pub title: Option<String>,
}

/// List the acting user's projects
pub async fn list_projects(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> ApiResult<Json<Vec<Project>>> {
    let projects = Project::list_by_user(&state.db, user.id).await?;
    Ok(Json(projects))
}

/// Create a project owned by the acting user
///
/// # Endpoint
///
/// ```text
/// POST /api/projects/
/// Content-Type: application/json
///
/// {
///   "title": "Rebuild the garage",
///   "creation_date": "2024-01-15",
///   "last_updated": "2024-01-15"
/// }
/// ```
pub async fn create_project(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(req): Json<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let project = Project::create(
        &state.db,
        CreateProject {
            user_id: user.id,
            title: req.title,
            creation_date: req.creation_date,
            last_updated: req.last_updated,
        },
    )
    .await?;

    tracing::debug!(project_id = project.id, user_id = user.id, "project created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Project created successfully")),
    ))
}

/// Fetch one project
///
/// # Errors
///
/// - `404 Not Found`: No such project, or it belongs to another user
pub async fn get_project(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(project_id): Path<i64>,
) -> ApiResult<Json<Project>> {
    match Project::find_owned(&state.db, project_id, user.id).await? {
        Some(project) => Ok(Json(project)),
        None => Err(ApiError::NotFound("Project not found".to_string())),
    }
}

/// Update a project
///
/// `last_updated` is always overwritten with today's date; the client
/// has no say in it.
pub async fn update_project(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(project_id): Path<i64>,
    Json(req): Json<UpdateProjectRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();

    let updated = Project::update(
        &state.db,
        project_id,
        user.id,
        UpdateProject {
            title: req.title,
            last_updated: Some(today),
        },
    )
    .await?;

    match updated {
        Some(_) => Ok(Json(MessageResponse::new("Project updated successfully"))),
        None => Err(ApiError::NotFound("Project not found".to_string())),
    }
}

/// Delete a project
///
/// The project's tasks survive the delete and stay queryable through
/// their ids.
pub async fn delete_project(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(project_id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    if Project::delete(&state.db, project_id, user.id).await? {
        Ok(Json(MessageResponse::new("Project deleted successfully")))
    } else {
        Err(ApiError::NotFound("Project not found".to_string()))
    }
}
