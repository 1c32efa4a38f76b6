/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use tasknest_api::app::{build_router, AppState};
/// use tasknest_api::config::Config;
/// use tasknest_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(DatabaseConfig {
///     url: config.database.url.clone(),
///     ..Default::default()
/// })
/// .await?;
/// let state = AppState::new(pool, config);
/// let app = build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tasknest_shared::auth::middleware::{basic_auth_middleware, AuthError};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET  /                                        # API banner (public)
/// ├── GET  /health                                  # Health check (public)
/// ├── POST /api/user/register/                      # Registration (public)
/// ├── GET|PUT         /api/user/                    # Own profile
/// ├── GET|POST        /api/projects/                # Project collection
/// ├── GET|PUT|DELETE  /api/projects/:id/            # Single project
/// ├── GET|POST        /api/projects/:id/tasks/      # Task collection
/// ├── GET|PUT|DELETE  /api/projects/:id/tasks/:id/  # Single task
/// ├── GET|POST        /api/messages/                # Message collection
/// └── GET|DELETE      /api/messages/:id/            # Single message
/// ```
///
/// Everything below the registration route requires Basic credentials.
/// Paths are registered with their trailing slash and match exactly; there
/// is no redirect from the slashless form.
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (permissive, development server)
/// 3. Basic auth (protected routes only)
pub fn build_router(state: AppState) -> Router {
    // Import route handlers
    use crate::routes;

    // Public routes, no auth
    let public_routes = Router::new()
        .route("/", get(routes::root::index))
        .route("/health", get(routes::health::health_check))
        .route("/api/user/register/", post(routes::users::register));

    // Profile routes for the authenticated user
    let user_routes = Router::new().route(
        "/api/user/",
        get(routes::users::get_current_user).put(routes::users::update_current_user),
    );

    // Project CRUD, scoped to the owner
    let project_routes = Router::new()
        .route(
            "/api/projects/",
            get(routes::projects::list_projects).post(routes::projects::create_project),
        )
        .route(
            "/api/projects/:project_id/",
            get(routes::projects::get_project)
                .put(routes::projects::update_project)
                .delete(routes::projects::delete_project),
        );

    // Task CRUD, nested under an owned project
    let task_routes = Router::new()
        .route(
            "/api/projects/:project_id/tasks/",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route(
            "/api/projects/:project_id/tasks/:task_id/",
            get(routes::tasks::get_task)
                .put(routes::tasks::update_task)
                .delete(routes::tasks::delete_task),
        );

    // Messages between users
    let message_routes = Router::new()
        .route(
            "/api/messages/",
            get(routes::messages::list_messages).post(routes::messages::send_message),
        )
        .route(
            "/api/messages/:message_id/",
            get(routes::messages::get_message).delete(routes::messages::delete_message),
        );

    // Everything protected shares one Basic-auth layer
    let protected_routes = Router::new()
        .merge(user_routes)
        .merge(project_routes)
        .merge(task_routes)
        .merge(message_routes)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            basic_auth_layer,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Basic authentication middleware layer
///
/// Resolves the `Authorization: Basic` header to a user row and injects it
/// into request extensions for the handlers downstream.
async fn basic_auth_layer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    basic_auth_middleware(state.db.clone(), req, next).await
}
