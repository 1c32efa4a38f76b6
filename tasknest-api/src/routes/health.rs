/// Health check endpoint
///
/// Answers `GET /health` with the service status and whether the
/// SQLite database is reachable.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "database": "connected"
/// }
/// ```

use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status, `healthy` or `degraded`
    pub status: String,

    /// Application version
    pub version: String,

    /// Database status, `connected` or `disconnected`
    pub database: String,
}

/// Health check handler
///
/// Probes the database with a trivial query. A failing probe degrades
/// the reported status but the endpoint itself still answers 200, so
/// load balancers can tell "slow database" from "process gone".
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let database_up = sqlx::query("SELECT 1").fetch_one(&state.db).await.is_ok();

    Ok(Json(HealthResponse {
        status: if database_up { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: if database_up {
            "connected"
        } else {
            "disconnected"
        }
        .to_string(),
    }))
}
