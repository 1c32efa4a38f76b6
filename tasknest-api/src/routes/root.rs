/// Service banner endpoint
///
/// Serves a small JSON document describing the API so that a bare
/// `GET /` answers with something more useful than a 404.
use axum::Json;
use serde::{Deserialize, Serialize};

/// Banner returned from the index route
#[derive(Debug, Serialize, Deserialize)]
pub struct BannerResponse {
    /// Service name
    pub name: String,
    /// Service version
    pub version: String,
    /// Entry points worth knowing about
    pub endpoints: Vec<String>,
}

/// Root route handler
///
/// Public. Lists the top-level endpoint groups; everything under
/// `/api/` except registration requires Basic auth.
pub async fn index() -> Json<BannerResponse> {
    Json(BannerResponse {
        name: "tasknest-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: vec![
            "/health".to_string(),
            "/api/user/register/".to_string(),
            "/api/user/".to_string(),
            "/api/projects/".to_string(),
            "/api/messages/".to_string(),
        ],
    })
}
