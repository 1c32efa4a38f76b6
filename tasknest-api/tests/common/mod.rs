/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - In-memory test database with the full schema applied
/// - Router construction with a throwaway config
/// - Request building with optional Basic auth and JSON bodies
/// - Response body parsing

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::Value;
use sqlx::SqlitePool;
use tasknest_api::app::{build_router, AppState};
use tasknest_api::config::{ApiConfig, Config, DatabaseConfig};
use tasknest_shared::auth::basic::Credentials;
use tasknest_shared::db::{pool, schema};
use tower::Service as _;

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: SqlitePool,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a new test context with a fresh in-memory database
    ///
    /// Every context gets its own database, so tests never see each
    /// other's rows and need no cleanup.
    pub async fn new() -> anyhow::Result<Self> {
        let db = pool::create_pool(pool::DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..Default::default()
        })
        .await?;

        schema::create_schema(&db).await?;

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
        };

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(TestContext { db, app })
    }

    /// Sends a request through the router
    pub async fn send(&self, request: Request<Body>) -> Response {
        self.app
            .clone()
            .call(request)
            .await
            .expect("Router should never fail")
    }
}

/// Returns a Basic auth header value for the given credentials
pub fn basic_auth(username: &str, password: &str) -> String {
    Credentials::new(username, password).to_header_value()
}

/// Builds a request with optional Basic auth and JSON body
pub fn build_request(
    method: &str,
    uri: &str,
    auth: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }

    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .expect("Request should build"),
        None => builder.body(Body::empty()).expect("Request should build"),
    }
}

/// Reads a response body as JSON
pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Body should be readable");
    serde_json::from_slice(&bytes).expect("Body should be valid JSON")
}

/// Registers a user through the API, panicking on anything but 201
pub async fn register_user(
    ctx: &TestContext,
    name: &str,
    email: &str,
    username: &str,
    password: &str,
) {
    let response = ctx
        .send(build_request(
            "POST",
            "/api/user/register/",
            None,
            Some(serde_json::json!({
                "name": name,
                "email": email,
                "username": username,
                "password": password,
            })),
        ))
        .await;

    assert_eq!(
        response.status(),
        StatusCode::CREATED,
        "Registration of {} should succeed",
        username
    );
}

/// Fetches the acting user's id via `GET /api/user/`
pub async fn user_id(ctx: &TestContext, auth: &str) -> i64 {
    let response = ctx
        .send(build_request("GET", "/api/user/", Some(auth), None))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    body["id"].as_i64().expect("Profile should carry an id")
}
