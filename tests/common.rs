/// Common test utilities for Cartage integration tests
///
/// This file contains shared functions for all integration tests: test
/// application setup against an in-memory database, and helpers for sending
/// JSON requests with and without the admin bearer token.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::Service;

use cartage::{
    config::{base_config, Config},
    create_app,
    db::{init_pool, DbPool},
    run_migrations, AppState,
};

/// Bearer token wired into every test application
pub const ADMIN_TOKEN: &str = "test-admin-token";

/// Creates a test application with an in-memory SQLite database
///
/// Using an in-memory database ensures that:
/// - Tests run quickly
/// - Tests are isolated from each other
/// - No cleanup is needed after tests
pub fn create_test_app() -> Router {
    create_test_app_with_pool().0
}

/// Like [`create_test_app`], also returning the underlying pool so tests
/// can inspect or seed the database directly
pub fn create_test_app_with_pool() -> (Router, Arc<DbPool>) {
    build_app(|_| {})
}

/// Creates a test application with a tweaked configuration
pub fn create_test_app_with_config(mutate: impl FnOnce(&mut Config)) -> (Router, Arc<DbPool>) {
    build_app(mutate)
}

fn build_app(mutate: impl FnOnce(&mut Config)) -> (Router, Arc<DbPool>) {
    // A unique shared in-memory database per test application; see the
    // repo test harness for why cache=shared is required.
    let database_url = format!("file:itest_{}?mode=memory&cache=shared", uuid::Uuid::new_v4());
    let pool = Arc::new(init_pool(&database_url));

    let mut conn = pool.get().expect("Failed to get connection");
    run_migrations(&mut conn);
    drop(conn);

    let mut config = base_config(None);
    config.admin_token = Some(ADMIN_TOKEN.to_string());
    mutate(&mut config);

    let state = AppState::new(pool.clone(), config);
    (create_app(state), pool)
}

/// Sends a request and parses the JSON response body
///
/// ### Arguments
///
/// * `app` - The test application
/// * `method` - HTTP method
/// * `uri` - Request path
/// * `token` - Optional bearer token
/// * `body` - Optional JSON body
///
/// ### Returns
///
/// The response status and parsed body (Null when the body is empty)
pub async fn send_request(
    app: &mut Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().uri(uri).method(method);

    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.call(request).await.unwrap();
    let status = response.status();

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

/// Sends an unauthenticated JSON request
pub async fn send_json(app: &mut Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    send_request(app, method, uri, None, Some(body)).await
}

/// Sends an admin JSON request carrying the test bearer token
pub async fn send_admin_json(
    app: &mut Router,
    method: &str,
    uri: &str,
    body: Value,
) -> (StatusCode, Value) {
    send_request(app, method, uri, Some(ADMIN_TOKEN), Some(body)).await
}

/// Sends an unauthenticated GET request
pub async fn get_json(app: &mut Router, uri: &str) -> (StatusCode, Value) {
    send_request(app, "GET", uri, None, None).await
}

/// Sends an admin GET request carrying the test bearer token
pub async fn get_admin_json(app: &mut Router, uri: &str) -> (StatusCode, Value) {
    send_request(app, "GET", uri, Some(ADMIN_TOKEN), None).await
}
