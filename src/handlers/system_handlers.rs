use axum::Json;

/// Handler for the liveness probe
///
/// This function handles GET requests to `/health`.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
