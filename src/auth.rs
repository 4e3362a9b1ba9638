/// Admin route guard
///
/// The `/admin` subtree requires `Authorization: Bearer <token>` matching
/// the configured `admin_token`. With no token configured the guard fails
/// closed with a configuration error rather than letting requests through.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::AppState;
use crate::errors::ApiError;

/// Extracts the token from a `Bearer` authorization header value
fn bearer_token(header: Option<&str>) -> Option<&str> {
    header?.strip_prefix("Bearer ")
}

/// Middleware enforcing the admin bearer token
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let expected = state
        .config
        .admin_token
        .as_deref()
        .ok_or_else(|| ApiError::MissingConfig("ADMIN_TOKEN".to_string()))?;

    let presented = bearer_token(
        request
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok()),
    );

    match presented {
        Some(token) if token == expected => Ok(next.run(request).await),
        _ => Err(ApiError::Unauthorized),
    }
}
