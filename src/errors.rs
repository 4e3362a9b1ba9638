use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
    #[error("Record not found")]
    NotFound,
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Too many requests")]
    RateLimited,
    #[error("Missing configuration: {0}")]
    MissingConfig(String),
    #[error("Upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Database(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Record not found".to_string()),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            ApiError::RateLimited => (StatusCode::TOO_MANY_REQUESTS, "Too many requests".to_string()),
            ApiError::MissingConfig(what) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Missing configuration: {}", what))
            }
            // Third-party failures keep their original status where it is a
            // valid HTTP code, otherwise degrade to 502.
            ApiError::Upstream { status, message } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                message,
            ),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
