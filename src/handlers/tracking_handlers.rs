use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use axum_extra::extract::Query;
use chrono::Utc;
use tracing::{instrument, info, warn};

use crate::AppState;
use crate::dto::{PageViewSummaryQuery, PageViewSummaryResponse, TrackPageViewDto};
use crate::errors::ApiError;
use crate::repo;
use crate::sanitize::{clean_optional, clean_text, MAX_FIELD_LEN};

/// Handler for page-view telemetry
///
/// This function handles POST requests to `/page-views` and always answers
/// 204: losing a page view must never surface to the visitor, so storage
/// failures are logged and swallowed.
#[instrument(skip(state, payload), fields(path = %payload.path))]
pub async fn track_page_view_handler(
    State(state): State<AppState>,
    Json(payload): Json<TrackPageViewDto>,
) -> StatusCode {
    let path = clean_text(&payload.path, MAX_FIELD_LEN);
    if path.is_empty() {
        return StatusCode::NO_CONTENT;
    }

    if let Err(e) = repo::record_page_view(
        &state.pool,
        path,
        clean_optional(payload.visitor_id, MAX_FIELD_LEN),
        clean_optional(payload.referrer, MAX_FIELD_LEN),
    ) {
        warn!("Failed to record page view: {}", e);
    }

    StatusCode::NO_CONTENT
}

/// Handler for the page-view summary (admin)
///
/// This function handles GET requests to `/admin/page-views/summary`.
/// `?days=` bounds the trailing window (default 30) and `?path=` may
/// repeat to restrict the summary to specific pages.
#[instrument(skip(state))]
pub async fn page_view_summary_handler(
    State(state): State<AppState>,
    Query(query): Query<PageViewSummaryQuery>,
) -> Result<Json<Vec<PageViewSummaryResponse>>, ApiError> {
    let days = query.days.unwrap_or(30);
    if days <= 0 {
        return Err(ApiError::Validation("days must be positive".to_string()));
    }

    let since = Utc::now() - chrono::Duration::days(days);
    let summary = repo::summarize_page_views(&state.pool, since, &query.path)
        .map_err(ApiError::Database)?;

    info!("Summarized page views across {} paths", summary.len());

    let rows = summary
        .into_iter()
        .map(|(path, views)| PageViewSummaryResponse { path, views })
        .collect();

    Ok(Json(rows))
}
