use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use tracing::{instrument, debug, info, warn};
use validator::Validate;

use crate::AppState;
use crate::dto::{CreateQuoteDto, QuoteListQuery, QuoteSubmissionResponse, UpdateQuoteStatusDto};
use crate::errors::ApiError;
use crate::models::{QuoteRequest, QuoteStatus};
use crate::repo;
use crate::sanitize::{clean_optional, clean_text, MAX_FIELD_LEN, MAX_MESSAGE_LEN};

/// Handler for public quote-request submissions
///
/// This function handles POST requests to `/quotes`. The pipeline is:
/// validate the payload, check the honeypot, apply the per-sender rate
/// limit, sanitize every free-text field, store the lead.
///
/// Honeypot submissions answer the same success shape as real ones but
/// store nothing, so the bot learns nothing from the response.
#[instrument(skip(state, payload), fields(email = %payload.email))]
pub async fn submit_quote_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateQuoteDto>,
) -> Result<Json<QuoteSubmissionResponse>, ApiError> {
    payload.validate().map_err(|e| ApiError::Validation(e.to_string()))?;

    if payload.company.as_deref().is_some_and(|c| !c.trim().is_empty()) {
        debug!("Honeypot field filled, dropping submission");
        return Ok(Json(QuoteSubmissionResponse { received: true }));
    }

    let window = chrono::Duration::from_std(state.config.quote_rate_window())
        .unwrap_or_else(|_| chrono::Duration::minutes(60));
    let since = Utc::now() - window;
    let recent = repo::count_recent_quotes(
        &state.pool,
        payload.email.trim(),
        payload.visitor_id.as_deref(),
        since,
    )
    .map_err(ApiError::Database)?;

    if recent >= state.config.quote_rate_limit {
        warn!("Quote submission rate limit reached");
        return Err(ApiError::RateLimited);
    }

    let quote = repo::create_quote(
        &state.pool,
        clean_text(&payload.name, MAX_FIELD_LEN),
        payload.email.trim().to_string(),
        clean_text(&payload.phone, MAX_FIELD_LEN),
        clean_optional(payload.move_date, MAX_FIELD_LEN),
        clean_text(&payload.origin, MAX_FIELD_LEN),
        clean_text(&payload.destination, MAX_FIELD_LEN),
        clean_optional(payload.home_size, MAX_FIELD_LEN),
        clean_optional(payload.message, MAX_MESSAGE_LEN),
        clean_optional(payload.visitor_id, MAX_FIELD_LEN),
    )
    .map_err(ApiError::Database)?;

    info!("Stored quote request {}", quote.get_id());

    Ok(Json(QuoteSubmissionResponse { received: true }))
}

/// Handler for listing quote requests (admin)
///
/// This function handles GET requests to `/admin/quotes`, optionally
/// filtered by `?status=`.
#[instrument(skip(state))]
pub async fn list_quotes_handler(
    State(state): State<AppState>,
    Query(query): Query<QuoteListQuery>,
) -> Result<Json<Vec<QuoteRequest>>, ApiError> {
    let status = match query.status.as_deref() {
        Some(raw) => Some(
            QuoteStatus::parse(raw)
                .ok_or_else(|| ApiError::Validation(format!("Unknown status: {}", raw)))?,
        ),
        None => None,
    };

    let quotes = repo::list_quotes(&state.pool, status).map_err(ApiError::Database)?;

    info!("Retrieved {} quote requests", quotes.len());

    Ok(Json(quotes))
}

/// Handler for fetching one quote request (admin)
///
/// This function handles GET requests to `/admin/quotes/{id}`.
#[instrument(skip(state), fields(quote_id = %id))]
pub async fn get_quote_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QuoteRequest>, ApiError> {
    let quote = repo::get_quote(&state.pool, &id)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(quote))
}

/// Handler for moving a quote request to a new status (admin)
///
/// This function handles PUT requests to `/admin/quotes/{id}/status`.
#[instrument(skip(state, payload), fields(quote_id = %id, status = %payload.status))]
pub async fn update_quote_status_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateQuoteStatusDto>,
) -> Result<Json<QuoteRequest>, ApiError> {
    let status = QuoteStatus::parse(&payload.status)
        .ok_or_else(|| ApiError::Validation(format!("Unknown status: {}", payload.status)))?;

    match repo::update_quote_status(&state.pool, &id, status) {
        Ok(quote) => {
            info!("Quote request {} moved to {}", id, status);
            Ok(Json(quote))
        }
        Err(e) => {
            if e.to_string().contains("not found") {
                debug!("Quote request not found");
                Err(ApiError::NotFound)
            } else {
                Err(ApiError::Database(e))
            }
        }
    }
}

/// Handler for deleting a quote request (admin)
///
/// This function handles DELETE requests to `/admin/quotes/{id}`.
#[instrument(skip(state), fields(quote_id = %id))]
pub async fn delete_quote_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(), ApiError> {
    match repo::delete_quote(&state.pool, &id) {
        Ok(()) => {
            info!("Deleted quote request {}", id);
            Ok(())
        }
        Err(e) => {
            if e.to_string().contains("not found") {
                debug!("Quote request not found");
                Err(ApiError::NotFound)
            } else {
                Err(ApiError::Database(e))
            }
        }
    }
}
