use axum::{extract::State, Json};
use tracing::{instrument, debug, info};

use crate::AppState;
use crate::dto::{GoogleReviewsDto, ReviewsResponse, SearchPlaceDto};
use crate::errors::ApiError;
use crate::models::JsonValue;
use crate::places::{PlaceReviews, PlaceSummary, PlacesError};
use crate::repo;

/// Maps a Places client failure onto the API error space
fn places_error(e: PlacesError) -> ApiError {
    match e {
        PlacesError::MissingKey => ApiError::MissingConfig("GOOGLE_API_KEY".to_string()),
        PlacesError::Status { status, message } => ApiError::Upstream { status, message },
        PlacesError::Http(e) => ApiError::Upstream { status: 502, message: e.to_string() },
    }
}

/// Handler for the Google-reviews lookup
///
/// This function handles POST requests to `/functions/google-reviews`.
///
/// Read-through cache: a cache row younger than the configured freshness
/// window is returned as-is with `cached: true`; otherwise the Places API
/// is called, the reshaped payload replaces the cache row and the response
/// carries `cached: false`.
#[instrument(skip(state, payload), fields(place_id = %payload.place_id))]
pub async fn google_reviews_handler(
    State(state): State<AppState>,
    Json(payload): Json<GoogleReviewsDto>,
) -> Result<Json<ReviewsResponse>, ApiError> {
    if payload.place_id.trim().is_empty() {
        return Err(ApiError::Validation("placeId is required".to_string()));
    }

    let ttl = state.config.reviews_cache_ttl();

    if let Some(row) = repo::get_cached_reviews(&state.pool, &payload.place_id)
        .map_err(ApiError::Database)?
    {
        if row.is_fresh(ttl) {
            debug!("Serving reviews from cache");
            let place: PlaceReviews = serde_json::from_value(row.get_payload().0)
                .map_err(|e| ApiError::Database(anyhow::anyhow!("Corrupt cache payload: {}", e)))?;

            return Ok(Json(ReviewsResponse {
                place,
                cached: true,
                cached_at: Some(row.get_fetched_at()),
            }));
        }
        debug!("Cache row is stale, refreshing");
    }

    let place = state
        .places
        .place_reviews(&payload.place_id)
        .await
        .map_err(places_error)?;

    let payload_json = serde_json::to_value(&place)
        .map_err(|e| ApiError::Database(anyhow::anyhow!("Failed to encode payload: {}", e)))?;
    repo::upsert_cached_reviews(&state.pool, payload.place_id.clone(), JsonValue(payload_json))
        .map_err(ApiError::Database)?;

    info!("Refreshed reviews cache for place {}", payload.place_id);

    Ok(Json(ReviewsResponse { place, cached: false, cached_at: None }))
}

/// Handler for the place search
///
/// This function handles POST requests to `/functions/search-place`.
#[instrument(skip(state, payload), fields(query = %payload.query))]
pub async fn search_place_handler(
    State(state): State<AppState>,
    Json(payload): Json<SearchPlaceDto>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if payload.query.trim().is_empty() {
        return Err(ApiError::Validation("query is required".to_string()));
    }

    let places: Vec<PlaceSummary> = state
        .places
        .search_text(payload.query.trim())
        .await
        .map_err(places_error)?;

    info!("Place search returned {} results", places.len());

    Ok(Json(serde_json::json!({ "places": places })))
}
