use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{instrument, debug, info};
use validator::Validate;

use crate::AppState;
use crate::dto::{CreateTestimonialDto, ReorderDto, UpdateTestimonialDto};
use crate::errors::ApiError;
use crate::models::Testimonial;
use crate::repo;

/// Handler for listing active testimonials
///
/// This function handles GET requests to `/testimonials`.
#[instrument(skip(state))]
pub async fn list_testimonials_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Testimonial>>, ApiError> {
    let testimonials = repo::list_testimonials(&state.pool, false).map_err(ApiError::Database)?;

    debug!("Retrieved {} active testimonials", testimonials.len());

    Ok(Json(testimonials))
}

/// Handler for listing all testimonials including hidden ones (admin)
///
/// This function handles GET requests to `/admin/testimonials`.
#[instrument(skip(state))]
pub async fn list_all_testimonials_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Testimonial>>, ApiError> {
    let testimonials = repo::list_testimonials(&state.pool, true).map_err(ApiError::Database)?;

    info!("Retrieved {} testimonials", testimonials.len());

    Ok(Json(testimonials))
}

/// Handler for creating a testimonial (admin)
///
/// This function handles POST requests to `/admin/testimonials`.
#[instrument(skip(state, payload), fields(author = %payload.author))]
pub async fn create_testimonial_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateTestimonialDto>,
) -> Result<Json<Testimonial>, ApiError> {
    payload.validate().map_err(|e| ApiError::Validation(e.to_string()))?;

    let testimonial = repo::create_testimonial(
        &state.pool,
        payload.author,
        payload.location,
        payload.quote,
        payload.rating,
    )
    .map_err(ApiError::Database)?;

    info!("Successfully created testimonial {}", testimonial.get_id());

    Ok(Json(testimonial))
}

/// Handler for updating a testimonial (admin)
///
/// This function handles PUT requests to `/admin/testimonials/{id}`.
#[instrument(skip(state, payload), fields(testimonial_id = %id))]
pub async fn update_testimonial_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTestimonialDto>,
) -> Result<Json<Testimonial>, ApiError> {
    payload.validate().map_err(|e| ApiError::Validation(e.to_string()))?;

    let mut testimonial = repo::get_testimonial(&state.pool, &id)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound)?;

    if let Some(author) = payload.author {
        testimonial.set_author(author);
    }
    if let Some(quote) = payload.quote {
        testimonial.set_quote(quote);
    }
    if let Some(rating) = payload.rating {
        testimonial.set_rating(rating);
    }
    if let Some(is_active) = payload.is_active {
        testimonial.set_is_active(is_active);
    }

    repo::update_testimonial(&state.pool, &testimonial).map_err(ApiError::Database)?;

    info!("Updated testimonial {}", testimonial.get_id());

    Ok(Json(testimonial))
}

/// Handler for deleting a testimonial (admin)
///
/// This function handles DELETE requests to `/admin/testimonials/{id}`.
#[instrument(skip(state), fields(testimonial_id = %id))]
pub async fn delete_testimonial_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(), ApiError> {
    match repo::delete_testimonial(&state.pool, &id) {
        Ok(()) => {
            info!("Deleted testimonial {}", id);
            Ok(())
        }
        Err(e) => {
            if e.to_string().contains("not found") {
                debug!("Testimonial not found");
                Err(ApiError::NotFound)
            } else {
                Err(ApiError::Database(e))
            }
        }
    }
}

/// Handler for reordering testimonials (admin)
///
/// This function handles POST requests to `/admin/testimonials/reorder`.
#[instrument(skip(state, payload), fields(count = payload.ids.len()))]
pub async fn reorder_testimonials_handler(
    State(state): State<AppState>,
    Json(payload): Json<ReorderDto>,
) -> Result<Json<Vec<Testimonial>>, ApiError> {
    payload.validate().map_err(|e| ApiError::Validation(e.to_string()))?;

    match repo::reorder_testimonials(&state.pool, &payload.ids) {
        Ok(()) => {
            info!("Reordered {} testimonials", payload.ids.len());
            let testimonials = repo::list_testimonials(&state.pool, true).map_err(ApiError::Database)?;
            Ok(Json(testimonials))
        }
        Err(e) => {
            if e.to_string().contains("not found") {
                Err(ApiError::Validation(e.to_string()))
            } else {
                Err(ApiError::Database(e))
            }
        }
    }
}
