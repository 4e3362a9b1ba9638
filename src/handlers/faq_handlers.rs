use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{instrument, debug, info};
use validator::Validate;

use crate::AppState;
use crate::dto::{CreateFaqDto, ReorderDto, UpdateFaqDto};
use crate::errors::ApiError;
use crate::models::Faq;
use crate::repo;

/// Handler for listing active FAQ entries
///
/// This function handles GET requests to `/faqs`.
#[instrument(skip(state))]
pub async fn list_faqs_handler(State(state): State<AppState>) -> Result<Json<Vec<Faq>>, ApiError> {
    let faqs = repo::list_faqs(&state.pool, false).map_err(ApiError::Database)?;

    debug!("Retrieved {} active FAQ entries", faqs.len());

    Ok(Json(faqs))
}

/// Handler for listing all FAQ entries including hidden ones (admin)
///
/// This function handles GET requests to `/admin/faqs`.
#[instrument(skip(state))]
pub async fn list_all_faqs_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Faq>>, ApiError> {
    let faqs = repo::list_faqs(&state.pool, true).map_err(ApiError::Database)?;

    info!("Retrieved {} FAQ entries", faqs.len());

    Ok(Json(faqs))
}

/// Handler for creating a FAQ entry (admin)
///
/// This function handles POST requests to `/admin/faqs`.
#[instrument(skip(state, payload))]
pub async fn create_faq_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateFaqDto>,
) -> Result<Json<Faq>, ApiError> {
    payload.validate().map_err(|e| ApiError::Validation(e.to_string()))?;

    let faq = repo::create_faq(&state.pool, payload.question, payload.answer)
        .map_err(ApiError::Database)?;

    info!("Successfully created FAQ entry {}", faq.get_id());

    Ok(Json(faq))
}

/// Handler for updating a FAQ entry (admin)
///
/// This function handles PUT requests to `/admin/faqs/{id}`.
#[instrument(skip(state, payload), fields(faq_id = %id))]
pub async fn update_faq_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateFaqDto>,
) -> Result<Json<Faq>, ApiError> {
    let mut faq = repo::get_faq(&state.pool, &id)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound)?;

    if let Some(question) = payload.question {
        faq.set_question(question);
    }
    if let Some(answer) = payload.answer {
        faq.set_answer(answer);
    }
    if let Some(is_active) = payload.is_active {
        faq.set_is_active(is_active);
    }

    repo::update_faq(&state.pool, &faq).map_err(ApiError::Database)?;

    info!("Updated FAQ entry {}", faq.get_id());

    Ok(Json(faq))
}

/// Handler for deleting a FAQ entry (admin)
///
/// This function handles DELETE requests to `/admin/faqs/{id}`.
#[instrument(skip(state), fields(faq_id = %id))]
pub async fn delete_faq_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(), ApiError> {
    match repo::delete_faq(&state.pool, &id) {
        Ok(()) => {
            info!("Deleted FAQ entry {}", id);
            Ok(())
        }
        Err(e) => {
            if e.to_string().contains("not found") {
                debug!("FAQ entry not found");
                Err(ApiError::NotFound)
            } else {
                Err(ApiError::Database(e))
            }
        }
    }
}

/// Handler for reordering FAQ entries (admin)
///
/// This function handles POST requests to `/admin/faqs/reorder`.
#[instrument(skip(state, payload), fields(count = payload.ids.len()))]
pub async fn reorder_faqs_handler(
    State(state): State<AppState>,
    Json(payload): Json<ReorderDto>,
) -> Result<Json<Vec<Faq>>, ApiError> {
    payload.validate().map_err(|e| ApiError::Validation(e.to_string()))?;

    match repo::reorder_faqs(&state.pool, &payload.ids) {
        Ok(()) => {
            info!("Reordered {} FAQ entries", payload.ids.len());
            let faqs = repo::list_faqs(&state.pool, true).map_err(ApiError::Database)?;
            Ok(Json(faqs))
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
