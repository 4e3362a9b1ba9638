use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{instrument, debug, info};
use validator::Validate;

use crate::AppState;
use crate::dto::{CreateAboutDto, UpdateAboutDto};
use crate::errors::ApiError;
use crate::models::AboutContent;
use crate::repo;

/// Handler for fetching the active about section
///
/// This function handles GET requests to `/content/about`.
///
/// ### Returns
///
/// The active about revision as JSON, or 404 when none is active
#[instrument(skip(state))]
pub async fn get_active_about_handler(
    State(state): State<AppState>,
) -> Result<Json<AboutContent>, ApiError> {
    debug!("Fetching active about section");

    let about = repo::get_active_about(&state.pool)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(about))
}

/// Handler for listing all about revisions (admin)
///
/// This function handles GET requests to `/admin/about`.
#[instrument(skip(state))]
pub async fn list_about_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<AboutContent>>, ApiError> {
    let revisions = repo::list_about(&state.pool).map_err(ApiError::Database)?;

    info!("Retrieved {} about revisions", revisions.len());

    Ok(Json(revisions))
}

/// Handler for creating an about revision (admin)
///
/// This function handles POST requests to `/admin/about`.
#[instrument(skip(state, payload), fields(heading = %payload.heading))]
pub async fn create_about_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateAboutDto>,
) -> Result<Json<AboutContent>, ApiError> {
    payload.validate().map_err(|e| ApiError::Validation(e.to_string()))?;

    let about = repo::create_about(
        &state.pool,
        payload.heading,
        payload.body,
        payload.image_url,
        payload.years_experience.unwrap_or(0),
        payload.customers_served.unwrap_or(0),
    )
    .map_err(ApiError::Database)?;

    info!("Successfully created about revision {}", about.get_id());

    Ok(Json(about))
}

/// Handler for updating an about revision (admin)
///
/// This function handles PUT requests to `/admin/about/{id}`. Absent fields
/// are left unchanged.
#[instrument(skip(state, payload), fields(about_id = %id))]
pub async fn update_about_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateAboutDto>,
) -> Result<Json<AboutContent>, ApiError> {
    payload.validate().map_err(|e| ApiError::Validation(e.to_string()))?;

    let mut about = repo::get_about(&state.pool, &id)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound)?;

    if let Some(heading) = payload.heading {
        about.set_heading(heading);
    }
    if let Some(body) = payload.body {
        about.set_body(body);
    }
    if let Some(image_url) = payload.image_url {
        about.set_image_url(Some(image_url));
    }
    if let Some(years_experience) = payload.years_experience {
        about.set_years_experience(years_experience);
    }
    if let Some(customers_served) = payload.customers_served {
        about.set_customers_served(customers_served);
    }

    repo::update_about(&state.pool, &about).map_err(ApiError::Database)?;

    info!("Updated about revision {}", about.get_id());

    Ok(Json(about))
}

/// Handler for activating an about revision (admin)
///
/// This function handles POST requests to `/admin/about/{id}/activate`.
#[instrument(skip(state), fields(about_id = %id))]
pub async fn activate_about_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AboutContent>, ApiError> {
    match repo::activate_about(&state.pool, &id) {
        Ok(about) => {
            info!("Activated about revision {}", id);
            Ok(Json(about))
        }
        Err(e) => {
            if e.to_string().contains("not found") {
                debug!("About revision not found");
                Err(ApiError::NotFound)
            } else {
                Err(ApiError::Database(e))
            }
        }
    }
}
