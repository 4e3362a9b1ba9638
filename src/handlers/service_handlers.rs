use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{instrument, debug, info};
use validator::Validate;

use crate::AppState;
use crate::dto::{CreateServiceDto, ReorderDto, UpdateServiceDto};
use crate::errors::ApiError;
use crate::models::Service;
use crate::repo;

/// Handler for listing active services
///
/// This function handles GET requests to `/services`.
#[instrument(skip(state))]
pub async fn list_services_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Service>>, ApiError> {
    let services = repo::list_services(&state.pool, false).map_err(ApiError::Database)?;

    debug!("Retrieved {} active services", services.len());

    Ok(Json(services))
}

/// Handler for fetching one service by ID
///
/// This function handles GET requests to `/services/{id}`. Inactive
/// services resolve too, so admin previews keep working.
#[instrument(skip(state), fields(service_id = %id))]
pub async fn get_service_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Service>, ApiError> {
    let service = repo::get_service(&state.pool, &id)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(service))
}

/// Handler for listing all services including hidden ones (admin)
///
/// This function handles GET requests to `/admin/services`.
#[instrument(skip(state))]
pub async fn list_all_services_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Service>>, ApiError> {
    let services = repo::list_services(&state.pool, true).map_err(ApiError::Database)?;

    info!("Retrieved {} services", services.len());

    Ok(Json(services))
}

/// Handler for creating a service (admin)
///
/// This function handles POST requests to `/admin/services`.
#[instrument(skip(state, payload), fields(title = %payload.title))]
pub async fn create_service_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateServiceDto>,
) -> Result<Json<Service>, ApiError> {
    payload.validate().map_err(|e| ApiError::Validation(e.to_string()))?;

    let service = repo::create_service(
        &state.pool,
        payload.title,
        payload.description,
        payload.icon,
        payload.image_url,
    )
    .map_err(ApiError::Database)?;

    info!("Successfully created service {}", service.get_id());

    Ok(Json(service))
}

/// Handler for updating a service (admin)
///
/// This function handles PUT requests to `/admin/services/{id}`.
#[instrument(skip(state, payload), fields(service_id = %id))]
pub async fn update_service_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateServiceDto>,
) -> Result<Json<Service>, ApiError> {
    payload.validate().map_err(|e| ApiError::Validation(e.to_string()))?;

    let mut service = repo::get_service(&state.pool, &id)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound)?;

    if let Some(title) = payload.title {
        service.set_title(title);
    }
    if let Some(description) = payload.description {
        service.set_description(description);
    }
    if let Some(icon) = payload.icon {
        service.set_icon(Some(icon));
    }
    if let Some(image_url) = payload.image_url {
        service.set_image_url(Some(image_url));
    }
    if let Some(is_active) = payload.is_active {
        service.set_is_active(is_active);
    }

    repo::update_service(&state.pool, &service).map_err(ApiError::Database)?;

    info!("Updated service {}", service.get_id());

    Ok(Json(service))
}

/// Handler for deleting a service (admin)
///
/// This function handles DELETE requests to `/admin/services/{id}`.
#[instrument(skip(state), fields(service_id = %id))]
pub async fn delete_service_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(), ApiError> {
    match repo::delete_service(&state.pool, &id) {
        Ok(()) => {
            info!("Deleted service {}", id);
            Ok(())
        }
        Err(e) => {
            if e.to_string().contains("not found") {
                debug!("Service not found");
                Err(ApiError::NotFound)
            } else {
                Err(ApiError::Database(e))
            }
        }
    }
}

/// Handler for reordering the services listing (admin)
///
/// This function handles POST requests to `/admin/services/reorder`.
/// Each service takes the position of its ID in the submitted list.
#[instrument(skip(state, payload), fields(count = payload.ids.len()))]
pub async fn reorder_services_handler(
    State(state): State<AppState>,
    Json(payload): Json<ReorderDto>,
) -> Result<Json<Vec<Service>>, ApiError> {
    payload.validate().map_err(|e| ApiError::Validation(e.to_string()))?;

    match repo::reorder_services(&state.pool, &payload.ids) {
        Ok(()) => {
            info!("Reordered {} services", payload.ids.len());
            let services = repo::list_services(&state.pool, true).map_err(ApiError::Database)?;
            Ok(Json(services))
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
