use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::{instrument, debug, info};
use validator::Validate;

use crate::AppState;
use crate::dto::{CreateGalleryImageDto, ReorderDto, UpdateGalleryImageDto};
use crate::errors::ApiError;
use crate::models::GalleryImage;
use crate::repo;

/// Query parameters for the public gallery listing
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct GalleryQuery {
    /// Optional category filter
    pub category: Option<String>,
}

/// Handler for listing active gallery images
///
/// This function handles GET requests to `/gallery`, optionally filtered
/// by `?category=`.
#[instrument(skip(state))]
pub async fn list_gallery_handler(
    State(state): State<AppState>,
    Query(query): Query<GalleryQuery>,
) -> Result<Json<Vec<GalleryImage>>, ApiError> {
    let images = repo::list_gallery_images(&state.pool, query.category.as_deref(), false)
        .map_err(ApiError::Database)?;

    debug!("Retrieved {} gallery images", images.len());

    Ok(Json(images))
}

/// Handler for listing all gallery images including hidden ones (admin)
///
/// This function handles GET requests to `/admin/gallery`.
#[instrument(skip(state))]
pub async fn list_all_gallery_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<GalleryImage>>, ApiError> {
    let images = repo::list_gallery_images(&state.pool, None, true).map_err(ApiError::Database)?;

    info!("Retrieved {} gallery images", images.len());

    Ok(Json(images))
}

/// Handler for adding a gallery image (admin)
///
/// This function handles POST requests to `/admin/gallery`.
#[instrument(skip(state, payload))]
pub async fn create_gallery_image_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateGalleryImageDto>,
) -> Result<Json<GalleryImage>, ApiError> {
    payload.validate().map_err(|e| ApiError::Validation(e.to_string()))?;

    let image = repo::create_gallery_image(&state.pool, payload.title, payload.image_url, payload.category)
        .map_err(ApiError::Database)?;

    info!("Successfully added gallery image {}", image.get_id());

    Ok(Json(image))
}

/// Handler for updating a gallery image (admin)
///
/// This function handles PUT requests to `/admin/gallery/{id}`.
#[instrument(skip(state, payload), fields(image_id = %id))]
pub async fn update_gallery_image_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateGalleryImageDto>,
) -> Result<Json<GalleryImage>, ApiError> {
    payload.validate().map_err(|e| ApiError::Validation(e.to_string()))?;

    let mut image = repo::get_gallery_image(&state.pool, &id)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound)?;

    if let Some(title) = payload.title {
        image.set_title(Some(title));
    }
    if let Some(image_url) = payload.image_url {
        image.set_image_url(image_url);
    }
    if let Some(category) = payload.category {
        image.set_category(Some(category));
    }
    if let Some(is_active) = payload.is_active {
        image.set_is_active(is_active);
    }

    repo::update_gallery_image(&state.pool, &image).map_err(ApiError::Database)?;

    info!("Updated gallery image {}", image.get_id());

    Ok(Json(image))
}

/// Handler for deleting a gallery image (admin)
///
/// This function handles DELETE requests to `/admin/gallery/{id}`.
#[instrument(skip(state), fields(image_id = %id))]
pub async fn delete_gallery_image_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(), ApiError> {
    match repo::delete_gallery_image(&state.pool, &id) {
        Ok(()) => {
            info!("Deleted gallery image {}", id);
            Ok(())
        }
        Err(e) => {
            if e.to_string().contains("not found") {
                debug!("Gallery image not found");
                Err(ApiError::NotFound)
            } else {
                Err(ApiError::Database(e))
            }
        }
    }
}

/// Handler for reordering the gallery (admin)
///
/// This function handles POST requests to `/admin/gallery/reorder`.
#[instrument(skip(state, payload), fields(count = payload.ids.len()))]
pub async fn reorder_gallery_handler(
    State(state): State<AppState>,
    Json(payload): Json<ReorderDto>,
) -> Result<Json<Vec<GalleryImage>>, ApiError> {
    payload.validate().map_err(|e| ApiError::Validation(e.to_string()))?;

    match repo::reorder_gallery_images(&state.pool, &payload.ids) {
        Ok(()) => {
            info!("Reordered {} gallery images", payload.ids.len());
            let images = repo::list_gallery_images(&state.pool, None, true).map_err(ApiError::Database)?;
            Ok(Json(images))
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
