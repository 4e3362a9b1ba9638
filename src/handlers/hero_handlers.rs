use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{instrument, debug, info};
use validator::Validate;

use crate::AppState;
use crate::dto::{CreateHeroDto, UpdateHeroDto};
use crate::errors::ApiError;
use crate::models::{HeroContent, JsonValue};
use crate::repo;

/// Handler for fetching the active hero banner
///
/// This function handles GET requests to `/content/hero`.
///
/// ### Returns
///
/// The active hero revision as JSON, or 404 when none is active
#[instrument(skip(state))]
pub async fn get_active_hero_handler(
    State(state): State<AppState>,
) -> Result<Json<HeroContent>, ApiError> {
    debug!("Fetching active hero banner");

    let hero = repo::get_active_hero(&state.pool)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(hero))
}

/// Handler for listing all hero revisions (admin)
///
/// This function handles GET requests to `/admin/hero`.
#[instrument(skip(state))]
pub async fn list_heroes_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<HeroContent>>, ApiError> {
    let heroes = repo::list_heroes(&state.pool).map_err(ApiError::Database)?;

    info!("Retrieved {} hero revisions", heroes.len());

    Ok(Json(heroes))
}

/// Handler for creating a hero revision (admin)
///
/// This function handles POST requests to `/admin/hero`. The new revision
/// starts inactive; activate it separately once its content is ready.
#[instrument(skip(state, payload), fields(title = %payload.title))]
pub async fn create_hero_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateHeroDto>,
) -> Result<Json<HeroContent>, ApiError> {
    payload.validate().map_err(|e| ApiError::Validation(e.to_string()))?;

    info!("Creating hero revision");

    let hero = repo::create_hero(
        &state.pool,
        payload.title,
        payload.subtitle,
        JsonValue(payload.background_images.unwrap_or_else(|| serde_json::json!([]))),
        JsonValue(payload.stats.unwrap_or_else(|| serde_json::json!([]))),
        payload.cta_label,
        payload.cta_link,
    )
    .map_err(ApiError::Database)?;

    info!("Successfully created hero revision {}", hero.get_id());

    Ok(Json(hero))
}

/// Handler for updating a hero revision (admin)
///
/// This function handles PUT requests to `/admin/hero/{id}`. Absent fields
/// are left unchanged.
#[instrument(skip(state, payload), fields(hero_id = %id))]
pub async fn update_hero_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateHeroDto>,
) -> Result<Json<HeroContent>, ApiError> {
    payload.validate().map_err(|e| ApiError::Validation(e.to_string()))?;

    let mut hero = repo::get_hero(&state.pool, &id)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound)?;

    if let Some(title) = payload.title {
        hero.set_title(title);
    }
    if let Some(subtitle) = payload.subtitle {
        hero.set_subtitle(Some(subtitle));
    }
    if let Some(background_images) = payload.background_images {
        hero.set_background_images(JsonValue(background_images));
    }
    if let Some(stats) = payload.stats {
        hero.set_stats(JsonValue(stats));
    }
    if let Some(cta_label) = payload.cta_label {
        hero.set_cta_label(Some(cta_label));
    }
    if let Some(cta_link) = payload.cta_link {
        hero.set_cta_link(Some(cta_link));
    }

    repo::update_hero(&state.pool, &hero).map_err(ApiError::Database)?;

    info!("Updated hero revision {}", hero.get_id());

    Ok(Json(hero))
}

/// Handler for activating a hero revision (admin)
///
/// This function handles POST requests to `/admin/hero/{id}/activate`.
/// Every other revision is deactivated in the same transaction.
#[instrument(skip(state), fields(hero_id = %id))]
pub async fn activate_hero_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HeroContent>, ApiError> {
    match repo::activate_hero(&state.pool, &id) {
        Ok(hero) => {
            info!("Activated hero revision {}", id);
            Ok(Json(hero))
        }
        Err(e) => {
            if e.to_string().contains("not found") {
                debug!("Hero revision not found");
                Err(ApiError::NotFound)
            } else {
                Err(ApiError::Database(e))
            }
        }
    }
}

/// Handler for deleting a hero revision (admin)
///
/// This function handles DELETE requests to `/admin/hero/{id}`.
#[instrument(skip(state), fields(hero_id = %id))]
pub async fn delete_hero_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(), ApiError> {
    match repo::delete_hero(&state.pool, &id) {
        Ok(()) => {
            info!("Deleted hero revision {}", id);
            Ok(())
        }
        Err(e) => {
            if e.to_string().contains("not found") {
                debug!("Hero revision not found");
                Err(ApiError::NotFound)
            } else {
                Err(ApiError::Database(e))
            }
        }
    }
}
