use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{instrument, debug, info};

use crate::AppState;
use crate::dto::UpsertSettingDto;
use crate::errors::ApiError;
use crate::models::SiteSetting;
use crate::repo;

/// Handler for fetching all site settings as one object
///
/// This function handles GET requests to `/settings`. The response is a
/// flat JSON object mapping keys to values, which is what the site's
/// templates consume.
#[instrument(skip(state))]
pub async fn get_settings_handler(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let settings = repo::list_settings(&state.pool).map_err(ApiError::Database)?;

    let mut map = serde_json::Map::new();
    for setting in settings {
        map.insert(setting.get_key(), serde_json::Value::String(setting.get_value()));
    }

    Ok(Json(serde_json::Value::Object(map)))
}

/// Handler for writing a site setting (admin)
///
/// This function handles PUT requests to `/admin/settings/{key}`, creating
/// the key if it does not exist.
#[instrument(skip(state, payload), fields(key = %key))]
pub async fn upsert_setting_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(payload): Json<UpsertSettingDto>,
) -> Result<Json<SiteSetting>, ApiError> {
    if key.trim().is_empty() {
        return Err(ApiError::Validation("setting key must not be empty".to_string()));
    }

    let setting = repo::upsert_setting(&state.pool, key, payload.value)
        .map_err(ApiError::Database)?;

    info!("Wrote setting {}", setting.get_key());

    Ok(Json(setting))
}

/// Handler for deleting a site setting (admin)
///
/// This function handles DELETE requests to `/admin/settings/{key}`.
#[instrument(skip(state), fields(key = %key))]
pub async fn delete_setting_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<(), ApiError> {
    match repo::delete_setting(&state.pool, &key) {
        Ok(()) => {
            info!("Deleted setting {}", key);
            Ok(())
        }
        Err(e) => {
            if e.to_string().contains("not found") {
                debug!("Setting not found");
                Err(ApiError::NotFound)
            } else {
                Err(ApiError::Database(e))
            }
        }
    }
}
