use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{instrument, debug, info};
use validator::Validate;

use crate::AppState;
use crate::dto::UpsertRoleDto;
use crate::errors::ApiError;
use crate::models::UserRole;
use crate::repo;

/// Handler for listing role grants (admin)
///
/// This function handles GET requests to `/admin/roles`.
#[instrument(skip(state))]
pub async fn list_roles_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserRole>>, ApiError> {
    let roles = repo::list_roles(&state.pool).map_err(ApiError::Database)?;

    info!("Retrieved {} role grants", roles.len());

    Ok(Json(roles))
}

/// Handler for granting a role (admin)
///
/// This function handles PUT requests to `/admin/roles/{user_id}`,
/// replacing any existing grant for the user.
#[instrument(skip(state, payload), fields(user_id = %user_id, role = %payload.role))]
pub async fn upsert_role_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<UpsertRoleDto>,
) -> Result<Json<UserRole>, ApiError> {
    payload.validate().map_err(|e| ApiError::Validation(e.to_string()))?;

    if !UserRole::KNOWN_ROLES.contains(&payload.role.as_str()) {
        return Err(ApiError::Validation(format!("Unknown role: {}", payload.role)));
    }

    let grant = repo::upsert_role(&state.pool, user_id, payload.role)
        .map_err(ApiError::Database)?;

    info!("Granted role {} to {}", grant.get_role(), grant.get_user_id());

    Ok(Json(grant))
}

/// Handler for revoking a role (admin)
///
/// This function handles DELETE requests to `/admin/roles/{user_id}`.
#[instrument(skip(state), fields(user_id = %user_id))]
pub async fn delete_role_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<(), ApiError> {
    match repo::delete_role(&state.pool, &user_id) {
        Ok(()) => {
            info!("Revoked role grant for {}", user_id);
            Ok(())
        }
        Err(e) => {
            if e.to_string().contains("No role grant") {
                debug!("No role grant for user");
                Err(ApiError::NotFound)
            } else {
                Err(ApiError::Database(e))
            }
        }
    }
}
