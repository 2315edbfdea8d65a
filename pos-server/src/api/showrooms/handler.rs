//! Showroom API Handlers
//!
//! Creating or removing showrooms changes what every scoped account can
//! see, so mutations require super admin even though the mount itself is
//! showroom-guarded.

use axum::{
    Json,
    extract::{Extension, Path, State},
};
use shared::models::{Showroom, ShowroomCreate, ShowroomUpdate};

use crate::AppError;
use crate::auth::ShowroomScope;
use crate::core::ServerState;
use crate::db::repository::showroom;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text};

/// GET /api/v1/showroom - scoped users see only their own showroom
pub async fn list(
    State(state): State<ServerState>,
    Extension(scope): Extension<ShowroomScope>,
) -> AppResult<Json<Vec<Showroom>>> {
    let showrooms = showroom::find_all(&state.pool).await?;
    let showrooms = match scope.0 {
        Some(own) => showrooms.into_iter().filter(|s| s.id == own).collect(),
        None => showrooms,
    };
    Ok(Json(showrooms))
}

/// GET /api/v1/showroom/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Extension(scope): Extension<ShowroomScope>,
    Path(id): Path<i64>,
) -> AppResult<Json<Showroom>> {
    if let Some(own) = scope.0
        && own != id
    {
        return Err(AppError::forbidden("Showroom outside your scope"));
    }
    let found = showroom::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Showroom {id}")))?;
    Ok(Json(found))
}

/// POST /api/v1/showroom (super admin)
pub async fn create(
    State(state): State<ServerState>,
    Extension(scope): Extension<ShowroomScope>,
    Json(payload): Json<ShowroomCreate>,
) -> AppResult<Json<Showroom>> {
    require_unscoped(scope)?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.code, "code", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.invoice_prefix, "invoice_prefix", MAX_SHORT_TEXT_LEN)?;

    let created = showroom::create(&state.pool, payload).await?;
    Ok(Json(created))
}

/// PUT /api/v1/showroom/:id (super admin)
pub async fn update(
    State(state): State<ServerState>,
    Extension(scope): Extension<ShowroomScope>,
    Path(id): Path<i64>,
    Json(payload): Json<ShowroomUpdate>,
) -> AppResult<Json<Showroom>> {
    require_unscoped(scope)?;
    let updated = showroom::update(&state.pool, id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/v1/showroom/:id (super admin, 软删除)
pub async fn delete(
    State(state): State<ServerState>,
    Extension(scope): Extension<ShowroomScope>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    require_unscoped(scope)?;
    let deleted = showroom::delete(&state.pool, id).await?;
    Ok(Json(deleted))
}

fn require_unscoped(scope: ShowroomScope) -> Result<(), AppError> {
    if scope.0.is_some() {
        return Err(AppError::forbidden("Showroom management requires super admin"));
    }
    Ok(())
}
