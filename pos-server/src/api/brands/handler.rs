//! Brand API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Brand, BrandCreate, BrandUpdate};

use crate::AppError;
use crate::core::ServerState;
use crate::db::repository::brand;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

/// GET /api/v1/brands
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Brand>>> {
    let brands = brand::find_all(&state.pool).await?;
    Ok(Json(brands))
}

/// GET /api/v1/brands/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Brand>> {
    let found = brand::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Brand {id}")))?;
    Ok(Json(found))
}

/// POST /api/v1/brands
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BrandCreate>,
) -> AppResult<Json<Brand>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    let created = brand::create(&state.pool, payload).await?;
    Ok(Json(created))
}

/// PUT /api/v1/brands/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<BrandUpdate>,
) -> AppResult<Json<Brand>> {
    let updated = brand::update(&state.pool, id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/v1/brands/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let deleted = brand::delete(&state.pool, id).await?;
    Ok(Json(deleted))
}
