//! Warehouse API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Warehouse, WarehouseCreate, WarehouseUpdate};

use crate::AppError;
use crate::core::ServerState;
use crate::db::repository::warehouse;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text};

/// GET /api/v1/warehouse
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Warehouse>>> {
    let warehouses = warehouse::find_all(&state.pool).await?;
    Ok(Json(warehouses))
}

/// GET /api/v1/warehouse/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Warehouse>> {
    let found = warehouse::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Warehouse {id}")))?;
    Ok(Json(found))
}

/// POST /api/v1/warehouse
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<WarehouseCreate>,
) -> AppResult<Json<Warehouse>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.code, "code", MAX_SHORT_TEXT_LEN)?;

    let created = warehouse::create(&state.pool, payload).await?;
    Ok(Json(created))
}

/// PUT /api/v1/warehouse/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<WarehouseUpdate>,
) -> AppResult<Json<Warehouse>> {
    let updated = warehouse::update(&state.pool, id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/v1/warehouse/:id (软删除)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let deleted = warehouse::delete(&state.pool, id).await?;
    Ok(Json(deleted))
}
