//! Supplier API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::models::{Supplier, SupplierCreate, SupplierUpdate};

use crate::AppError;
use crate::core::ServerState;
use crate::db::repository::supplier;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};

#[derive(serde::Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

/// GET /api/v1/supplier - 获取所有供应商
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Supplier>>> {
    let suppliers = supplier::find_all(&state.pool).await?;
    Ok(Json(suppliers))
}

/// GET /api/v1/supplier/search?q=xxx
pub async fn search(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Supplier>>> {
    let suppliers = supplier::search(&state.pool, &query.q).await?;
    Ok(Json(suppliers))
}

/// GET /api/v1/supplier/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Supplier>> {
    let found = supplier::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Supplier {id}")))?;
    Ok(Json(found))
}

/// POST /api/v1/supplier
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SupplierCreate>,
) -> AppResult<Json<Supplier>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.address, "address", MAX_ADDRESS_LEN)?;

    let created = supplier::create(&state.pool, payload).await?;
    Ok(Json(created))
}

/// PUT /api/v1/supplier/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<SupplierUpdate>,
) -> AppResult<Json<Supplier>> {
    let updated = supplier::update(&state.pool, id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/v1/supplier/:id (软删除)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let deleted = supplier::delete(&state.pool, id).await?;
    Ok(Json(deleted))
}
