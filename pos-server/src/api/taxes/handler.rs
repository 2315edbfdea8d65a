//! Tax API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Tax, TaxCreate, TaxUpdate};

use crate::AppError;
use crate::core::ServerState;
use crate::db::repository::tax;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

fn validate_rate(rate: f64) -> Result<(), AppError> {
    if !(0.0..=100.0).contains(&rate) {
        return Err(AppError::validation("rate must be between 0 and 100 percent"));
    }
    Ok(())
}

/// GET /api/v1/tax
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Tax>>> {
    let taxes = tax::find_all(&state.pool).await?;
    Ok(Json(taxes))
}

/// GET /api/v1/tax/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Tax>> {
    let found = tax::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Tax {id}")))?;
    Ok(Json(found))
}

/// POST /api/v1/tax
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TaxCreate>,
) -> AppResult<Json<Tax>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_rate(payload.rate)?;
    let created = tax::create(&state.pool, payload).await?;
    Ok(Json(created))
}

/// PUT /api/v1/tax/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<TaxUpdate>,
) -> AppResult<Json<Tax>> {
    if let Some(rate) = payload.rate {
        validate_rate(rate)?;
    }
    let updated = tax::update(&state.pool, id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/v1/tax/:id (软删除)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let deleted = tax::delete(&state.pool, id).await?;
    Ok(Json(deleted))
}
