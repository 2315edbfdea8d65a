//! Business Settings API Handlers

use axum::{Json, extract::State};
use shared::models::{Business, BusinessUpdate};

use crate::AppError;
use crate::core::ServerState;
use crate::db::repository::{business, tax};
use crate::utils::AppResult;

/// GET /api/v1/business - the singleton settings row
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<Business>> {
    let settings = business::get(&state.pool)
        .await?
        .ok_or_else(|| AppError::not_found("Business settings not initialized (run /api/v1/db/seed)"))?;
    Ok(Json(settings))
}

/// PUT /api/v1/business
pub async fn update(
    State(state): State<ServerState>,
    Json(payload): Json<BusinessUpdate>,
) -> AppResult<Json<Business>> {
    if let Some(tax_id) = payload.default_tax_id
        && tax::find_by_id(&state.pool, tax_id).await?.is_none()
    {
        return Err(AppError::validation(format!("default_tax_id {tax_id} does not exist")));
    }
    let settings = business::update(&state.pool, payload).await?;
    Ok(Json(settings))
}
