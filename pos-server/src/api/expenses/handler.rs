//! Expense API Handlers

use axum::{
    Json,
    extract::{Extension, Path, Query, State},
};
use serde::Deserialize;
use shared::models::{Expense, ExpenseCreate, ExpenseUpdate};

use crate::AppError;
use crate::auth::{CurrentUser, ShowroomScope};
use crate::core::ServerState;
use crate::db::repository::expense;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_non_negative, validate_optional_text,
    validate_required_text,
};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

/// GET /api/v1/expense - 按门店范围和时间过滤
pub async fn list(
    State(state): State<ServerState>,
    Extension(scope): Extension<ShowroomScope>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Expense>>> {
    let expenses = expense::find_all(&state.pool, scope.0, query.start, query.end).await?;
    Ok(Json(expenses))
}

/// GET /api/v1/expense/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Expense>> {
    let found = expense::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Expense {id}")))?;
    Ok(Json(found))
}

/// POST /api/v1/expense
pub async fn create(
    State(state): State<ServerState>,
    Extension(scope): Extension<ShowroomScope>,
    current: CurrentUser,
    Json(mut payload): Json<ExpenseCreate>,
) -> AppResult<Json<Expense>> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_required_text(&payload.expense_head, "expense_head", MAX_NAME_LEN)?;
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;
    validate_non_negative(payload.amount, "amount")?;

    if let ShowroomScope(Some(own)) = scope {
        payload.showroom_id = Some(own);
    }

    let created = expense::create(&state.pool, current.id, payload).await?;
    Ok(Json(created))
}

/// PUT /api/v1/expense/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ExpenseUpdate>,
) -> AppResult<Json<Expense>> {
    if let Some(amount) = payload.amount {
        validate_non_negative(amount, "amount")?;
    }
    let updated = expense::update(&state.pool, id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/v1/expense/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let deleted = expense::delete(&state.pool, id).await?;
    Ok(Json(deleted))
}
