//! Customer API Handlers

use axum::{
    Json,
    extract::{Extension, Path, Query, State},
};
use shared::models::{Customer, CustomerCreate, CustomerUpdate};

use crate::AppError;
use crate::auth::ShowroomScope;
use crate::core::ServerState;
use crate::db::repository::customer;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};

#[derive(serde::Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

/// GET /api/v1/customer - 获取顾客列表 (按门店范围过滤)
pub async fn list(
    State(state): State<ServerState>,
    Extension(scope): Extension<ShowroomScope>,
) -> AppResult<Json<Vec<Customer>>> {
    let customers = customer::find_all(&state.pool, scope.0).await?;
    Ok(Json(customers))
}

/// GET /api/v1/customer/search?q=xxx - 按姓名/电话/邮箱搜索
pub async fn search(
    State(state): State<ServerState>,
    Extension(scope): Extension<ShowroomScope>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Customer>>> {
    let customers = customer::search(&state.pool, &query.q, scope.0).await?;
    Ok(Json(customers))
}

/// GET /api/v1/customer/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Customer>> {
    let found = customer::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Customer {id}")))?;
    Ok(Json(found))
}

/// POST /api/v1/customer
pub async fn create(
    State(state): State<ServerState>,
    Extension(scope): Extension<ShowroomScope>,
    Json(mut payload): Json<CustomerCreate>,
) -> AppResult<Json<Customer>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.address, "address", MAX_ADDRESS_LEN)?;

    // Walk-in customers register at the caller's showroom
    if let ShowroomScope(Some(own)) = scope {
        payload.showroom_id = Some(own);
    }

    let created = customer::create(&state.pool, payload).await?;
    Ok(Json(created))
}

/// PUT /api/v1/customer/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<CustomerUpdate>,
) -> AppResult<Json<Customer>> {
    let updated = customer::update(&state.pool, id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/v1/customer/:id (软删除)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let deleted = customer::delete(&state.pool, id).await?;
    Ok(Json(deleted))
}
