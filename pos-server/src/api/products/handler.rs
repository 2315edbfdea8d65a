//! Product API Handlers

use axum::{
    Json,
    extract::{Extension, Path, Query, State},
};
use shared::models::{ProductCreate, ProductTransfer, ProductUpdate, ProductWithRefs};

use crate::AppError;
use crate::auth::ShowroomScope;
use crate::core::ServerState;
use crate::db::repository::product;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_non_negative, validate_optional_text,
    validate_required_text,
};

#[derive(serde::Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

/// GET /api/v1/product - 获取商品列表 (按门店范围过滤)
pub async fn list(
    State(state): State<ServerState>,
    Extension(scope): Extension<ShowroomScope>,
) -> AppResult<Json<Vec<ProductWithRefs>>> {
    let products = product::find_all(&state.pool, scope.0).await?;
    Ok(Json(products))
}

/// GET /api/v1/product/search?q=xxx - 按名称/货号/条码搜索
pub async fn search(
    State(state): State<ServerState>,
    Extension(scope): Extension<ShowroomScope>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<ProductWithRefs>>> {
    let products = product::search(&state.pool, &query.q, scope.0).await?;
    Ok(Json(products))
}

/// GET /api/v1/product/:id - 获取单个商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Extension(scope): Extension<ShowroomScope>,
    Path(id): Path<i64>,
) -> AppResult<Json<ProductWithRefs>> {
    let found = product::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {id}")))?;
    ensure_in_scope(&found, scope)?;
    Ok(Json(found))
}

/// POST /api/v1/product - 创建商品
pub async fn create(
    State(state): State<ServerState>,
    Extension(scope): Extension<ShowroomScope>,
    Json(mut payload): Json<ProductCreate>,
) -> AppResult<Json<ProductWithRefs>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.item_code, "item_code", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_non_negative(payload.cost_price, "cost_price")?;
    validate_non_negative(payload.selling_price, "selling_price")?;
    if payload.quantity < 0 {
        return Err(AppError::validation("quantity must not be negative"));
    }

    // Non-super-admin callers can only stock their own showroom
    if let ShowroomScope(Some(own)) = scope {
        payload.showroom_id = Some(own);
    }

    let created = product::create(&state.pool, payload).await?;
    Ok(Json(created))
}

/// PUT /api/v1/product/:id - 更新商品
pub async fn update(
    State(state): State<ServerState>,
    Extension(scope): Extension<ShowroomScope>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<ProductWithRefs>> {
    if let Some(cost) = payload.cost_price {
        validate_non_negative(cost, "cost_price")?;
    }
    if let Some(sell) = payload.selling_price {
        validate_non_negative(sell, "selling_price")?;
    }
    if let Some(q) = payload.quantity
        && q < 0
    {
        return Err(AppError::validation("quantity must not be negative"));
    }

    let existing = product::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {id}")))?;
    ensure_in_scope(&existing, scope)?;

    let updated = product::update(&state.pool, id, payload).await?;
    Ok(Json(updated))
}

/// PUT /api/v1/product/:id/transfer - 在门店/仓库间调拨
///
/// Transfers are a super-admin operation: scoped users would otherwise
/// move stock out of their own visibility.
pub async fn transfer(
    State(state): State<ServerState>,
    Extension(scope): Extension<ShowroomScope>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductTransfer>,
) -> AppResult<Json<ProductWithRefs>> {
    if scope.0.is_some() {
        return Err(AppError::forbidden("Stock transfer requires super admin"));
    }
    if payload.showroom_id.is_none() && payload.warehouse_id.is_none() {
        return Err(AppError::validation(
            "transfer requires a target showroom or warehouse",
        ));
    }
    let moved = product::transfer(&state.pool, id, payload).await?;
    Ok(Json(moved))
}

/// DELETE /api/v1/product/:id - 下架商品 (软删除)
pub async fn delete(
    State(state): State<ServerState>,
    Extension(scope): Extension<ShowroomScope>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let existing = product::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {id}")))?;
    ensure_in_scope(&existing, scope)?;

    let deleted = product::delete(&state.pool, id).await?;
    Ok(Json(deleted))
}

/// Scoped callers may only touch products homed in their showroom.
fn ensure_in_scope(found: &ProductWithRefs, scope: ShowroomScope) -> Result<(), AppError> {
    if let ShowroomScope(Some(own)) = scope
        && found.showroom_id != Some(own)
    {
        return Err(AppError::forbidden("Product belongs to another showroom"));
    }
    Ok(())
}
