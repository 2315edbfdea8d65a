//! Employee API Handlers

use axum::{
    Json,
    extract::{Extension, Path, State},
};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};

use crate::AppError;
use crate::auth::ShowroomScope;
use crate::core::ServerState;
use crate::db::repository::employee;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_non_negative, validate_required_text,
};

/// GET /api/v1/employee - 获取员工列表 (按门店范围过滤)
pub async fn list(
    State(state): State<ServerState>,
    Extension(scope): Extension<ShowroomScope>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = employee::find_all(&state.pool, scope.0).await?;
    Ok(Json(employees))
}

/// GET /api/v1/employee/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Employee>> {
    let found = employee::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {id}")))?;
    Ok(Json(found))
}

/// POST /api/v1/employee
pub async fn create(
    State(state): State<ServerState>,
    Extension(scope): Extension<ShowroomScope>,
    Json(mut payload): Json<EmployeeCreate>,
) -> AppResult<Json<Employee>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.designation, "designation", MAX_SHORT_TEXT_LEN)?;
    validate_non_negative(payload.salary, "salary")?;

    if let ShowroomScope(Some(own)) = scope {
        payload.showroom_id = Some(own);
    }

    let created = employee::create(&state.pool, payload).await?;
    Ok(Json(created))
}

/// PUT /api/v1/employee/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    if let Some(salary) = payload.salary {
        validate_non_negative(salary, "salary")?;
    }
    let updated = employee::update(&state.pool, id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/v1/employee/:id (软删除)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let deleted = employee::delete(&state.pool, id).await?;
    Ok(Json(deleted))
}
