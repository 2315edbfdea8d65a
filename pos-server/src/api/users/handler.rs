//! User API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{User, UserCreate, UserUpdate, roles};

use crate::AppError;
use crate::auth::{CurrentUser, password};
use crate::core::ServerState;
use crate::db::repository::user;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN, MIN_PASSWORD_LEN, validate_required_text,
};

/// POST /api/v1/user - register an account
///
/// The very first account becomes an approved super admin (there is nobody
/// else to approve it). Every later registration starts as unapproved
/// staff and is blocked by the guard chain until a super admin approves it.
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<Json<User>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    if !payload.email.contains('@') {
        return Err(AppError::validation("email is not a valid address"));
    }
    if payload.password.len() < MIN_PASSWORD_LEN || payload.password.len() > MAX_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password must be between {MIN_PASSWORD_LEN} and {MAX_PASSWORD_LEN} characters"
        )));
    }

    if user::find_by_email(&state.pool, &payload.email).await?.is_some() {
        return Err(AppError::conflict(format!(
            "An account with email {} already exists",
            payload.email
        )));
    }

    let password_hash = password::hash_password(&payload.password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

    let is_first_account = user::count(&state.pool).await? == 0;
    let (role, approved) = if is_first_account {
        (roles::SUPER_ADMIN, true)
    } else {
        (roles::STAFF, false)
    };

    let account = user::create(
        &state.pool,
        &payload.name,
        &payload.email,
        &password_hash,
        role,
        approved,
    )
    .await?;

    tracing::info!(
        user_id = account.id,
        email = %account.email,
        role = %account.role,
        approved,
        "Account registered"
    );

    Ok(Json(account))
}

/// GET /api/v1/user - list accounts (super admin only)
pub async fn list(
    State(state): State<ServerState>,
    current: CurrentUser,
) -> AppResult<Json<Vec<User>>> {
    require_super_admin(&current)?;
    let accounts = user::find_all(&state.pool).await?;
    Ok(Json(accounts))
}

/// GET /api/v1/user/:id - own account, or any account for super admins
pub async fn get_by_id(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<User>> {
    if current.id != id {
        require_super_admin(&current)?;
    }
    let account = user::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {id}")))?;
    Ok(Json(account))
}

/// PUT /api/v1/user/:id - update role/showroom/approval (super admin only)
pub async fn update(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<UserUpdate>,
) -> AppResult<Json<User>> {
    require_super_admin(&current)?;

    if let Some(role) = &payload.role
        && ![roles::SUPER_ADMIN, roles::MANAGER, roles::STAFF].contains(&role.as_str())
    {
        return Err(AppError::validation(format!("unknown role: {role}")));
    }

    let password_hash = match &payload.password {
        Some(p) => {
            if p.len() < MIN_PASSWORD_LEN || p.len() > MAX_PASSWORD_LEN {
                return Err(AppError::validation(format!(
                    "password must be between {MIN_PASSWORD_LEN} and {MAX_PASSWORD_LEN} characters"
                )));
            }
            Some(
                password::hash_password(p)
                    .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?,
            )
        }
        None => None,
    };

    let account = user::update(&state.pool, id, payload, password_hash).await?;
    Ok(Json(account))
}

/// PUT /api/v1/user/:id/approve - approve a pending registration
pub async fn approve(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<User>> {
    require_super_admin(&current)?;
    let account = user::update(
        &state.pool,
        id,
        UserUpdate {
            name: None,
            email: None,
            password: None,
            role: None,
            showroom_id: None,
            is_approved: Some(true),
            is_active: None,
        },
        None,
    )
    .await?;

    tracing::info!(user_id = id, approved_by = current.id, "Account approved");
    Ok(Json(account))
}

/// DELETE /api/v1/user/:id - deactivate an account (super admin only)
pub async fn delete(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    require_super_admin(&current)?;
    if current.id == id {
        return Err(AppError::business_rule("Cannot deactivate your own account"));
    }
    let result = user::delete(&state.pool, id).await?;
    Ok(Json(result))
}

fn require_super_admin(current: &CurrentUser) -> Result<(), AppError> {
    if !current.is_super_admin() {
        return Err(AppError::forbidden("Super admin privileges required"));
    }
    Ok(())
}
