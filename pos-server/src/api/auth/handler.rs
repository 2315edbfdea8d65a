//! Authentication Handlers
//!
//! Handles login, logout and current-user lookup.

use std::time::Duration;

use axum::Json;
use axum::extract::State;
use axum::response::{AppendHeaders, IntoResponse};
use serde::{Deserialize, Serialize};
use shared::models::User;

use crate::AppError;
use crate::auth::{AUTH_COOKIE, CurrentUser, password};
use crate::core::ServerState;
use crate::db::repository::user;

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// POST /api/v1/auth/login
///
/// Verifies credentials, issues a JWT and sets it as an HttpOnly cookie
/// (the token is also returned in the body for header-based clients).
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let account = user::find_by_email(&state.pool, &req.email).await?;

    // Fixed delay before inspecting the result, so lookup hits and misses
    // are indistinguishable on the wire
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let account = match account {
        Some(a) => {
            if !a.is_active {
                return Err(AppError::forbidden("Account has been disabled"));
            }

            let password_valid = password::verify_password(&req.password, &a.password_hash)
                .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;

            if !password_valid {
                tracing::warn!(email = %req.email, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }

            a
        }
        None => {
            tracing::warn!(email = %req.email, "Login failed - account not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let jwt_service = state.get_jwt_service();
    let token = jwt_service
        .generate_token(&account)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(
        user_id = account.id,
        email = %account.email,
        role = %account.role,
        "User logged in successfully"
    );

    let max_age = jwt_service.config.expiration_minutes * 60;
    let cookie =
        format!("{AUTH_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}");

    Ok((
        AppendHeaders([(http::header::SET_COOKIE, cookie)]),
        Json(LoginResponse {
            token,
            user: account,
        }),
    ))
}

/// GET /api/v1/auth/me - fresh account row for the current token
pub async fn me(
    State(state): State<ServerState>,
    current: CurrentUser,
) -> Result<Json<User>, AppError> {
    let account = user::find_by_id(&state.pool, current.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {}", current.id)))?;
    Ok(Json(account))
}

/// POST /api/v1/auth/logout - clears the auth cookie
pub async fn logout(current: CurrentUser) -> impl IntoResponse {
    tracing::info!(user_id = current.id, name = %current.name, "User logged out");

    let cookie = format!("{AUTH_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    (AppendHeaders([(http::header::SET_COOKIE, cookie)]), Json(()))
}
