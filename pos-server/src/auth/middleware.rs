//! 认证中间件
//!
//! The guard chain applied in front of domain routers, in fixed order:
//! [`require_auth`], then [`common_auth`], then [`showroom_access`] (or
//! [`require_super_admin`] for tax/business). Each guard either forwards
//! the request or short-circuits with an [`AppError`].

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::AppError;
use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;
use crate::db::repository::user;
use crate::security_log;

/// Showroom scope resolved by [`showroom_access`].
///
/// `None` means unrestricted (super admin); `Some(id)` restricts scoped
/// listings to one showroom.
#[derive(Debug, Clone, Copy)]
pub struct ShowroomScope(pub Option<i64>);

/// 认证中间件 - 要求用户登录
///
/// Accepts the token from `Authorization: Bearer <token>` or from the
/// `sparkx_token` cookie. On success a [`CurrentUser`] is injected into
/// the request extensions.
///
/// # 错误处理
///
/// | 错误 | HTTP 状态码 |
/// |------|------------|
/// | 缺少令牌 | 401 Unauthorized |
/// | 令牌过期 | 401 TokenExpired |
/// | 无效令牌 | 401 InvalidToken |
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // 允许 CORS 预检的 OPTIONS 请求 (跳过认证)
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let bearer = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(JwtService::extract_from_header);

    let cookie = req
        .headers()
        .get(http::header::COOKIE)
        .and_then(|h| h.to_str().ok())
        .and_then(JwtService::extract_from_cookie);

    let Some(token) = bearer.or(cookie) else {
        security_log!("WARN", "auth_missing", uri = format!("{:?}", req.uri()));
        return Err(AppError::unauthorized());
    };

    let jwt_service = state.get_jwt_service();
    match jwt_service.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::try_from(claims)
                .map_err(|e| AppError::invalid_token(format!("Malformed JWT claims: {e}")))?;
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = format!("{}", e),
                uri = format!("{:?}", req.uri())
            );

            match e {
                crate::auth::JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Invalid token")),
            }
        }
    }
}

/// 通用授权中间件
///
/// Re-checks the account row behind the token: it must still exist, be
/// active, and be approved. This is what makes deactivation and the
/// registration-approval workflow take effect before token expiry.
pub async fn common_auth(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AppError::unauthorized())?;

    let account = user::find_by_id(&state.pool, user.id)
        .await?
        .ok_or_else(|| AppError::forbidden("Account no longer exists"))?;

    if !account.is_active {
        security_log!("WARN", "account_disabled", user_id = user.id.to_string());
        return Err(AppError::forbidden("Account has been disabled"));
    }
    if !account.is_approved {
        security_log!("WARN", "account_unapproved", user_id = user.id.to_string());
        return Err(AppError::forbidden("Account is awaiting approval"));
    }

    Ok(next.run(req).await)
}

/// 门店范围中间件
///
/// Resolves the caller's [`ShowroomScope`] from the account row (not the
/// token, so reassignment applies immediately). Super admins get an
/// unrestricted scope; everyone else must have an assigned showroom.
pub async fn showroom_access(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AppError::unauthorized())?
        .clone();

    let scope = if user.is_super_admin() {
        ShowroomScope(None)
    } else {
        let account = user::find_by_id(&state.pool, user.id)
            .await?
            .ok_or_else(|| AppError::forbidden("Account no longer exists"))?;
        match account.showroom_id {
            Some(id) => ShowroomScope(Some(id)),
            None => {
                security_log!("WARN", "showroom_unassigned", user_id = user.id.to_string());
                return Err(AppError::forbidden("No showroom assigned to this account"));
            }
        }
    };

    req.extensions_mut().insert(scope);
    Ok(next.run(req).await)
}

/// 超级管理员中间件
///
/// # 错误
///
/// 非超级管理员返回 403 Forbidden
pub async fn require_super_admin(req: Request, next: Next) -> Result<Response, AppError> {
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AppError::unauthorized())?;
    if !user.is_super_admin() {
        security_log!(
            "WARN",
            "super_admin_required",
            user_id = user.id.to_string(),
            user_role = user.role.clone()
        );
        return Err(AppError::forbidden("Super admin privileges required"));
    }

    Ok(next.run(req).await)
}
