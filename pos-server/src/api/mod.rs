//! API 路由模块
//!
//! One module per business domain, each contributing a router nested under
//! its `/api/v1/...` prefix. [`build_router`] merges them and applies the
//! per-mount guard chains; [`build_app`] adds the global middleware stack.
//!
//! # 结构
//!
//! - [`diagnostics`] - 根路径诊断接口
//! - [`auth`] - 登录/登出
//! - [`users`] - 账号管理
//! - [`products`] - 商品管理接口
//! - [`suppliers`] - 供应商接口
//! - [`warehouses`] / [`showrooms`] - 库存位置接口
//! - [`barcodes`] - 条码接口
//! - [`brands`] - 品牌接口
//! - [`invoices`] - 销售发票接口
//! - [`customers`] - 顾客接口
//! - [`employees`] - 员工接口
//! - [`taxes`] / [`business`] - 超级管理员接口
//! - [`reports`] - 报表接口
//! - [`expenses`] - 支出接口
//! - [`seed`] - 初始数据接口

pub mod auth;
pub mod barcodes;
pub mod brands;
pub mod business;
pub mod customers;
pub mod diagnostics;
pub mod employees;
pub mod expenses;
pub mod invoices;
pub mod products;
pub mod reports;
pub mod seed;
pub mod showrooms;
pub mod suppliers;
pub mod taxes;
pub mod users;
pub mod warehouses;

pub mod router_ext;
pub use router_ext::{OneshotResult, OneshotRouter};

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_middleware;
use http::HeaderValue;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth as guard;
use crate::core::{Config, ServerState};

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

/// Build a router with all routes registered and guard chains applied
/// (no global middleware, no state).
pub fn build_router(state: &ServerState) -> Router<ServerState> {
    Router::new()
        // Public mounts
        .merge(diagnostics::router())
        .merge(users::router())
        .merge(auth::router())
        .merge(seed::router())
        .merge(reports::router())
        // Showroom-scoped mounts: require_auth, common_auth, showroom_access
        .merge(with_showroom_guards(state, products::router()))
        .merge(with_showroom_guards(state, suppliers::router()))
        .merge(with_showroom_guards(state, warehouses::router()))
        .merge(with_showroom_guards(state, showrooms::router()))
        .merge(with_showroom_guards(state, barcodes::router()))
        .merge(with_showroom_guards(state, brands::router()))
        .merge(with_showroom_guards(state, invoices::router()))
        .merge(with_showroom_guards(state, customers::router()))
        .merge(with_showroom_guards(state, employees::router()))
        .merge(with_showroom_guards(state, expenses::router()))
        // Super-admin mounts: require_auth, common_auth, require_super_admin
        .merge(with_super_admin_guards(state, taxes::router()))
        .merge(with_super_admin_guards(state, business::router()))
}

/// Build a fully configured application with all global middleware.
///
/// This is used by both the HTTP server and oneshot test calls. The caller
/// still applies `.with_state(state)`.
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router(state)
        // ========== Tower HTTP Middleware ==========
        // CORS - credentialed allow-list; unlisted origins get no grant
        .layer(cors_layer(&state.config))
        // Body ceiling - bulk imports are large but bounded
        .layer(DefaultBodyLimit::max(state.config.body_limit_bytes))
        // Compression - gzip responses
        .layer(CompressionLayer::new())
        // Request logging - outermost, executed first
        .layer(axum_middleware::from_fn(log_request))
        // Trace - request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
}

/// Guard chain for showroom-scoped domains.
///
/// `Router::layer` wraps outside-in, so the last layer added runs first:
/// authentication, then account checks, then scope resolution.
fn with_showroom_guards(state: &ServerState, router: Router<ServerState>) -> Router<ServerState> {
    router
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            guard::showroom_access,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            guard::common_auth,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            guard::require_auth,
        ))
}

/// Guard chain for super-admin-only domains (tax, business).
fn with_super_admin_guards(
    state: &ServerState,
    router: Router<ServerState>,
) -> Router<ServerState> {
    router
        .layer(axum_middleware::from_fn(guard::require_super_admin))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            guard::common_auth,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            guard::require_auth,
        ))
}

/// Credentialed CORS with a fixed origin allow-list.
///
/// A request whose `Origin` is absent or unlisted simply receives no CORS
/// grant headers (a same-origin-style rejection, not an HTTP error).
fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([
            http::Method::GET,
            http::Method::POST,
            http::Method::PUT,
            http::Method::PATCH,
            http::Method::DELETE,
            http::Method::OPTIONS,
        ])
        .allow_headers([
            http::header::AUTHORIZATION,
            http::header::CONTENT_TYPE,
            http::header::ACCEPT,
        ])
}

/// HTTP 请求日志中间件
async fn log_request(
    request: axum::extract::Request,
    next: axum_middleware::Next,
) -> axum::response::Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();
    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}
