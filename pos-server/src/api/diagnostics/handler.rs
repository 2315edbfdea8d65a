//! Root diagnostics handler
//!
//! `GET /` is deliberately unguarded: deployment checks and the web client
//! use it to confirm the server is reachable and see what the server sees.

use std::net::SocketAddr;

use axum::Json;
use axum::extract::{ConnectInfo, Request};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub protocol: String,
    pub host: String,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub ip: String,
    #[serde(rename = "userAgent")]
    pub user_agent: String,
}

#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
    #[serde(rename = "userInfo")]
    pub user_info: UserInfo,
}

/// GET / - caller/server diagnostic JSON
pub async fn root(req: Request) -> Json<DiagnosticsResponse> {
    let headers = req.headers();

    // Behind a proxy the original scheme travels in x-forwarded-proto
    let protocol = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http")
        .to_string();

    let host = headers
        .get(http::header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let user_agent = headers
        .get(http::header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    Json(DiagnosticsResponse {
        server_info: ServerInfo { protocol, host },
        user_info: UserInfo { ip, user_agent },
    })
}
