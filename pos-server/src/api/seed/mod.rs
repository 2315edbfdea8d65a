//! Seed API 模块 (`/api/v1/db`)

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/v1/db", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/seed", post(handler::seed))
}
