//! Business Settings API 模块 (super admin only, enforced at the mount)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/v1/business", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::get).put(handler::update))
}
