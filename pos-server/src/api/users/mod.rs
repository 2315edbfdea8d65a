//! User API 模块
//!
//! Account management. Mounted unguarded: registration must be reachable
//! before any account exists, so sensitive operations are gated inside the
//! handlers instead of at the mount.

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/v1/user", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::register))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/approve", put(handler::approve))
}
