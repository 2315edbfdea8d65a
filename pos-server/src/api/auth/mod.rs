//! Auth API 模块
//!
//! Mounted unguarded; `me` and `logout` authenticate through the
//! [`crate::auth::CurrentUser`] extractor instead of the guard chain.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/v1/auth", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/login", post(handler::login))
        .route("/logout", post(handler::logout))
        .route("/me", get(handler::me))
}
