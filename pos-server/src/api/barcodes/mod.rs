//! Barcode API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/v1/barcode", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::generate))
        .route("/product/{product_id}", get(handler::list_by_product))
        .route("/{id}", axum::routing::delete(handler::delete))
}
