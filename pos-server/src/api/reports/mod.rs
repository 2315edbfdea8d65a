//! Reports API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/v1/reports", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/sales", get(handler::sales))
        .route("/top-products", get(handler::top_products))
        .route("/inventory", get(handler::inventory))
        .route("/expenses", get(handler::expenses))
}
