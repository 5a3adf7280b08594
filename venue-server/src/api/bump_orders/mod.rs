//! Bump Order (厨房显示单) API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/bump-orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/clear", post(handler::clear_completed))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/products/{uuid}/toggle", post(handler::toggle_product))
        .route("/{id}/actions/{action}", post(handler::apply_action))
        .route("/{id}/header-tap", post(handler::header_tap_order))
}
