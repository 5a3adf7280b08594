//! Booking API 模块

mod handler;

pub use handler::parse_bookings_lenient;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/bookings", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/sync", post(handler::sync))
        .route("/conflicts", post(handler::check_conflicts))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/status", put(handler::update_status))
        .route("/{id}/tables", put(handler::assign_tables))
        .route("/{id}/status-color", get(handler::status_color))
}
