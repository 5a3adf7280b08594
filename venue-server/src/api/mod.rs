//! API 路由模块
//!
//! - [`health`] - 健康检查
//! - [`floors`] - 楼层
//! - [`tables`] - 桌台与桌台冲突
//! - [`bookings`] - 预订、状态颜色、冲突检测
//! - [`bump_orders`] - 厨房显示单
//! - [`settings`] - 设备设置

pub mod bookings;
pub mod bump_orders;
pub mod floors;
pub mod health;
pub mod settings;
pub mod tables;

use axum::Router;
use http::{HeaderName, HeaderValue, Uri};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

pub use crate::utils::{AppError, AppResult};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID generator (UUID v4)
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(floors::router())
        .merge(tables::router())
        .merge(bookings::router())
        .merge(bump_orders::router())
        .merge(settings::router())
        .fallback(route_not_found)
}

/// 未知路由也返回统一错误格式
async fn route_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

/// Build the application with middleware; call `.with_state` on the result
pub fn build_app() -> Router<ServerState> {
    build_router()
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER)))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
}
