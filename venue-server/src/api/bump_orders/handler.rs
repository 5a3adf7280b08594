//! Bump Order API Handlers
//!
//! 每个响应都带上按当前搜索词计算的完成状态, 屏幕无需自行推导。

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared::bump::{BumpAction, BumpError, HeaderAction, filtered_items_completed, header_tap};
use shared::models::{
    BumpOrder, BumpOrderCreate, BumpOrderProduct, BumpOrderStatus, BumpProductStatus,
};
use shared::util::fresh_snowflake_id;
use uuid::Uuid;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

impl SearchQuery {
    fn as_deref(&self) -> Option<&str> {
        self.search.as_deref()
    }
}

/// Docket as shown on the kitchen screen
#[derive(Debug, Serialize)]
pub struct BumpOrderView {
    #[serde(flatten)]
    pub order: BumpOrder,
    pub items_completed: bool,
    pub header_action: HeaderAction,
}

impl BumpOrderView {
    fn new(order: &BumpOrder, search: Option<&str>) -> Self {
        Self {
            items_completed: filtered_items_completed(order, search),
            header_action: header_tap(order, search),
            order: order.clone(),
        }
    }
}

/// GET /api/bump-orders - 获取厨房单 (按下单时间排序)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<BumpOrderView>>> {
    let search = query.as_deref();
    let board = state.bump_board.read();
    let views = board
        .list(search)
        .into_iter()
        .map(|order| BumpOrderView::new(order, search))
        .collect();
    Ok(Json(views))
}

/// GET /api/bump-orders/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<BumpOrderView>> {
    let board = state.bump_board.read();
    let order = board.get(id).ok_or(BumpError::OrderNotFound(id))?;
    Ok(Json(BumpOrderView::new(order, query.as_deref())))
}

/// POST /api/bump-orders - 新厨房单 (POS 送厨)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BumpOrderCreate>,
) -> AppResult<Json<BumpOrderView>> {
    if payload.products.is_empty() {
        return Err(AppError::new(ErrorCode::BumpOrderEmpty));
    }
    if let Some(pos) = payload.products.iter().position(|p| p.name.trim().is_empty()) {
        return Err(AppError::validation("Product name is required").with_detail("index", pos));
    }

    let products = payload
        .products
        .into_iter()
        .map(|p| BumpOrderProduct {
            uuid: Uuid::new_v4().to_string(),
            name: p.name.trim().to_string(),
            status: BumpProductStatus::Active,
            quantity: p.quantity.max(1),
            note: p.note.filter(|n| !n.trim().is_empty()),
            add_ons: p.add_ons,
        })
        .collect();

    let mut board = state.bump_board.write();
    let order = BumpOrder {
        id: fresh_snowflake_id(|id| board.get(id).is_some()),
        status: BumpOrderStatus::Active,
        order_date: payload.order_date.unwrap_or_else(Utc::now),
        table_name: payload.table_name,
        products,
    };
    tracing::info!(
        order_id = order.id,
        products = order.products.len(),
        table = ?order.table_name,
        "Bump order created"
    );
    let view = BumpOrderView::new(&order, None);
    board.insert(order);
    Ok(Json(view))
}

/// POST /api/bump-orders/:id/products/:uuid/toggle - 单品完成/撤销
pub async fn toggle_product(
    State(state): State<ServerState>,
    Path((id, uuid)): Path<(i64, String)>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<BumpOrderView>> {
    let mut board = state.bump_board.write();
    let status = board.toggle_product(id, &uuid)?;
    tracing::debug!(order_id = id, uuid = %uuid, ?status, "Bump product toggled");

    let order = board.get(id).ok_or(BumpError::OrderNotFound(id))?;
    Ok(Json(BumpOrderView::new(order, query.as_deref())))
}

/// POST /api/bump-orders/:id/actions/:action - finish | send | revert | hold | resume
pub async fn apply_action(
    State(state): State<ServerState>,
    Path((id, action)): Path<(i64, BumpAction)>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<BumpOrderView>> {
    let mut board = state.bump_board.write();
    let order = board.apply(id, action)?;
    tracing::info!(order_id = id, %action, status = ?order.status, "Bump order action applied");
    Ok(Json(BumpOrderView::new(order, query.as_deref())))
}

#[derive(Debug, Serialize)]
pub struct HeaderTapResponse {
    pub action: HeaderAction,
    pub order: BumpOrderView,
}

/// POST /api/bump-orders/:id/header-tap - 点击单头
pub async fn header_tap_order(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<HeaderTapResponse>> {
    let search = query.as_deref();
    let mut board = state.bump_board.write();
    let (action, order) = board.header_tap(id, search)?;
    if action != HeaderAction::None {
        tracing::info!(order_id = id, ?action, "Bump order header tapped");
    }
    Ok(Json(HeaderTapResponse {
        action,
        order: BumpOrderView::new(order, search),
    }))
}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub cleared: usize,
}

/// POST /api/bump-orders/clear - 清除已完成/已送出的单
pub async fn clear_completed(State(state): State<ServerState>) -> AppResult<Json<ClearResponse>> {
    let cleared = state.bump_board.write().clear_completed();
    Ok(Json(ClearResponse { cleared }))
}
