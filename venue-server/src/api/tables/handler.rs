//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use shared::booking::{BookingConflict, find_conflicts};
use shared::models::{DiningTable, DiningTableCreate};

use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub floor_id: Option<i64>,
}

/// GET /api/tables - 获取桌台 (可按楼层过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<DiningTable>>> {
    Ok(Json(state.floor_plan.read().tables(query.floor_id)))
}

/// GET /api/tables/:id - 获取单个桌台
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DiningTable>> {
    let table = state.floor_plan.read().table(id)?.clone();
    Ok(Json(table))
}

/// POST /api/tables - 创建桌台
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DiningTableCreate>,
) -> AppResult<Json<DiningTable>> {
    let table = state.floor_plan.write().create_table(payload)?;
    tracing::info!(table_id = table.id, floor_id = table.floor_id, "Table created");
    Ok(Json(table))
}

#[derive(Debug, Serialize)]
pub struct TableConflictResponse {
    pub table_id: i64,
    pub has_conflict: bool,
    pub conflicts: Vec<BookingConflict>,
}

/// GET /api/tables/:id/conflict - 桌台预订冲突
pub async fn conflict(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<TableConflictResponse>> {
    state.floor_plan.read().table(id)?;
    let bookings = state.bookings.read().list(Some(id));

    let conflicts = find_conflicts(&[id], &bookings);
    Ok(Json(TableConflictResponse {
        table_id: id,
        has_conflict: !conflicts.is_empty(),
        conflicts,
    }))
}
