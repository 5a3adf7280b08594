//! Booking API Handlers

use std::collections::BTreeSet;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::booking::{
    BookingConflict, ColorTarget, NameStatus, ProgressStage, StatusCategory,
    booking_progress_status_color, booking_status_category, booking_status_color,
    find_conflicts, has_conflict_booking, name_status_color,
};
use shared::models::{Booking, BookingCreate, BookingStatusUpdate};

use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub table_id: Option<i64>,
}

/// GET /api/bookings - 获取预订 (可按桌台过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Booking>>> {
    Ok(Json(state.bookings.read().list(query.table_id)))
}

/// GET /api/bookings/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Booking>> {
    let booking = state.bookings.read().get(id)?.clone();
    Ok(Json(booking))
}

/// POST /api/bookings - 创建预订
///
/// Overlaps are allowed here; the floor view shows them through the
/// conflict endpoints.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BookingCreate>,
) -> AppResult<Json<Booking>> {
    {
        let floor_plan = state.floor_plan.read();
        floor_plan.ensure_tables_exist(&payload.table)?;
        if let [table_id] = payload.table[..] {
            let table = floor_plan.table(table_id)?;
            if payload.party_size > 0 && !table.fits_party(payload.party_size) {
                tracing::warn!(
                    table_id,
                    party_size = payload.party_size,
                    capacity_max = table.capacity_max,
                    "Party size outside table capacity"
                );
            }
        }
    }
    let booking = state.bookings.write().create(payload)?;
    tracing::info!(
        booking_id = booking.id,
        tables = ?booking.table,
        party_size = booking.party_size,
        "Booking created"
    );
    Ok(Json(booking))
}

#[derive(Debug, Serialize)]
pub struct SyncResponse {
    pub synced: usize,
}

/// POST /api/bookings/sync - 导入后端预订列表 (保留原 ID)
pub async fn sync(
    State(state): State<ServerState>,
    Json(bookings): Json<Vec<Booking>>,
) -> AppResult<Json<SyncResponse>> {
    let synced = bookings.len();
    let mut store = state.bookings.write();
    for booking in bookings {
        store.upsert(booking);
    }
    tracing::info!(synced, "Bookings synced from backend");
    Ok(Json(SyncResponse { synced }))
}

/// PUT /api/bookings/:id/status - 入座、结账、取消等
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<BookingStatusUpdate>,
) -> AppResult<Json<Booking>> {
    let booking = state.bookings.write().update_status(id, payload.status)?;
    Ok(Json(booking))
}

#[derive(Debug, Deserialize)]
pub struct AssignTablesRequest {
    pub table: Vec<i64>,
    /// Accept the move even if it overlaps another booking
    #[serde(default)]
    pub force: bool,
}

/// PUT /api/bookings/:id/tables - 换桌 (拖拽到桌台)
pub async fn assign_tables(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<AssignTablesRequest>,
) -> AppResult<Json<Booking>> {
    state.floor_plan.read().ensure_tables_exist(&payload.table)?;
    let booking = state
        .bookings
        .write()
        .assign_tables(id, payload.table, payload.force)?;
    Ok(Json(booking))
}

#[derive(Debug, Deserialize)]
pub struct StatusColorQuery {
    #[serde(default)]
    pub target: ColorTarget,
}

#[derive(Debug, Serialize)]
pub struct StatusColorResponse {
    pub booking_id: i64,
    pub category: StatusCategory,
    pub color: String,
    pub name: NameStatus,
    pub progress: ProgressStage,
}

/// GET /api/bookings/:id/status-color - 状态显示分类
///
/// Evaluated against the server's UTC clock.
pub async fn status_color(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(query): Query<StatusColorQuery>,
) -> AppResult<Json<StatusColorResponse>> {
    let booking = state.bookings.read().get(id)?.clone();
    let now = Utc::now();
    let start = Some(booking.start_time);

    Ok(Json(StatusColorResponse {
        booking_id: booking.id,
        category: booking_status_category(booking.status, start, now),
        color: booking_status_color(query.target, booking.status, start, now),
        name: name_status_color(booking.status, start, now),
        progress: booking_progress_status_color(booking.status),
    }))
}

/// One table id or a list
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TableTarget {
    One(i64),
    Many(Vec<i64>),
}

impl TableTarget {
    fn into_ids(self) -> Vec<i64> {
        match self {
            TableTarget::One(id) => vec![id],
            TableTarget::Many(ids) => ids,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ConflictCheckRequest {
    /// Tables to check; every table referenced by `bookings` when absent
    #[serde(default)]
    pub table: Option<TableTarget>,
    /// Anything; only a JSON array of bookings is inspected
    #[serde(default)]
    pub bookings: Value,
}

#[derive(Debug, Serialize)]
pub struct ConflictCheckResponse {
    pub has_conflict: bool,
    pub conflicts: Vec<BookingConflict>,
}

/// Parse a client-supplied booking list.
///
/// Returns `None` when `value` is not an array. Elements that are not valid
/// bookings are skipped.
pub fn parse_bookings_lenient(value: Value) -> Option<Vec<Booking>> {
    let Value::Array(items) = value else {
        return None;
    };
    let bookings = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Booking>(item) {
            Ok(booking) => Some(booking),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping malformed booking in conflict check");
                None
            }
        })
        .collect();
    Some(bookings)
}

/// POST /api/bookings/conflicts - 检测给定预订列表中的桌台冲突
///
/// Malformed input reports no conflict instead of failing.
pub async fn check_conflicts(
    Json(payload): Json<ConflictCheckRequest>,
) -> Json<ConflictCheckResponse> {
    let Some(bookings) = parse_bookings_lenient(payload.bookings) else {
        return Json(ConflictCheckResponse {
            has_conflict: false,
            conflicts: vec![],
        });
    };

    let table_ids: Vec<i64> = match payload.table {
        Some(target) => target.into_ids(),
        None => bookings
            .iter()
            .flat_map(|b| b.table.iter().copied())
            .collect::<BTreeSet<i64>>()
            .into_iter()
            .collect(),
    };

    Json(ConflictCheckResponse {
        has_conflict: has_conflict_booking(&table_ids, &bookings),
        conflicts: find_conflicts(&table_ids, &bookings),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_array_is_rejected() {
        assert!(parse_bookings_lenient(json!({"id": 1})).is_none());
        assert!(parse_bookings_lenient(Value::Null).is_none());
        assert!(parse_bookings_lenient(json!("bookings")).is_none());
    }

    #[test]
    fn test_malformed_elements_are_skipped() {
        let bookings = parse_bookings_lenient(json!([
            {
                "id": 1,
                "start_time": "2026-03-14T10:00:00Z",
                "end_time": "2026-03-14T11:00:00Z",
                "table": [1]
            },
            {"id": "oops"},
            42
        ]))
        .unwrap();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].id, 1);
    }

    #[test]
    fn test_table_target_forms() {
        let one: TableTarget = serde_json::from_value(json!(3)).unwrap();
        assert_eq!(one.into_ids(), vec![3]);
        let many: TableTarget = serde_json::from_value(json!([1, 2])).unwrap();
        assert_eq!(many.into_ids(), vec![1, 2]);
    }
}
