//! Floor API Handlers

use axum::{Json, extract::State};
use shared::models::{Floor, FloorCreate};

use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/floors - 获取所有楼层
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Floor>>> {
    Ok(Json(state.floor_plan.read().floors()))
}

/// POST /api/floors - 创建楼层
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<FloorCreate>,
) -> AppResult<Json<Floor>> {
    let floor = state.floor_plan.write().create_floor(payload)?;
    tracing::info!(floor_id = floor.id, name = %floor.name, "Floor created");
    Ok(Json(floor))
}
