//! Settings API Handlers
//!
//! 设置仓库可能是文件读写，放到阻塞线程池执行。

use std::sync::Arc;

use axum::{Json, extract::State};
use shared::models::{VenueSettings, VenueSettingsUpdate};

use crate::core::ServerState;
use crate::store::SettingsRepository;
use crate::utils::{AppError, AppResult};

async fn with_repository<T, F>(state: &ServerState, op: F) -> AppResult<T>
where
    T: Send + 'static,
    F: FnOnce(&dyn SettingsRepository) -> AppResult<T> + Send + 'static,
{
    let repo = Arc::clone(&state.settings);
    tokio::task::spawn_blocking(move || op(repo.as_ref()))
        .await
        .map_err(|e| AppError::internal(format!("Settings task failed: {}", e)))?
}

/// GET /api/settings
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<VenueSettings>> {
    let settings = with_repository(&state, |repo| repo.load()).await?;
    Ok(Json(settings))
}

/// PUT /api/settings - 部分更新
pub async fn update(
    State(state): State<ServerState>,
    Json(payload): Json<VenueSettingsUpdate>,
) -> AppResult<Json<VenueSettings>> {
    let settings = with_repository(&state, move |repo| repo.update(payload)).await?;
    tracing::info!(
        printer = ?settings.printer.name,
        require_pin = settings.require_pin,
        "Settings updated"
    );
    Ok(Json(settings))
}
