use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;
use shared::bump::BumpBoard;

use crate::core::{Config, Result};
use crate::store::{
    BookingStore, FileSettingsRepository, FloorPlanStore, MemorySettingsRepository,
    SettingsRepository,
};

/// 服务器状态 - 持有所有存储的共享引用
///
/// 使用 Arc 实现浅拷贝，处理器之间共享。锁不会跨 `.await` 持有。
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | floor_plan | 楼层与桌台 |
/// | bookings | 预订 |
/// | bump_board | 厨房显示单 |
/// | settings | 设备设置仓库 |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub floor_plan: Arc<RwLock<FloorPlanStore>>,
    pub bookings: Arc<RwLock<BookingStore>>,
    pub bump_board: Arc<RwLock<BumpBoard>>,
    pub settings: Arc<dyn SettingsRepository>,
    pub started_at: Instant,
}

impl ServerState {
    pub fn new(config: Config, settings: Arc<dyn SettingsRepository>) -> Self {
        Self {
            config,
            floor_plan: Arc::new(RwLock::new(FloorPlanStore::new())),
            bookings: Arc::new(RwLock::new(BookingStore::new())),
            bump_board: Arc::new(RwLock::new(BumpBoard::new())),
            settings,
            started_at: Instant::now(),
        }
    }

    /// 初始化服务器状态
    ///
    /// 1. 工作目录结构
    /// 2. 设置文件仓库 (work_dir/settings.json)
    pub fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure()?;

        let settings = FileSettingsRepository::new(config.settings_path());
        tracing::info!(path = %config.settings_path().display(), "Settings repository ready");

        Ok(Self::new(config.clone(), Arc::new(settings)))
    }

    /// 纯内存状态 (测试用)
    pub fn in_memory(config: Config) -> Self {
        Self::new(config, Arc::new(MemorySettingsRepository::default()))
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
