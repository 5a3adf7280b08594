//! Venue Server - 餐厅楼面与厨房显示服务
//!
//! # 架构概述
//!
//! 持有内存中的楼层/桌台、预订和厨房显示单，并通过 HTTP 暴露
//! `shared` 中的纯函数：
//!
//! - **预订冲突检测**: 同一桌台上时间窗口重叠的有效预订
//! - **预订状态分类**: 状态 (及开始时间) → 显示类别
//! - **厨房显示单状态机**: 单品勾选、完成、送出、撤回、暂停
//!
//! # 模块结构
//!
//! ```text
//! venue-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── store/         # 内存存储、设置仓库
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志
//! ```

pub mod api;
pub mod core;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerError, ServerState};
pub use store::{FileSettingsRepository, MemorySettingsRepository, SettingsRepository};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger_with_file};

/// 设置运行环境: 工作目录、日志、旧日志清理
///
/// 生产环境额外写入按天滚动的日志文件。
pub fn setup_environment(config: &Config) -> anyhow::Result<()> {
    config.ensure_work_dir_structure()?;

    let log_dir = config.log_dir();
    let file_dir = config.is_production().then_some(log_dir.as_path());
    init_logger_with_file(&config.log_level, config.json_logs(), file_dir)?;

    if file_dir.is_some() {
        match cleanup_old_logs(&log_dir, config.log_retention_days) {
            Ok(0) => {}
            Ok(removed) => tracing::info!(removed, "Old log files removed"),
            Err(e) => tracing::warn!(error = %e, "Failed to clean up old logs"),
        }
    }

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
 _    __
| |  / /__  ____  __  _____
| | / / _ \/ __ \/ / / / _ \
| |/ /  __/ / / / /_/ /  __/
|___/\___/_/ /_/\__,_/\___/
    "#
    );
}
