//! 内存数据存储
//!
//! 预订、桌台和厨房单均保存在内存中，后端 REST API 才是数据源。
//! 设备设置通过 [`SettingsRepository`] 持久化到工作目录。
//!
//! - [`FloorPlanStore`] - 楼层与桌台
//! - [`BookingStore`] - 预订
//! - [`SettingsRepository`] - 设备设置 (文件 / 内存)

pub mod bookings;
pub mod floor_plan;
pub mod settings;

pub use bookings::BookingStore;
pub use floor_plan::FloorPlanStore;
pub use settings::{FileSettingsRepository, MemorySettingsRepository, SettingsRepository};
