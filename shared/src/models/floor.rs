//! Floor Model

use serde::{Deserialize, Serialize};

/// Floor entity (楼层/区域：大厅、露台、包厢等)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Floor {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub sort_order: i32,
}

/// Create floor payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorCreate {
    pub name: String,
    #[serde(default)]
    pub sort_order: i32,
}
