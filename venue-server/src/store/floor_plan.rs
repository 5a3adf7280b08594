//! Floors and tables

use std::collections::HashMap;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{DiningTable, DiningTableCreate, Floor, FloorCreate};
use shared::util::fresh_snowflake_id;

#[derive(Debug, Default)]
pub struct FloorPlanStore {
    floors: HashMap<i64, Floor>,
    tables: HashMap<i64, DiningTable>,
}

impl FloorPlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Floors ordered by `sort_order`, then name
    pub fn floors(&self) -> Vec<Floor> {
        let mut floors: Vec<Floor> = self.floors.values().cloned().collect();
        floors.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then_with(|| a.name.cmp(&b.name)));
        floors
    }

    pub fn create_floor(&mut self, payload: FloorCreate) -> AppResult<Floor> {
        let name = payload.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Floor name is required").with_detail("field", "name"));
        }
        let floor = Floor {
            id: fresh_snowflake_id(|id| self.floors.contains_key(&id)),
            name: name.to_string(),
            sort_order: payload.sort_order,
        };
        self.floors.insert(floor.id, floor.clone());
        Ok(floor)
    }

    /// Tables, optionally restricted to one floor, ordered by name
    pub fn tables(&self, floor_id: Option<i64>) -> Vec<DiningTable> {
        let mut tables: Vec<DiningTable> = self
            .tables
            .values()
            .filter(|t| floor_id.is_none_or(|f| t.floor_id == f))
            .cloned()
            .collect();
        tables.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        tables
    }

    pub fn table(&self, id: i64) -> AppResult<&DiningTable> {
        self.tables.get(&id).ok_or_else(|| {
            AppError::with_message(ErrorCode::TableNotFound, format!("Table {} not found", id))
                .with_detail("id", id)
        })
    }

    pub fn create_table(&mut self, payload: DiningTableCreate) -> AppResult<DiningTable> {
        if !self.floors.contains_key(&payload.floor_id) {
            return Err(AppError::with_message(
                ErrorCode::FloorNotFound,
                format!("Floor {} not found", payload.floor_id),
            )
            .with_detail("id", payload.floor_id));
        }
        let name = payload.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Table name is required").with_detail("field", "name"));
        }

        let capacity_min = payload.capacity_min.unwrap_or(1).max(1);
        let capacity_max = payload.capacity_max.unwrap_or(capacity_min.max(4));
        if capacity_max < capacity_min {
            return Err(AppError::validation(format!(
                "capacity_max ({}) is below capacity_min ({})",
                capacity_max, capacity_min
            )));
        }

        let table = DiningTable {
            id: fresh_snowflake_id(|id| self.tables.contains_key(&id)),
            floor_id: payload.floor_id,
            name: name.to_string(),
            capacity_min,
            capacity_max,
            pos_x: payload.pos_x,
            pos_y: payload.pos_y,
            rotate_deg: payload.rotate_deg.rem_euclid(360.0),
            table_type: payload.table_type,
        };
        self.tables.insert(table.id, table.clone());
        Ok(table)
    }

    /// Every id must exist
    pub fn ensure_tables_exist(&self, ids: &[i64]) -> AppResult<()> {
        for id in ids {
            self.table(*id)?;
        }
        Ok(())
    }
}
