//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Table shape on the floor plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TableType {
    #[default]
    Square,
    Round,
    Rectangle,
    Bar,
}

/// Dining table entity (桌台)
///
/// Position and rotation are floor-plan coordinates; the server stores them
/// as given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiningTable {
    pub id: i64,
    pub floor_id: i64,
    pub name: String,
    pub capacity_min: i32,
    pub capacity_max: i32,
    #[serde(default)]
    pub pos_x: f64,
    #[serde(default)]
    pub pos_y: f64,
    #[serde(default)]
    pub rotate_deg: f64,
    #[serde(default)]
    pub table_type: TableType,
}

impl DiningTable {
    /// Whether a party of `size` fits the table's capacity range
    pub fn fits_party(&self, size: i32) -> bool {
        size >= self.capacity_min && size <= self.capacity_max
    }
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub floor_id: i64,
    pub name: String,
    pub capacity_min: Option<i32>,
    pub capacity_max: Option<i32>,
    #[serde(default)]
    pub pos_x: f64,
    #[serde(default)]
    pub pos_y: f64,
    #[serde(default)]
    pub rotate_deg: f64,
    #[serde(default)]
    pub table_type: TableType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_party() {
        let table = DiningTable {
            id: 1,
            floor_id: 1,
            name: "T1".into(),
            capacity_min: 2,
            capacity_max: 4,
            pos_x: 0.0,
            pos_y: 0.0,
            rotate_deg: 0.0,
            table_type: TableType::Round,
        };
        assert!(!table.fits_party(1));
        assert!(table.fits_party(2));
        assert!(table.fits_party(4));
        assert!(!table.fits_party(5));
    }

    #[test]
    fn test_geometry_defaults() {
        let json = r#"{"id":3,"floor_id":1,"name":"Bar 1","capacity_min":1,"capacity_max":1}"#;
        let table: DiningTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.table_type, TableType::Square);
        assert_eq!(table.rotate_deg, 0.0);
    }
}
