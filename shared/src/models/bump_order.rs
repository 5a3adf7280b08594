//! Bump Order Model (厨房显示单)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order status on the kitchen display
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum BumpOrderStatus {
    /// Being worked
    #[default]
    Active,
    /// Paused by the kitchen
    Hold,
    /// Handed to the pass / sent out
    Sent,
    /// Finished from the header, dimmed until cleared
    Inactive,
}

impl BumpOrderStatus {
    /// Sent or inactive
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Sent | Self::Inactive)
    }
}

/// Per-product preparation status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum BumpProductStatus {
    /// Not yet prepared
    #[default]
    Active,
    /// Prepared
    Inactive,
}

impl BumpProductStatus {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }
}

/// Add-on / modifier line under a product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BumpAddOn {
    pub name: String,
    #[serde(default = "one")]
    pub quantity: i32,
}

fn one() -> i32 {
    1
}

/// One product line on a docket
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BumpOrderProduct {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub status: BumpProductStatus,
    #[serde(default = "one")]
    pub quantity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add_ons: Vec<BumpAddOn>,
}

impl BumpOrderProduct {
    pub fn is_prepared(&self) -> bool {
        self.status == BumpProductStatus::Inactive
    }
}

/// Kitchen docket created when a POS order is sent to the kitchen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BumpOrder {
    pub id: i64,
    #[serde(default)]
    pub status: BumpOrderStatus,
    pub order_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(default)]
    pub products: Vec<BumpOrderProduct>,
}

/// Product line when creating a bump order (uuid assigned by the server)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BumpProductInput {
    pub name: String,
    #[serde(default = "one")]
    pub quantity: i32,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub add_ons: Vec<BumpAddOn>,
}

/// Create bump order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BumpOrderCreate {
    #[serde(default)]
    pub table_name: Option<String>,
    #[serde(default)]
    pub order_date: Option<DateTime<Utc>>,
    pub products: Vec<BumpProductInput>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_string(&BumpOrderStatus::Hold).unwrap(), "\"hold\"");
        assert_eq!(
            serde_json::to_string(&BumpProductStatus::Inactive).unwrap(),
            "\"inactive\""
        );
    }

    #[test]
    fn test_toggle_is_involution() {
        for s in [BumpProductStatus::Active, BumpProductStatus::Inactive] {
            assert_ne!(s.toggled(), s);
            assert_eq!(s.toggled().toggled(), s);
        }
    }

    #[test]
    fn test_product_defaults() {
        let p: BumpOrderProduct =
            serde_json::from_str(r#"{"uuid":"a","name":"Fries"}"#).unwrap();
        assert_eq!(p.status, BumpProductStatus::Active);
        assert_eq!(p.quantity, 1);
        assert!(p.add_ons.is_empty());
    }
}
