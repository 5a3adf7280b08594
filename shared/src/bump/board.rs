//! Bump board: the dockets currently on the kitchen screen

use std::collections::HashMap;

use super::machine::{BumpAction, HeaderAction, InvalidTransition, header_tap};
use super::query::visible_products;
use crate::models::{BumpOrder, BumpProductStatus};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BumpError {
    #[error("Bump order {0} not found")]
    OrderNotFound(i64),

    #[error("Product {uuid} not found on bump order {order_id}")]
    ProductNotFound { order_id: i64, uuid: String },

    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),
}

/// Dockets keyed by order id.
///
/// Completed dockets stay (dimmed) until [`BumpBoard::clear_completed`].
#[derive(Debug, Clone, Default)]
pub struct BumpBoard {
    orders: HashMap<i64, BumpOrder>,
}

impl BumpBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a docket
    pub fn insert(&mut self, order: BumpOrder) {
        self.orders.insert(order.id, order);
    }

    pub fn get(&self, order_id: i64) -> Option<&BumpOrder> {
        self.orders.get(&order_id)
    }

    pub fn remove(&mut self, order_id: i64) -> Option<BumpOrder> {
        self.orders.remove(&order_id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Dockets with at least one product visible under `search`, oldest
    /// first.
    pub fn list(&self, search: Option<&str>) -> Vec<&BumpOrder> {
        let mut orders: Vec<&BumpOrder> = self
            .orders
            .values()
            .filter(|o| visible_products(o, search).next().is_some())
            .collect();
        orders.sort_by_key(|o| (o.order_date, o.id));
        orders
    }

    fn order_mut(&mut self, order_id: i64) -> Result<&mut BumpOrder, BumpError> {
        self.orders
            .get_mut(&order_id)
            .ok_or(BumpError::OrderNotFound(order_id))
    }

    pub fn toggle_product(
        &mut self,
        order_id: i64,
        uuid: &str,
    ) -> Result<BumpProductStatus, BumpError> {
        let order = self.order_mut(order_id)?;
        order
            .toggle_product(uuid)
            .ok_or_else(|| BumpError::ProductNotFound {
                order_id,
                uuid: uuid.to_string(),
            })
    }

    pub fn apply(&mut self, order_id: i64, action: BumpAction) -> Result<&BumpOrder, BumpError> {
        let order = self.order_mut(order_id)?;
        order.apply(action)?;
        Ok(&*order)
    }

    /// Perform whatever the header tap means for this docket
    pub fn header_tap(
        &mut self,
        order_id: i64,
        search: Option<&str>,
    ) -> Result<(HeaderAction, &BumpOrder), BumpError> {
        let order = self.order_mut(order_id)?;
        let action = header_tap(order, search);
        match action {
            HeaderAction::Finish => {
                order.finish()?;
            }
            HeaderAction::Revert => {
                order.revert()?;
            }
            HeaderAction::None => {}
        }
        Ok((action, &*order))
    }

    /// Drop sent/inactive dockets from the screen. Returns how many went.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.orders.len();
        self.orders.retain(|_, o| !o.status.is_completed());
        let cleared = before - self.orders.len();
        if cleared > 0 {
            tracing::info!(cleared, "Cleared completed bump orders");
        }
        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BumpOrderProduct, BumpOrderStatus};
    use chrono::{Duration, TimeZone, Utc};

    fn order(id: i64, minute: i64, names: &[&str]) -> BumpOrder {
        BumpOrder {
            id,
            status: BumpOrderStatus::Active,
            order_date: Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap()
                + Duration::minutes(minute),
            table_name: None,
            products: names
                .iter()
                .enumerate()
                .map(|(i, name)| BumpOrderProduct {
                    uuid: format!("{id}-{i}"),
                    name: name.to_string(),
                    status: BumpProductStatus::Active,
                    quantity: 1,
                    note: None,
                    add_ons: vec![],
                })
                .collect(),
        }
    }

    fn board() -> BumpBoard {
        let mut board = BumpBoard::new();
        board.insert(order(2, 5, &["Fries"]));
        board.insert(order(1, 0, &["Burger", "Fries"]));
        board.insert(order(3, 10, &["Cola"]));
        board
    }

    #[test]
    fn test_list_is_oldest_first_and_filtered() {
        let board = board();
        let ids: Vec<i64> = board.list(None).iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let ids: Vec<i64> = board.list(Some("fries")).iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_toggle_errors() {
        let mut board = board();
        assert_eq!(board.toggle_product(99, "x"), Err(BumpError::OrderNotFound(99)));
        assert_eq!(
            board.toggle_product(1, "x"),
            Err(BumpError::ProductNotFound { order_id: 1, uuid: "x".into() })
        );
        assert_eq!(board.toggle_product(1, "1-0"), Ok(BumpProductStatus::Inactive));
    }

    #[test]
    fn test_header_tap_finishes_then_reverts() {
        let mut board = board();
        let (action, order) = board.header_tap(1, None).unwrap();
        assert_eq!(action, HeaderAction::Finish);
        assert_eq!(order.status, BumpOrderStatus::Inactive);

        let (action, order) = board.header_tap(1, None).unwrap();
        assert_eq!(action, HeaderAction::Revert);
        assert_eq!(order.status, BumpOrderStatus::Active);
    }

    #[test]
    fn test_apply_invalid_transition() {
        let mut board = board();
        let err = board.apply(3, BumpAction::Resume).unwrap_err();
        assert!(matches!(err, BumpError::InvalidTransition(_)));
        assert_eq!(board.get(3).unwrap().status, BumpOrderStatus::Active);
    }

    #[test]
    fn test_clear_completed() {
        let mut board = board();
        board.apply(1, BumpAction::Finish).unwrap();
        board.apply(2, BumpAction::Send).unwrap();
        board.apply(3, BumpAction::Hold).unwrap();

        assert_eq!(board.clear_completed(), 2);
        assert_eq!(board.len(), 1);
        assert!(board.get(3).is_some());
        assert_eq!(board.clear_completed(), 0);
    }
}
