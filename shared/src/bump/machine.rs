//! Bump order state machine
//!
//! ```text
//!            hold            finish
//!   Active ───────▶ Hold ──────────▶ Inactive
//!     ▲ ◀─────────  │                   │
//!     │   resume    │ send              │ send
//!     │             ▼                   ▼
//!     └──────────── Sent ◀──────────────┘
//!        revert (also from Inactive)
//! ```
//!
//! Products flip between active and inactive independently of the order
//! status. Reverting an order resets every product to active.

use serde::{Deserialize, Serialize};

use super::query::filtered_items_completed;
use crate::models::{BumpOrder, BumpOrderStatus, BumpProductStatus};

/// Operator action on a whole order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BumpAction {
    Finish,
    Send,
    Revert,
    Hold,
    Resume,
}

impl std::fmt::Display for BumpAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Finish => "finish",
            Self::Send => "send",
            Self::Revert => "revert",
            Self::Hold => "hold",
            Self::Resume => "resume",
        };
        f.write_str(name)
    }
}

/// Action not allowed from the order's current status; the order is left
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot {action} a bump order in status {from:?}")]
pub struct InvalidTransition {
    pub from: BumpOrderStatus,
    pub action: BumpAction,
}

impl BumpOrder {
    /// Flip one product. Returns the new status, `None` if `uuid` is not on
    /// this order.
    pub fn toggle_product(&mut self, uuid: &str) -> Option<BumpProductStatus> {
        let product = self.products.iter_mut().find(|p| p.uuid == uuid)?;
        product.status = product.status.toggled();
        Some(product.status)
    }

    /// Target status for `action`, without applying it
    pub fn next_status(&self, action: BumpAction) -> Result<BumpOrderStatus, InvalidTransition> {
        use BumpOrderStatus::*;

        let next = match (action, self.status) {
            (BumpAction::Finish, Active | Hold) => Inactive,
            (BumpAction::Send, Active | Hold | Inactive) => Sent,
            (BumpAction::Revert, Sent | Inactive) => Active,
            (BumpAction::Hold, Active) => Hold,
            (BumpAction::Resume, Hold) => Active,
            (action, from) => return Err(InvalidTransition { from, action }),
        };
        Ok(next)
    }

    /// Apply an operator action
    pub fn apply(&mut self, action: BumpAction) -> Result<BumpOrderStatus, InvalidTransition> {
        let next = self.next_status(action)?;
        if action == BumpAction::Revert {
            for product in &mut self.products {
                product.status = BumpProductStatus::Active;
            }
        }
        tracing::debug!(
            order_id = self.id,
            from = ?self.status,
            to = ?next,
            %action,
            "Bump order transition"
        );
        self.status = next;
        Ok(next)
    }

    pub fn finish(&mut self) -> Result<BumpOrderStatus, InvalidTransition> {
        self.apply(BumpAction::Finish)
    }

    pub fn mark_sent(&mut self) -> Result<BumpOrderStatus, InvalidTransition> {
        self.apply(BumpAction::Send)
    }

    pub fn revert(&mut self) -> Result<BumpOrderStatus, InvalidTransition> {
        self.apply(BumpAction::Revert)
    }

    pub fn hold(&mut self) -> Result<BumpOrderStatus, InvalidTransition> {
        self.apply(BumpAction::Hold)
    }

    pub fn resume(&mut self) -> Result<BumpOrderStatus, InvalidTransition> {
        self.apply(BumpAction::Resume)
    }
}

/// What tapping the docket header does
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HeaderAction {
    Finish,
    Revert,
    None,
}

/// Decide the header-tap action for the order as currently displayed.
///
/// A finished docket reverts. An open docket finishes unless every visible
/// item is already done.
pub fn header_tap(order: &BumpOrder, search: Option<&str>) -> HeaderAction {
    if order.status.is_completed() {
        HeaderAction::Revert
    } else if filtered_items_completed(order, search) {
        HeaderAction::None
    } else {
        HeaderAction::Finish
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BumpOrderProduct;
    use chrono::Utc;

    fn product(uuid: &str, name: &str) -> BumpOrderProduct {
        BumpOrderProduct {
            uuid: uuid.into(),
            name: name.into(),
            status: BumpProductStatus::Active,
            quantity: 1,
            note: None,
            add_ons: vec![],
        }
    }

    fn order() -> BumpOrder {
        BumpOrder {
            id: 1,
            status: BumpOrderStatus::Active,
            order_date: Utc::now(),
            table_name: Some("T4".into()),
            products: vec![product("a", "Burger"), product("b", "Fries"), product("c", "Cola")],
        }
    }

    #[test]
    fn test_toggle_twice_restores_status() {
        let original = order();
        let mut o = original.clone();
        assert_eq!(o.toggle_product("b"), Some(BumpProductStatus::Inactive));
        assert_eq!(o.toggle_product("b"), Some(BumpProductStatus::Active));
        assert_eq!(o, original);
    }

    #[test]
    fn test_toggle_unknown_product() {
        let mut o = order();
        assert_eq!(o.toggle_product("zzz"), None);
    }

    #[test]
    fn test_all_toggled_keeps_order_active() {
        let mut o = order();
        for uuid in ["a", "b", "c"] {
            o.toggle_product(uuid);
        }
        assert!(crate::bump::all_items_completed(&o));
        assert_eq!(o.status, BumpOrderStatus::Active);
    }

    #[test]
    fn test_finish_and_revert() {
        let mut o = order();
        o.toggle_product("a");
        assert_eq!(o.finish(), Ok(BumpOrderStatus::Inactive));
        assert_eq!(
            o.finish(),
            Err(InvalidTransition { from: BumpOrderStatus::Inactive, action: BumpAction::Finish })
        );

        assert_eq!(o.revert(), Ok(BumpOrderStatus::Active));
        assert!(o.products.iter().all(|p| p.status == BumpProductStatus::Active));
    }

    #[test]
    fn test_hold_resume() {
        let mut o = order();
        assert_eq!(o.hold(), Ok(BumpOrderStatus::Hold));
        assert!(o.hold().is_err());
        assert_eq!(o.status, BumpOrderStatus::Hold);
        assert_eq!(o.resume(), Ok(BumpOrderStatus::Active));
        assert!(o.resume().is_err());
    }

    #[test]
    fn test_send_from_any_open_state() {
        for start in [BumpOrderStatus::Active, BumpOrderStatus::Hold, BumpOrderStatus::Inactive] {
            let mut o = order();
            o.status = start;
            assert_eq!(o.mark_sent(), Ok(BumpOrderStatus::Sent));
        }
        let mut o = order();
        o.status = BumpOrderStatus::Sent;
        assert!(o.mark_sent().is_err());
        assert_eq!(o.revert(), Ok(BumpOrderStatus::Active));
    }

    #[test]
    fn test_invalid_transition_leaves_products() {
        let mut o = order();
        o.toggle_product("c");
        assert!(o.revert().is_err());
        assert_eq!(o.products[2].status, BumpProductStatus::Inactive);
    }

    #[test]
    fn test_header_tap() {
        let mut o = order();
        assert_eq!(header_tap(&o, None), HeaderAction::Finish);

        o.toggle_product("b");
        // only Fries visible and it is done
        assert_eq!(header_tap(&o, Some("fries")), HeaderAction::None);
        assert_eq!(header_tap(&o, None), HeaderAction::Finish);

        o.finish().unwrap();
        assert_eq!(header_tap(&o, None), HeaderAction::Revert);
    }

    #[test]
    fn test_invalid_transition_display() {
        let err = InvalidTransition { from: BumpOrderStatus::Hold, action: BumpAction::Revert };
        assert_eq!(err.to_string(), "cannot revert a bump order in status Hold");
    }
}
