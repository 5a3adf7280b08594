//! Kitchen display (bump screen) logic
//!
//! - [`machine`] - product toggling and order status transitions
//! - [`query`] - derived view state (search filter, completion)
//! - [`board`] - the set of dockets currently on screen

pub mod board;
pub mod machine;
pub mod query;

pub use board::{BumpBoard, BumpError};
pub use machine::{BumpAction, HeaderAction, InvalidTransition, header_tap};
pub use query::{all_items_completed, filtered_items_completed, matches_search, visible_products};
