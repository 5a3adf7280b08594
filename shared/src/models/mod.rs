//! Data models
//!
//! Shared between venue-server and the floor/kitchen clients (via API).
//! All IDs are `i64` (snowflake, see [`crate::util::snowflake_id`]).

pub mod booking;
pub mod bump_order;
pub mod dining_table;
pub mod floor;
pub mod settings;

// Re-exports
pub use booking::*;
pub use bump_order::*;
pub use dining_table::*;
pub use floor::*;
pub use settings::*;
