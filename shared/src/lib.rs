//! Shared types for the venue floor and kitchen display
//!
//! Domain models, the reservation book logic (conflicts, status colours),
//! the bump screen state machine and the error types used by venue-server
//! and its clients.

pub mod booking;
pub mod bump;
pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
