//! Reservation book logic
//!
//! Pure functions over in-memory booking lists:
//! - [`conflict`] - overlapping bookings on the same table
//! - [`status`] - booking status to presentation category

pub mod conflict;
pub mod status;

pub use conflict::{
    BookingConflict, booking_conflicts_with, find_conflicts, has_conflict_booking,
    table_has_conflict,
};
pub use status::{
    ColorTarget, NameStatus, ProgressStage, StatusCategory, booking_progress_status_color,
    booking_status_category, booking_status_color, name_status_color,
};
