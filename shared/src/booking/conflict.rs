//! Booking conflict detection (桌台预订冲突检测)
//!
//! A conflict is two bookings that both occupy the same table and whose
//! half-open windows `[start, end)` overlap. Cancelled and finished bookings
//! never conflict; bookings without a table are ignored.

use serde::{Deserialize, Serialize};

use crate::models::Booking;

/// A pair of overlapping bookings on one table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct BookingConflict {
    pub table_id: i64,
    /// The booking that starts first
    pub first: i64,
    pub second: i64,
}

/// Active bookings on `table_id`, ordered by start then end
fn bookings_on_table(table_id: i64, bookings: &[Booking]) -> Vec<&Booking> {
    let mut on_table: Vec<&Booking> = bookings
        .iter()
        .filter(|b| b.status.occupies_table() && b.is_on_table(table_id))
        .collect();
    on_table.sort_by_key(|b| (b.start_time, b.effective_end()));
    on_table
}

/// Whether any active bookings on `table_id` overlap.
///
/// After sorting by start, any overlap shows up between some adjacent pair:
/// if `a` overlaps a later `c`, then every booking between them starts before
/// `a` ends.
pub fn table_has_conflict(table_id: i64, bookings: &[Booking]) -> bool {
    bookings_on_table(table_id, bookings)
        .windows(2)
        .any(|pair| pair[1].start_time < pair[0].effective_end())
}

/// Whether any of `table_ids` has overlapping active bookings
pub fn has_conflict_booking(table_ids: &[i64], bookings: &[Booking]) -> bool {
    table_ids
        .iter()
        .any(|&table_id| table_has_conflict(table_id, bookings))
}

/// Every conflicting pair on `table_ids`.
///
/// Unlike the adjacent check this keeps every booking still open at the
/// current start, so one long booking overlapping two later ones reports
/// both pairs. Pairs come out grouped by table in `table_ids` order.
pub fn find_conflicts(table_ids: &[i64], bookings: &[Booking]) -> Vec<BookingConflict> {
    let mut conflicts = Vec::new();

    for &table_id in table_ids {
        let mut open: Vec<&Booking> = Vec::new();
        for current in bookings_on_table(table_id, bookings) {
            open.retain(|b| b.effective_end() > current.start_time);
            conflicts.extend(
                open.iter()
                    .filter(|b| b.overlaps(current))
                    .map(|b| BookingConflict {
                        table_id,
                        first: b.id,
                        second: current.id,
                    }),
            );
            open.push(current);
        }
    }

    if !conflicts.is_empty() {
        tracing::debug!(count = conflicts.len(), "Booking conflicts found");
    }
    conflicts
}

/// Whether `candidate` would overlap an active booking on any of its tables.
///
/// Used before moving or assigning a booking; `bookings` may contain the
/// candidate itself (matched by id), which is skipped.
pub fn booking_conflicts_with(candidate: &Booking, bookings: &[Booking]) -> bool {
    if !candidate.status.occupies_table() {
        return false;
    }
    bookings
        .iter()
        .filter(|b| b.id != candidate.id && b.status.occupies_table())
        .filter(|b| b.table.iter().any(|t| candidate.is_on_table(*t)))
        .any(|b| b.overlaps(candidate))
}
