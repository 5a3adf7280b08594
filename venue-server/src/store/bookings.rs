//! Booking store

use std::collections::HashMap;

use shared::booking::booking_conflicts_with;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Booking, BookingCreate, BookingStatus};
use shared::util::fresh_snowflake_id;

#[derive(Debug, Default)]
pub struct BookingStore {
    bookings: HashMap<i64, Booking>,
}

fn not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::BookingNotFound, format!("Booking {} not found", id))
        .with_detail("id", id)
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every booking, ordered by start time
    pub fn all(&self) -> Vec<Booking> {
        let mut bookings: Vec<Booking> = self.bookings.values().cloned().collect();
        bookings.sort_by_key(|b| (b.start_time, b.id));
        bookings
    }

    /// Bookings on `table_id`, or all when `None`
    pub fn list(&self, table_id: Option<i64>) -> Vec<Booking> {
        let mut bookings = self.all();
        if let Some(table_id) = table_id {
            bookings.retain(|b| b.is_on_table(table_id));
        }
        bookings
    }

    pub fn get(&self, id: i64) -> AppResult<&Booking> {
        self.bookings.get(&id).ok_or_else(|| not_found(id))
    }

    /// Insert a backend booking as-is (keeps its id)
    pub fn upsert(&mut self, booking: Booking) {
        self.bookings.insert(booking.id, booking);
    }

    pub fn create(&mut self, payload: BookingCreate) -> AppResult<Booking> {
        if payload.end_time < payload.start_time {
            return Err(AppError::new(ErrorCode::BookingInvalidWindow)
                .with_detail("start_time", payload.start_time.to_rfc3339())
                .with_detail("end_time", payload.end_time.to_rfc3339()));
        }
        if payload.party_size < 0 {
            return Err(AppError::validation("party_size must not be negative"));
        }

        let booking = Booking {
            id: fresh_snowflake_id(|id| self.bookings.contains_key(&id)),
            status: payload.status.unwrap_or_default(),
            start_time: payload.start_time,
            end_time: payload.end_time,
            table: payload.table,
            party_size: payload.party_size,
            guest: payload.guest,
        };
        self.bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    pub fn update_status(&mut self, id: i64, status: BookingStatus) -> AppResult<Booking> {
        let booking = self.bookings.get_mut(&id).ok_or_else(|| not_found(id))?;
        tracing::info!(
            booking_id = id,
            from = %booking.status,
            to = %status,
            "Booking status changed"
        );
        booking.status = status;
        Ok(booking.clone())
    }

    /// Reassign a booking to `tables`.
    ///
    /// Rejected with `BookingConflict` when the move would overlap another
    /// active booking, unless `force` is set.
    pub fn assign_tables(&mut self, id: i64, tables: Vec<i64>, force: bool) -> AppResult<Booking> {
        let mut candidate = self.get(id)?.clone();
        candidate.table = tables;

        if !force {
            let existing: Vec<Booking> = self.bookings.values().cloned().collect();
            if booking_conflicts_with(&candidate, &existing) {
                return Err(AppError::new(ErrorCode::BookingConflict)
                    .with_detail("id", id)
                    .with_detail("table", candidate.table.clone()));
            }
        }

        tracing::info!(
            booking_id = id,
            tables = ?candidate.table,
            force,
            "Booking tables reassigned"
        );
        self.bookings.insert(id, candidate.clone());
        Ok(candidate)
    }
}
