//! Booking status classification (预订状态 → 显示分类)
//!
//! Maps a [`BookingStatus`] to the category the floor view colours the
//! booking with. Only `upcoming` depends on time: once `now` passes the
//! start it is shown as `late`. `now` is always supplied by the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::BookingStatus;

/// Presentation category of a booking
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum StatusCategory {
    Seated,
    Late,
    PartiallySeated,
    Billed,
    Finished,
    Unconfirmed,
    Upcoming,
    NoShow,
    Cancelled,
    OverTime,
    NeedAttention,
    /// Neutral fallback for statuses without a colour
    Default,
}

impl StatusCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Seated => "seated",
            Self::Late => "late",
            Self::PartiallySeated => "partially-seated",
            Self::Billed => "billed",
            Self::Finished => "finished",
            Self::Unconfirmed => "unconfirmed",
            Self::Upcoming => "upcoming",
            Self::NoShow => "no-show",
            Self::Cancelled => "cancelled",
            Self::OverTime => "over-time",
            Self::NeedAttention => "need-attention",
            Self::Default => "default",
        }
    }
}

impl std::fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which surface the colour is for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorTarget {
    #[default]
    Text,
    Bg,
    Border,
}

impl ColorTarget {
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Bg => "bg",
            Self::Border => "border",
        }
    }
}

/// Classify a booking status.
///
/// `upcoming` becomes `late` when `start_time` is known and `now` is past
/// it. Everything else is a fixed mapping.
pub fn booking_status_category(
    status: BookingStatus,
    start_time: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> StatusCategory {
    match status {
        BookingStatus::Upcoming => match start_time {
            Some(start) if now > start => StatusCategory::Late,
            _ => StatusCategory::Upcoming,
        },
        BookingStatus::Seated => StatusCategory::Seated,
        BookingStatus::Late => StatusCategory::Late,
        BookingStatus::PartiallySeated => StatusCategory::PartiallySeated,
        BookingStatus::Billed => StatusCategory::Billed,
        BookingStatus::Finished => StatusCategory::Finished,
        BookingStatus::Unconfirmed => StatusCategory::Unconfirmed,
        BookingStatus::NoShow => StatusCategory::NoShow,
        BookingStatus::Cancelled => StatusCategory::Cancelled,
        BookingStatus::OverTime => StatusCategory::OverTime,
        BookingStatus::NeedAttention => StatusCategory::NeedAttention,
        BookingStatus::Unknown => StatusCategory::Default,
    }
}

/// Colour token for a booking, e.g. `bg-late`
pub fn booking_status_color(
    target: ColorTarget,
    status: BookingStatus,
    start_time: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> String {
    let category = booking_status_category(status, start_time, now);
    format!("{}-{}", target.prefix(), category.as_str())
}

/// Emphasis for the guest name in booking lists
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NameStatus {
    /// Needs staff action now (late, over time, needs attention)
    Alert,
    /// At the table
    Active,
    /// Closed: finished, cancelled, no-show
    Muted,
    Default,
}

impl NameStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Alert => "alert",
            Self::Active => "active",
            Self::Muted => "muted",
            Self::Default => "default",
        }
    }
}

pub fn name_status_color(
    status: BookingStatus,
    start_time: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> NameStatus {
    match booking_status_category(status, start_time, now) {
        StatusCategory::Late | StatusCategory::OverTime | StatusCategory::NeedAttention => {
            NameStatus::Alert
        }
        StatusCategory::Seated | StatusCategory::PartiallySeated | StatusCategory::Billed => {
            NameStatus::Active
        }
        StatusCategory::Finished | StatusCategory::Cancelled | StatusCategory::NoShow => {
            NameStatus::Muted
        }
        StatusCategory::Unconfirmed | StatusCategory::Upcoming | StatusCategory::Default => {
            NameStatus::Default
        }
    }
}

/// Stage of the booking on the service timeline (progress bar)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressStage {
    Pending,
    InProgress,
    Billing,
    Done,
    Void,
}

impl ProgressStage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Billing => "billing",
            Self::Done => "done",
            Self::Void => "void",
        }
    }
}

/// Time-independent: a late booking is still pending
pub fn booking_progress_status_color(status: BookingStatus) -> ProgressStage {
    match status {
        BookingStatus::Seated | BookingStatus::PartiallySeated | BookingStatus::OverTime => {
            ProgressStage::InProgress
        }
        BookingStatus::Billed => ProgressStage::Billing,
        BookingStatus::Finished => ProgressStage::Done,
        BookingStatus::NoShow | BookingStatus::Cancelled => ProgressStage::Void,
        BookingStatus::Unconfirmed
        | BookingStatus::Upcoming
        | BookingStatus::Late
        | BookingStatus::NeedAttention
        | BookingStatus::Unknown => ProgressStage::Pending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 19, 0, 0).unwrap()
    }

    #[test]
    fn test_upcoming_in_the_past_is_late() {
        let past = now() - Duration::minutes(5);
        assert_eq!(
            booking_status_color(ColorTarget::Text, BookingStatus::Upcoming, Some(past), now()),
            booking_status_color(ColorTarget::Text, BookingStatus::Late, None, now()),
        );
        assert_eq!(
            booking_status_color(ColorTarget::Text, BookingStatus::Upcoming, Some(past), now()),
            "text-late"
        );
    }

    #[test]
    fn test_upcoming_in_the_future_stays_upcoming() {
        let future = now() + Duration::minutes(30);
        assert_eq!(
            booking_status_color(ColorTarget::Text, BookingStatus::Upcoming, Some(future), now()),
            "text-upcoming"
        );
        // exactly at start is not yet late
        assert_eq!(
            booking_status_category(BookingStatus::Upcoming, Some(now()), now()),
            StatusCategory::Upcoming
        );
        assert_eq!(
            booking_status_category(BookingStatus::Upcoming, None, now()),
            StatusCategory::Upcoming
        );
    }

    #[test]
    fn test_fixed_mapping_ignores_time() {
        let table = [
            (BookingStatus::Seated, StatusCategory::Seated),
            (BookingStatus::Late, StatusCategory::Late),
            (BookingStatus::PartiallySeated, StatusCategory::PartiallySeated),
            (BookingStatus::Billed, StatusCategory::Billed),
            (BookingStatus::Finished, StatusCategory::Finished),
            (BookingStatus::Unconfirmed, StatusCategory::Unconfirmed),
            (BookingStatus::NoShow, StatusCategory::NoShow),
            (BookingStatus::Cancelled, StatusCategory::Cancelled),
            (BookingStatus::OverTime, StatusCategory::OverTime),
            (BookingStatus::NeedAttention, StatusCategory::NeedAttention),
        ];
        let past = Some(now() - Duration::hours(2));
        for (status, expected) in table {
            assert_eq!(booking_status_category(status, past, now()), expected);
            assert_eq!(booking_status_category(status, None, now()), expected);
        }
    }

    #[test]
    fn test_unknown_status_has_stable_fallback() {
        let status = BookingStatus::parse("somethingNew");
        assert_eq!(booking_status_color(ColorTarget::Bg, status, None, now()), "bg-default");
        assert_eq!(name_status_color(status, None, now()), NameStatus::Default);
        assert_eq!(booking_progress_status_color(status), ProgressStage::Pending);
    }

    #[test]
    fn test_targets() {
        assert_eq!(
            booking_status_color(ColorTarget::Border, BookingStatus::NoShow, None, now()),
            "border-no-show"
        );
        assert_eq!(
            booking_status_color(ColorTarget::Bg, BookingStatus::PartiallySeated, None, now()),
            "bg-partially-seated"
        );
    }

    #[test]
    fn test_name_status() {
        let past = Some(now() - Duration::minutes(1));
        assert_eq!(name_status_color(BookingStatus::Upcoming, past, now()), NameStatus::Alert);
        assert_eq!(name_status_color(BookingStatus::Billed, None, now()), NameStatus::Active);
        assert_eq!(name_status_color(BookingStatus::NoShow, None, now()), NameStatus::Muted);
    }

    #[test]
    fn test_progress_stages() {
        assert_eq!(
            booking_progress_status_color(BookingStatus::OverTime),
            ProgressStage::InProgress
        );
        assert_eq!(booking_progress_status_color(BookingStatus::Billed), ProgressStage::Billing);
        assert_eq!(booking_progress_status_color(BookingStatus::Finished), ProgressStage::Done);
        assert_eq!(booking_progress_status_color(BookingStatus::Cancelled), ProgressStage::Void);
        assert_eq!(ProgressStage::InProgress.as_str(), "in-progress");
    }
}
