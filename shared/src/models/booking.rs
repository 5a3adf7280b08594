//! Booking Model (预订)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Booking lifecycle status as reported by the reservation backend.
///
/// Values the backend sends that this build does not know about deserialize
/// to [`BookingStatus::Unknown`] instead of failing the whole payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum BookingStatus {
    /// 待确认
    #[default]
    Unconfirmed,
    /// 已入座
    Seated,
    /// 部分入座
    PartiallySeated,
    /// 已出账单
    Billed,
    /// 已完成
    Finished,
    /// 未到店
    NoShow,
    /// 已取消
    Cancelled,
    /// 迟到
    Late,
    /// 超时
    OverTime,
    /// 需要关注
    NeedAttention,
    /// 即将到店
    Upcoming,
    #[serde(other)]
    Unknown,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 12] = [
        Self::Unconfirmed,
        Self::Seated,
        Self::PartiallySeated,
        Self::Billed,
        Self::Finished,
        Self::NoShow,
        Self::Cancelled,
        Self::Late,
        Self::OverTime,
        Self::NeedAttention,
        Self::Upcoming,
        Self::Unknown,
    ];

    /// Wire name (camelCase)
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unconfirmed => "unconfirmed",
            Self::Seated => "seated",
            Self::PartiallySeated => "partiallySeated",
            Self::Billed => "billed",
            Self::Finished => "finished",
            Self::NoShow => "noShow",
            Self::Cancelled => "cancelled",
            Self::Late => "late",
            Self::OverTime => "overTime",
            Self::NeedAttention => "needAttention",
            Self::Upcoming => "upcoming",
            Self::Unknown => "unknown",
        }
    }

    /// Lenient parse, unrecognised names become `Unknown`
    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == value)
            .unwrap_or(Self::Unknown)
    }

    /// Whether the booking still holds its table(s).
    ///
    /// Cancelled and finished bookings release the table and are skipped by
    /// conflict detection.
    pub const fn occupies_table(&self) -> bool {
        !matches!(self, Self::Cancelled | Self::Finished)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Guest contact snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Guest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Booking entity (预订)
///
/// `table` lists the ids of every table the party occupies; it is empty for
/// bookings not yet assigned. The backend sends either `start_time`/`end_time`
/// or `start_date`/`end_date`, both are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: i64,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(alias = "start_date")]
    pub start_time: DateTime<Utc>,
    #[serde(alias = "end_date")]
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub table: Vec<i64>,
    #[serde(default)]
    pub party_size: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest: Option<Guest>,
}

impl Booking {
    /// End of the booking window.
    ///
    /// A window whose end precedes its start is treated as empty at the
    /// start instant.
    pub fn effective_end(&self) -> DateTime<Utc> {
        self.end_time.max(self.start_time)
    }

    pub fn is_on_table(&self, table_id: i64) -> bool {
        self.table.contains(&table_id)
    }

    /// Half-open `[start, end)` overlap test
    pub fn overlaps(&self, other: &Booking) -> bool {
        self.start_time < other.effective_end() && other.start_time < self.effective_end()
    }
}

/// Create booking payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreate {
    #[serde(default)]
    pub status: Option<BookingStatus>,
    #[serde(alias = "start_date")]
    pub start_time: DateTime<Utc>,
    #[serde(alias = "end_date")]
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub table: Vec<i64>,
    #[serde(default)]
    pub party_size: i32,
    #[serde(default)]
    pub guest: Option<Guest>,
}

/// Update booking status payload (seat, bill, cancel ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingStatusUpdate {
    pub status: BookingStatus,
}
