//! Unified error codes
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Bump order errors
//! - 7xxx: Table / booking errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 on the wire so floor and kitchen clients can match on
/// the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,

    // ==================== 4xxx: Bump Order ====================
    /// Bump order not found
    BumpOrderNotFound = 4001,
    /// Product not found on the bump order
    BumpProductNotFound = 4002,
    /// Action not allowed in the order's current status
    BumpInvalidTransition = 4003,
    /// Bump order has no products
    BumpOrderEmpty = 4004,

    // ==================== 7xxx: Table / Booking ====================
    /// Table not found
    TableNotFound = 7001,
    /// Floor not found
    FloorNotFound = 7101,
    /// Booking not found
    BookingNotFound = 7201,
    /// Booking overlaps another booking on the same table
    BookingConflict = 7202,
    /// Booking window ends before it starts
    BookingInvalidWindow = 7203,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Settings storage error
    StorageError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",

            // Bump
            ErrorCode::BumpOrderNotFound => "Bump order not found",
            ErrorCode::BumpProductNotFound => "Product not found on bump order",
            ErrorCode::BumpInvalidTransition => "Action not allowed for bump order status",
            ErrorCode::BumpOrderEmpty => "Bump order has no products",

            // Table / Booking
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::FloorNotFound => "Floor not found",
            ErrorCode::BookingNotFound => "Booking not found",
            ErrorCode::BookingConflict => "Booking overlaps another booking on the same table",
            ErrorCode::BookingInvalidWindow => "Booking end time is before its start time",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::StorageError => "Settings storage error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),

            4001 => Ok(ErrorCode::BumpOrderNotFound),
            4002 => Ok(ErrorCode::BumpProductNotFound),
            4003 => Ok(ErrorCode::BumpInvalidTransition),
            4004 => Ok(ErrorCode::BumpOrderEmpty),

            7001 => Ok(ErrorCode::TableNotFound),
            7101 => Ok(ErrorCode::FloorNotFound),
            7201 => Ok(ErrorCode::BookingNotFound),
            7202 => Ok(ErrorCode::BookingConflict),
            7203 => Ok(ErrorCode::BookingInvalidWindow),

            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::StorageError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ErrorCode; 14] = [
        ErrorCode::Success,
        ErrorCode::ValidationFailed,
        ErrorCode::NotFound,
        ErrorCode::BumpOrderNotFound,
        ErrorCode::BumpProductNotFound,
        ErrorCode::BumpInvalidTransition,
        ErrorCode::BumpOrderEmpty,
        ErrorCode::TableNotFound,
        ErrorCode::FloorNotFound,
        ErrorCode::BookingNotFound,
        ErrorCode::BookingConflict,
        ErrorCode::BookingInvalidWindow,
        ErrorCode::InternalError,
        ErrorCode::StorageError,
    ];

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::BumpOrderNotFound.code(), 4001);
        assert_eq!(ErrorCode::BookingConflict.code(), 7202);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_every_code_converts_back() {
        for code in ALL {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(9999), Err(InvalidErrorCode(9999)));
        // gaps inside a range are not codes
        for gap in [1, 4, 5, 4005, 7002, 9003] {
            assert_eq!(ErrorCode::try_from(gap), Err(InvalidErrorCode(gap)));
        }
        assert_eq!(InvalidErrorCode(9999).to_string(), "invalid error code: 9999");
    }

    #[test]
    fn test_serialize_as_number() {
        assert_eq!(serde_json::to_string(&ErrorCode::TableNotFound).unwrap(), "7001");
        let code: ErrorCode = serde_json::from_str("4003").unwrap();
        assert_eq!(code, ErrorCode::BumpInvalidTransition);
        assert!(serde_json::from_str::<ErrorCode>("4999").is_err());
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::NotFound.is_success());
    }
}
