//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category, derived from the code range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Bump order errors (4xxx)
    Bump,
    /// Table and booking errors (7xxx)
    Floor,
    /// System errors (9xxx)
    System,
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        match self.code() {
            4000..=4999 => ErrorCategory::Bump,
            7000..=7999 => ErrorCategory::Floor,
            9000..=9999 => ErrorCategory::System,
            _ => ErrorCategory::General,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(ErrorCode::NotFound.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::BumpOrderEmpty.category(), ErrorCategory::Bump);
        assert_eq!(ErrorCode::BookingConflict.category(), ErrorCategory::Floor);
        assert_eq!(ErrorCode::StorageError.category(), ErrorCategory::System);
    }
}
