//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::NotFound
            | Self::BumpOrderNotFound
            | Self::BumpProductNotFound
            | Self::TableNotFound
            | Self::FloorNotFound
            | Self::BookingNotFound => StatusCode::NOT_FOUND,

            Self::BumpInvalidTransition | Self::BookingConflict => StatusCode::CONFLICT,

            Self::InternalError | Self::StorageError => StatusCode::INTERNAL_SERVER_ERROR,

            Self::ValidationFailed
            | Self::BumpOrderEmpty
            | Self::BookingInvalidWindow => StatusCode::BAD_REQUEST,
        }
    }
}
