//! Error types and API response structures

use super::codes::ErrorCode;
use crate::bump::BumpError;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (ids, field names, ...)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StorageError, msg)
    }
}

impl From<BumpError> for AppError {
    fn from(err: BumpError) -> Self {
        let message = err.to_string();
        match err {
            BumpError::OrderNotFound(id) => {
                Self::with_message(ErrorCode::BumpOrderNotFound, message)
                    .with_detail("order_id", id)
            }
            BumpError::ProductNotFound { order_id, uuid } => {
                Self::with_message(ErrorCode::BumpProductNotFound, message)
                    .with_detail("order_id", order_id)
                    .with_detail("uuid", uuid)
            }
            BumpError::InvalidTransition(t) => {
                Self::with_message(ErrorCode::BumpInvalidTransition, message)
                    .with_detail("action", t.action.to_string())
            }
        }
    }
}

/// Error response body
///
/// - `code`: Error code
/// - `message`: Human-readable message
/// - `data`: Always absent on errors; kept so clients share one envelope type
/// - `details`: Additional error details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl ApiResponse<()> {
    /// Create an error response from an AppError
    pub fn error(err: &AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            message: err.message.clone(),
            data: None,
            details: err.details.clone(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ApiResponse::<()>::error(&self);

        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bump::{BumpAction, InvalidTransition};
    use crate::models::BumpOrderStatus;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::BookingNotFound);
        assert_eq!(err.code, ErrorCode::BookingNotFound);
        assert_eq!(err.message, "Booking not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::validation("Missing tables")
            .with_detail("field", "table")
            .with_detail("reason", "required");

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "table");
        assert_eq!(details.get("reason").unwrap(), "required");
    }

    #[test]
    fn test_not_found_constructor() {
        let err = AppError::not_found("Floor 3");
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.to_string(), "Floor 3 not found");
        assert!(err.details.as_ref().unwrap().contains_key("resource"));
    }

    #[test]
    fn test_from_bump_error() {
        let err: AppError = BumpError::OrderNotFound(12).into();
        assert_eq!(err.code, ErrorCode::BumpOrderNotFound);
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);

        let err: AppError = BumpError::InvalidTransition(InvalidTransition {
            from: BumpOrderStatus::Sent,
            action: BumpAction::Hold,
        })
        .into();
        assert_eq!(err.code, ErrorCode::BumpInvalidTransition);
        assert_eq!(err.details.unwrap().get("action").unwrap(), "hold");
    }

    #[test]
    fn test_api_response_error() {
        let err = AppError::with_message(ErrorCode::TableNotFound, "Table 4 not found")
            .with_detail("id", 4);
        let response = ApiResponse::<()>::error(&err);

        assert_eq!(response.code, Some(7001));
        assert_eq!(response.message, "Table 4 not found");
        assert!(response.data.is_none());
        assert!(response.details.is_some());
    }

    #[test]
    fn test_api_response_serialize() {
        let err = AppError::new(ErrorCode::BookingConflict).with_detail("id", 9);
        let json = serde_json::to_value(ApiResponse::<()>::error(&err)).unwrap();
        assert_eq!(json["code"], 7202);
        assert_eq!(json["details"]["id"], 9);
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_into_response_uses_code_status() {
        use axum::response::IntoResponse;

        let response = AppError::not_found("Route /nope").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
