//! Error types

use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details for debugging
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
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

    /// True for any of the not-found codes
    pub fn is_not_found(&self) -> bool {
        self.code.is_not_found()
    }

    /// True for any of the validation codes
    pub fn is_validation(&self) -> bool {
        self.code.is_validation()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Zone `id` does not exist
    pub fn zone_not_found(id: &str) -> Self {
        Self::with_message(ErrorCode::ZoneNotFound, format!("Zone {id} not found"))
            .with_detail("id", id)
    }

    /// Spot `id` does not exist in its zone
    pub fn spot_not_found(id: &str) -> Self {
        Self::with_message(
            ErrorCode::TentSpotNotFound,
            format!("Tent spot {id} not found"),
        )
        .with_detail("id", id)
    }

    /// Size `id` is not in the reference list
    pub fn size_not_found(id: &str) -> Self {
        Self::with_message(
            ErrorCode::TentSizeNotFound,
            format!("Tent size {id} not found"),
        )
        .with_detail("id", id)
    }

    /// Reservation `id` does not exist
    pub fn reservation_not_found(id: &str) -> Self {
        Self::with_message(
            ErrorCode::ReservationNotFound,
            format!("Reservation {id} not found"),
        )
        .with_detail("id", id)
    }

    /// Create a not authenticated error
    pub fn not_authenticated() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StorageError, msg)
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ConfigError, msg)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
