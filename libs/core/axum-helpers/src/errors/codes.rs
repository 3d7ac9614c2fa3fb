//! Type-safe error codes for API responses.
//!
//! Single source of truth for the error codes used across the application.
//! Each error code carries:
//! - String representation for client consumption (e.g., "VALIDATION_ERROR")
//! - Integer code for logging and monitoring (e.g., 1001)
//! - Default human-readable message

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// Invalid identifier in path or query parameter
    InvalidId,

    /// Requested resource was not found
    NotFound,

    /// Caller lacks sufficient permissions
    Forbidden,

    /// Request conflicts with current resource state
    Conflict,

    /// JSON extraction from request body failed
    JsonExtraction,

    // Server errors (1500-1999)
    /// An unexpected internal server error occurred
    InternalError,

    /// JSON serialization failed
    SerdeJsonError,

    /// I/O failure while handling the request
    IoError,

    /// Service is temporarily unavailable
    ServiceUnavailable,
}

impl ErrorCode {
    /// Machine-readable string identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InvalidId => "INVALID_ID",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::JsonExtraction => "JSON_EXTRACTION",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::SerdeJsonError => "SERDE_JSON_ERROR",
            ErrorCode::IoError => "IO_ERROR",
            ErrorCode::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        }
    }

    /// Integer code for logging and monitoring.
    pub fn code(&self) -> i32 {
        match self {
            ErrorCode::ValidationError => 1001,
            ErrorCode::InvalidId => 1002,
            ErrorCode::NotFound => 1003,
            ErrorCode::Forbidden => 1004,
            ErrorCode::Conflict => 1005,
            ErrorCode::JsonExtraction => 1006,
            ErrorCode::InternalError => 1500,
            ErrorCode::SerdeJsonError => 1501,
            ErrorCode::IoError => 1502,
            ErrorCode::ServiceUnavailable => 1503,
        }
    }

    /// Default human-readable message.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "Request validation failed",
            ErrorCode::InvalidId => "Invalid identifier",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::Forbidden => "Operation not permitted",
            ErrorCode::Conflict => "Resource already exists",
            ErrorCode::JsonExtraction => "Invalid JSON in request body",
            ErrorCode::InternalError => "An internal error occurred",
            ErrorCode::SerdeJsonError => "Failed to serialize response",
            ErrorCode::IoError => "I/O error",
            ErrorCode::ServiceUnavailable => "Service temporarily unavailable",
        }
    }
}
