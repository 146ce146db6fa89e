// ABOUTME: Unified error handling for the NutriGuide engine
// ABOUTME: Defines error codes, the AppError type, and constructors for every failure kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Centralized error handling for the NutriGuide engine. The engine surfaces
//! three failure kinds to callers: a required profile field missing from an
//! analysis request, an external reply that does not match the expected shape,
//! and a transport-level failure carrying the remote status code. The engine
//! never retries internally; every failure is returned to the caller, which
//! decides on user-facing messaging.
//!
//! Calculation functions (`intelligence` module) have no error paths at all.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required profile field is absent
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// External data did not match the expected shape
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,

    // External services (5000-5999)
    /// The analysis service returned a non-success status
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    /// The analysis service could not be reached
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable = 5001,

    // Configuration (6000-6999)
    /// Configuration error encountered
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Internal (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Serialization or deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the profile",
            Self::InvalidFormat => "The data format is invalid",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ExternalServiceUnavailable => "An external service is currently unavailable",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether a caller may reasonably retry the failed operation
    ///
    /// Format mismatches and transport failures are retryable at the caller's
    /// discretion; a missing profile field is not (the profile must be
    /// completed first).
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::InvalidFormat | Self::ExternalServiceError | Self::ExternalServiceUnavailable
        )
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Profile field name, for missing-field errors
    pub field: Option<String>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            field: None,
            details: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// Unified error type for the engine
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// The profile field this error names, if it is a missing-field error
    #[must_use]
    pub fn missing_field(&self) -> Option<&str> {
        self.context.field.as_deref()
    }

    /// The remote HTTP status this error carries, if it is a server error
    #[must_use]
    pub fn remote_status(&self) -> Option<u16> {
        self.context
            .details
            .get("status")
            .and_then(serde_json::Value::as_u64)
            .and_then(|s| u16::try_from(s).ok())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors for the engine's failure kinds
impl AppError {
    /// A required scalar field is absent from the profile document
    ///
    /// Raised only by the analysis request builder; the chat request builder
    /// tolerates an incomplete profile.
    #[must_use]
    pub fn missing_profile_field(field: impl Into<String>) -> Self {
        let field = field.into();
        let mut err = Self::new(
            ErrorCode::MissingRequiredField,
            format!("Missing required profile field: {field}"),
        );
        err.context.field = Some(field);
        err
    }

    /// An external reply did not match the expected shape
    #[must_use]
    pub fn invalid_response_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// The external service answered with a non-2xx status code
    #[must_use]
    pub fn server_error(status: u16) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("Server returned status code: {status}"),
        )
        .with_details(serde_json::json!({ "status": status }))
    }

    /// The external service could not be reached at all
    #[must_use]
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExternalServiceUnavailable, message)
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Conversion from anyhow::Error to `AppError`
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        match error.source() {
            Some(source) => {
                Self::new(ErrorCode::InternalError, error.to_string()).with_details(
                    serde_json::json!({
                        "source": source.to_string()
                    }),
                )
            }
            None => Self::new(ErrorCode::InternalError, error.to_string()),
        }
    }
}

/// Conversion from serde_json::Error to `AppError`
impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_profile_field_names_the_field() {
        let error = AppError::missing_profile_field("height");
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(error.missing_field(), Some("height"));
        assert!(error.message.contains("height"));
    }

    #[test]
    fn test_server_error_carries_status() {
        let error = AppError::server_error(503);
        assert_eq!(error.code, ErrorCode::ExternalServiceError);
        assert_eq!(error.remote_status(), Some(503));
        assert!(error.message.contains("503"));
    }

    #[test]
    fn test_retryability_split() {
        assert!(!ErrorCode::MissingRequiredField.is_retryable());
        assert!(ErrorCode::InvalidFormat.is_retryable());
        assert!(ErrorCode::ExternalServiceError.is_retryable());
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::InvalidFormat).unwrap();
        assert_eq!(json, "\"INVALID_FORMAT\"");
    }
}
