//! Shared Error Types
//!
//! Errors that do not depend on the server runtime: payload validation and
//! JSON (de)serialization. The backend wraps these in `BackendError` at the
//! handler boundary.
//!
//! # Usage
//!
//! ```rust
//! use campmap::shared::error::SharedError;
//!
//! let error = SharedError::missing_field("latitude");
//! assert_eq!(error.user_message(), "Missing required field: latitude");
//! ```
use thiserror::Error;

/// Shared error types
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Validation error for a required field that was absent or blank
    pub fn missing_field(field: &str) -> Self {
        Self::validation(field, format!("Missing required field: {}", field))
    }

    /// Message suitable for an API client, without the variant prefix
    pub fn user_message(&self) -> String {
        match self {
            Self::SerializationError { message } => message.clone(),
            Self::ValidationError { message, .. } => message.clone(),
        }
    }

    /// Name of the offending field, if this is a validation error
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ValidationError { field, .. } => Some(field),
            Self::SerializationError { .. } => None,
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
