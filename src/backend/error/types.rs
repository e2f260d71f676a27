/**
 * Backend Error Types
 *
 * This module defines the error types used at the HTTP handler boundary.
 *
 * # Error Categories
 *
 * ## Validation Errors
 *
 * Missing or malformed request fields. Wrapped `SharedError`, reported as
 * 400 with the field-level message.
 *
 * ## Authorization Errors
 *
 * A protected endpoint was called without an active session: 401.
 *
 * ## Upstream Errors
 *
 * The ArcGIS server was unreachable, timed out, answered non-2xx, or sent a
 * body that is not a usable JSON document. Reported as 500 with a human
 * message and the underlying cause.
 *
 * ## Store Errors
 *
 * sqlx failures. The open transaction is dropped (rolled back), the cause is
 * logged and a generic 500 is returned.
 *
 * Registration and login outcomes use `AuthError`, which the HTML handlers
 * turn into flash messages rather than JSON.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
///
/// ```rust
/// use campmap::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::upstream("Failed to fetch forest roads", "timed out");
/// assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status (e.g. malformed JSON body)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// No authenticated session
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// The external GIS service failed
    #[error("Upstream error: {message} ({details})")]
    Upstream {
        /// What we were trying to do
        message: String,
        /// The underlying failure
        details: String,
    },

    /// Store failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Session store failure
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Shared error (validation, serialization)
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new authorization error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a new upstream error
    pub fn upstream(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
            details: details.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Unauthorized` - 401
    /// - `Upstream`, `Database`, `Session` - 500
    /// - `SharedError` - 400 for validation, 500 for serialization
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(err) => match err {
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Get the message shown to the client
    ///
    /// Store and session failures get a generic message; the cause is only
    /// logged.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Unauthorized { message } => message.clone(),
            Self::Upstream { message, .. } => message.clone(),
            Self::Database(_) => "Database error".to_string(),
            Self::Session(_) => "Session error".to_string(),
            Self::SharedError(err) => err.user_message(),
        }
    }
}

/// Registration and login failures
///
/// The `Display` text of the user-facing variants is the flash message shown
/// on the form page.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Username must be at least {min} characters long.")]
    UsernameTooShort { min: usize },

    #[error("Password must be at least {min} characters long.")]
    PasswordTooShort { min: usize },

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Username already exists. Please choose a different one.")]
    UsernameTaken,

    /// Unknown user and wrong password are deliberately indistinguishable
    #[error("Invalid username or password.")]
    InvalidCredentials,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    #[error("password hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl AuthError {
    /// True for failures that are the server's fault, not the user's
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Hashing(_) | Self::Task(_))
    }

    /// Message for the flash area of the form page
    pub fn user_message(&self) -> String {
        if self.is_internal() {
            "Something went wrong. Please try again.".to_string()
        } else {
            self.to_string()
        }
    }
}
