//! Backend Error Module
//!
//! Error types used by the HTTP handlers and their conversion into
//! responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError and AuthError
//! └── conversion.rs - IntoResponse and rejection conversions
//! ```
//!
//! # HTTP Response Conversion
//!
//! `BackendError` implements `IntoResponse`, so a handler returning
//! `Result<_, BackendError>` never lets a failure escape as a panic or a bare
//! 500: every error becomes a JSON body with a fitting status.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{AuthError, BackendError};
