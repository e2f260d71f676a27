//! Shared Module
//!
//! Types that do not depend on the HTTP server: the camping spot wire
//! contract and its validation, the shared error type, and application
//! configuration. The backend builds on these; the seed tool and the tests
//! use them directly.

/// Camping spot types and payload validation
pub mod spot;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use spot::{
    validate_new_spot, CampingSpot, CoordinateInput, CreateSpotResponse, NewSpot,
    NewSpotRequest, SpotFilter,
};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError, GisConfig};
