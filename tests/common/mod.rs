//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - A fully wired test application over an in-memory database
//! - A wiremock stand-in for the ArcGIS server
//! - Account helpers for session flows
//! - Custom assertion macros

pub mod auth_helpers;

// Re-export commonly used utilities
pub use app::*;
pub use auth_helpers::*;
pub use mock_server::*;
