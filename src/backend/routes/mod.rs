//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by functionality into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs         - Module exports and documentation
//! ├── router.rs      - Main router creation, layers, static files
//! ├── page_routes.rs - HTML pages and account forms
//! └── api_routes.rs  - JSON endpoints
//! ```
//!
//! # Route Types
//!
//! ## Pages
//!
//! - `GET /` - Home page
//! - `GET /map` - Map page
//! - `GET|POST /register`, `GET|POST /login`, `GET /logout`
//!
//! ## API
//!
//! - `GET|POST /api/camping_spots`
//! - `GET /api/forest_boundaries`, `GET /api/forest_roads`
//! - `GET /api/me`

/// Main router creation
pub mod router;

/// Page route configuration
pub mod page_routes;

/// API route configuration
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
