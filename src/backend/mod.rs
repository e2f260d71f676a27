//! Backend Module
//!
//! This module contains all server-side code for campmap: an Axum HTTP
//! server over a SQLite database, with cookie sessions and a proxy to the
//! Forest Service GIS layers.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`spots`** - Camping spot listing and creation
//! - **`gis`** - Pass-through proxy to the ArcGIS REST layers
//! - **`auth`** - Registration, login, sessions
//! - **`pages`** - Server-rendered HTML
//! - **`middleware`** - Request extractors
//! - **`seed`** - Sample data for a fresh database
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - campmap-server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── spots/          - Spot service
//! ├── gis/            - GIS proxy
//! ├── auth/           - Authentication
//! ├── pages/          - HTML pages
//! ├── middleware/     - Request extractors
//! ├── seed/           - Seed data and the campmap-seed binary
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` carries the pool, the GIS client, the session store and the
//! configuration; handlers extract the piece they need through `FromRef`.
//! The per-request `tower_sessions::Session` is an extractor of its own.
//!
//! # Error Handling
//!
//! Every handler returns `Result<_, BackendError>`. `BackendError`
//! implements `IntoResponse`, so failures become JSON error bodies with the
//! matching status code and never escape the handler.

/// Server initialization and state
pub mod server;

/// Route configuration
pub mod routes;

/// Camping spot service
pub mod spots;

/// Forest Service GIS proxy
pub mod gis;

/// Authentication and sessions
pub mod auth;

/// Server-rendered pages
pub mod pages;

/// Request extractors
pub mod middleware;

/// Sample data
pub mod seed;

/// Backend error types
pub mod error;

pub use error::{AuthError, BackendError};
pub use server::{create_app, AppState};
