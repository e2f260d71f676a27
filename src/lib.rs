//! campmap - Main Library
//!
//! campmap is a small map application for free camping spots. Visitors browse
//! spots by U.S. state on a Leaflet map that also shows national forest
//! boundaries and forest roads, proxied from the USDA Forest Service ArcGIS
//! server. Registered users can add new spots.
//!
//! # Module Structure
//!
//! - **`shared`** - Types that do not need the server
//!   - Camping spot wire format and payload validation
//!   - Application configuration
//!   - Shared error type
//!
//! - **`backend`** - The Axum server
//!   - Spot listing and creation over SQLite (sqlx)
//!   - Registration, login and cookie sessions (bcrypt, tower-sessions)
//!   - Pass-through proxy to the ArcGIS REST layers (reqwest)
//!   - HTML pages and static assets
//!
//! # Usage
//!
//! ```rust,no_run
//! use campmap::backend::server::init::create_app;
//! use campmap::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(AppConfig::default()).await?;
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for validation failures
//! - `backend::BackendError` at the HTTP handler boundary
//! - `backend::error::AuthError` for registration and login outcomes

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
