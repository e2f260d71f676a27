//! Camping Spots Module
//!
//! The spot service: listing with an optional state filter, and creation of
//! new spots by logged-in users.
//!
//! ```text
//! spots/
//! ├── mod.rs      - Module exports
//! ├── db.rs       - camping_spots table access
//! └── handlers.rs - /api/camping_spots handlers
//! ```
//!
//! Payload validation lives in `shared::spot` so it can be used without a
//! server.

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_camping_spot, list_camping_spots};
