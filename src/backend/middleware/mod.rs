//! Middleware Module
//!
//! Request-processing pieces shared by the handlers.
//!
//! - **`auth`** - `AuthUser` extractor over the cookie session
//!
//! The session itself is provided by `tower_sessions::SessionManagerLayer`,
//! installed in `routes::router`.

pub mod auth;

pub use auth::AuthUser;
