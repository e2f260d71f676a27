//! Authentication Handlers Module
//!
//! HTTP handlers for the account pages and the session check.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Form and response types
//! ├── register.rs - GET/POST /register
//! ├── login.rs    - GET/POST /login
//! ├── logout.rs   - GET /logout
//! └── me.rs       - GET /api/me
//! ```
//!
//! The form handlers always answer a POST with a 303 redirect and report
//! the outcome through a flash message, so a browser refresh never
//! re-submits the form.

/// Form and response types
pub mod types;

/// Registration handlers
pub mod register;

/// Login handlers
pub mod login;

/// Logout handler
pub mod logout;

/// Get current user handler
pub mod me;

// Re-export commonly used types
pub use types::{LoginForm, MeResponse, RegisterForm};

// Re-export handlers
pub use login::{login, login_page};
pub use logout::logout;
pub use me::get_me;
pub use register::{register, register_page};
