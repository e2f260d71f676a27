//! Authentication Module
//!
//! User registration, login and cookie sessions.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── password.rs     - bcrypt hashing on the blocking pool
//! ├── service.rs      - Account rules (register, authenticate)
//! ├── sessions.rs     - Session identity and flash messages
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username + password + confirmation → rules checked →
//!    bcrypt hash stored → redirect to the login page
//! 2. **Login**: username + password → hash verified → session id rotated,
//!    user stored in the session → redirect to the map
//! 3. **Logout**: session flushed → redirect home
//!
//! # Security
//!
//! - Only bcrypt hashes are stored
//! - Sessions live in memory and expire after an hour of inactivity
//! - Invalid credentials never reveal whether the username exists

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod password;

/// Registration and login rules
pub mod service;

/// Session state helpers
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginForm, MeResponse, RegisterForm};
pub use handlers::{get_me, login, login_page, logout, register, register_page};
pub use sessions::{Flash, FlashLevel, SessionUser};
