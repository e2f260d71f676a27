//! Server Module
//!
//! Everything needed to turn an `AppConfig` into a running Axum router.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── state.rs  - AppState and FromRef implementations
//! ├── config.rs - Configuration loading and database setup
//! └── init.rs   - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: defaults, optional TOML file, environment
//! 2. **Database**: SQLite file created if missing, migrations applied
//! 3. **Services**: GIS client, in-memory session store
//! 4. **Router Creation**: routes, sessions, tracing, static files
//!
//! # Example
//!
//! ```rust,no_run
//! use campmap::backend::server::{create_app, load_config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let app = create_app(config.clone()).await?;
//! let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Application state
pub mod state;

/// Configuration loading and database setup
pub mod config;

/// Server initialization
pub mod init;

pub use config::{load_config, load_database};
pub use init::{build_app, create_app, StartupError};
pub use state::AppState;
