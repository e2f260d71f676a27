/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including database loading, service construction and route configuration.
 *
 * # Initialization Process
 *
 * 1. Open (or create) the SQLite database and run migrations
 * 2. Validate the configuration
 * 3. Build the GIS client with its timeout
 * 4. Assemble `AppState`
 * 5. Create and configure the router
 *
 * Any failure aborts startup with a `StartupError`.
 */

use axum::Router;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::backend::gis::GisClient;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::{AppConfig, ConfigError};

/// Reasons the server cannot start
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Create the application router
///
/// Opens the database named by `config.database_url`, creating the file if
/// needed.
pub async fn create_app(config: AppConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing campmap server");

    let pool = load_database(&config.database_url).await?;
    build_app(config, pool)
}

/// Create the application router around an already-open pool
///
/// The pool must already be migrated.
pub fn build_app(config: AppConfig, pool: SqlitePool) -> Result<Router<()>, StartupError> {
    config.validate()?;

    let gis = GisClient::new(config.gis.clone())?;
    tracing::info!(
        "GIS proxy configured for state {} (timeout {}s)",
        config.gis.state,
        config.gis.timeout_secs
    );

    let app_state = AppState::new(config, pool, gis);
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
