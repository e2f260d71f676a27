/**
 * Server Configuration
 *
 * Loads the `AppConfig` from its sources and opens the SQLite database.
 *
 * # Configuration Sources
 *
 * 1. Built-in defaults
 * 2. The TOML file named by `CAMPMAP_CONFIG`, if set
 * 3. Environment variables (a `.env` file is loaded first, if present)
 *
 * # Database
 *
 * The database file is created when missing and migrations from
 * `migrations/` are applied before the pool is handed out. Unlike
 * optional integrations, the store is required: a connection or migration
 * failure aborts startup.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::shared::config::{AppConfig, ConfigError};

/// Environment variable naming an optional TOML config file
pub const CONFIG_FILE_VAR: &str = "CAMPMAP_CONFIG";

/// Load configuration from the file named by `CAMPMAP_CONFIG` and the
/// process environment, then validate it
pub fn load_config() -> Result<AppConfig, ConfigError> {
    dotenv::dotenv().ok();

    let base = match std::env::var(CONFIG_FILE_VAR) {
        Ok(path) => {
            tracing::info!("Reading configuration file {}", path);
            AppConfig::from_toml_file(&path)?
        }
        Err(_) => AppConfig::default(),
    };

    let config = base.apply_env(|key| std::env::var(key).ok())?;
    config.validate()?;
    Ok(config)
}

/// Open the database pool and run migrations
///
/// # Errors
///
/// Returns the sqlx error if the URL is malformed, the file cannot be
/// opened, or a migration fails.
pub async fn load_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}

/// A migrated, private in-memory database
///
/// Every SQLite `:memory:` connection is a separate database, so the pool is
/// pinned to one connection that never expires.
pub async fn in_memory_database() -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Apply pending migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::debug!("Running database migrations...");
    sqlx::migrate!().run(pool).await?;
    Ok(())
}
