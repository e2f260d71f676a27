/**
 * campmap Server Entry Point
 *
 * Loads configuration, initializes tracing, opens the database and serves
 * the Axum app until the process is stopped.
 */

use campmap::backend::server::{create_app, load_config};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info,campmap=debug";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG wins over the default filter
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = load_config().inspect_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
    })?;

    let addr = config.bind_address();
    let app = create_app(config).await.inspect_err(|e| {
        tracing::error!("Startup failed: {}", e);
    })?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
