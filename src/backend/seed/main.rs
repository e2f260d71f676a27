/**
 * campmap Seed Tool
 *
 * Opens the configured database (creating and migrating it if needed) and
 * replaces all camping spots with the sample set.
 */

use campmap::backend::seed::seed_spots;
use campmap::backend::server::{load_config, load_database};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = load_config()?;
    let pool = load_database(&config.database_url).await?;

    let count = seed_spots(&pool).await?;
    println!("Seeded {} camping spots into {}", count, config.database_url);

    pool.close().await;
    Ok(())
}
