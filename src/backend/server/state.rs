/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds the long-lived services every handler may need:
 * - the SQLite pool
 * - the GIS client
 * - the session store backing `tower_sessions`
 *   (a moka cache: each record is evicted once its expiry passes, and the
 *   cache never holds more than `MAX_SESSIONS` records)
 * - the loaded configuration
 *
 * All of them are cheap to clone and internally synchronised, so there is
 * no lock in the state itself.
 *
 * # State Extraction
 *
 * Handlers take only what they use:
 *
 * ```rust,ignore
 * async fn handler(State(pool): State<SqlitePool>) { /* ... */ }
 * async fn proxy(State(gis): State<GisClient>) { /* ... */ }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;
use tower_sessions_moka_store::MokaStore;

use crate::backend::gis::GisClient;
use crate::shared::AppConfig;

/// Upper bound on live sessions held in memory
pub const MAX_SESSIONS: u64 = 10_000;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Client for the Forest Service ArcGIS layers
    pub gis: GisClient,

    /// In-memory session store; sessions do not survive a restart
    pub session_store: MokaStore,

    /// Configuration the server was started with
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig, db_pool: SqlitePool, gis: GisClient) -> Self {
        Self {
            db_pool,
            gis,
            session_store: MokaStore::new(Some(MAX_SESSIONS)),
            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for GisClient {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.gis.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
