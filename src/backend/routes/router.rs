/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Page routes (HTML and account forms)
 * 2. API routes (spots, GIS proxy, session check)
 * 3. Static files under `/static`
 * 4. Fallback handler (404)
 *
 * # Layers
 *
 * - `SessionManagerLayer` - cookie sessions over the moka session cache
 * - `TraceLayer` - one tracing span per request
 */

use axum::{http::StatusCode, response::IntoResponse, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tower_sessions::{
    cookie::{time::Duration, SameSite},
    Expiry, SessionManagerLayer,
};
use tower_sessions_moka_store::MokaStore;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::page_routes::configure_page_routes;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "campmap_session";

/// Create the Axum router with all routes configured
///
/// ## Page Routes
///
/// - `GET /`, `GET /map`
/// - `GET|POST /register`, `GET|POST /login`, `GET /logout`
///
/// ## API Routes
///
/// - `GET|POST /api/camping_spots`
/// - `GET /api/forest_boundaries`, `GET /api/forest_roads`
/// - `GET /api/me`
///
/// ## Static Files
///
/// Served from `config.static_dir` under `/static`.
pub fn create_router(app_state: AppState) -> Router<()> {
    let sessions = session_layer(app_state.session_store.clone(), &app_state.config);
    let static_files = ServeDir::new(&app_state.config.static_dir);

    let router = Router::new();
    let router = configure_page_routes(router);
    let router = configure_api_routes(router);

    router
        .nest_service("/static", static_files)
        .fallback(not_found)
        .layer(sessions)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Session cookie settings: HTTP-only, `SameSite=Lax`, expiring after the
/// configured period of inactivity
fn session_layer(store: MokaStore, config: &AppConfig) -> SessionManagerLayer<MokaStore> {
    let ttl = i64::try_from(config.session_ttl_secs).unwrap_or(i64::MAX);

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE)
        .with_secure(config.session_secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::seconds(ttl)))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "404 Not Found")
}
