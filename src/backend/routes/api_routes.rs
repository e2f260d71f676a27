/**
 * API Routes
 *
 * JSON endpoints used by the map script.
 *
 * # Routes
 *
 * ## Spots
 * - `GET /api/camping_spots[?state=XX]` - List spots
 * - `POST /api/camping_spots` - Create a spot (requires login)
 *
 * ## GIS Proxy
 * - `GET /api/forest_boundaries` - National forest boundaries (GeoJSON)
 * - `GET /api/forest_roads` - Forest roads (GeoJSON)
 *
 * ## Session
 * - `GET /api/me` - Who is logged in
 */

use axum::{routing::get, Router};

use crate::backend::auth::get_me;
use crate::backend::gis::{forest_boundaries, forest_roads};
use crate::backend::server::state::AppState;
use crate::backend::spots::{create_camping_spot, list_camping_spots};

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/api/camping_spots",
            get(list_camping_spots).post(create_camping_spot),
        )
        .route("/api/forest_boundaries", get(forest_boundaries))
        .route("/api/forest_roads", get(forest_roads))
        .route("/api/me", get(get_me))
}
