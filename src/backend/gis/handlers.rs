/**
 * GIS Proxy Handlers
 *
 * `GET /api/forest_boundaries` and `GET /api/forest_roads` return the
 * upstream GeoJSON verbatim, or 500 `{ "error", "details" }`.
 */

use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::IntoResponse,
};

use crate::backend::error::BackendError;
use crate::backend::gis::{GisClient, GisLayer};

async fn proxy(gis: &GisClient, layer: GisLayer) -> Result<impl IntoResponse, BackendError> {
    let body: Bytes = gis.fetch_layer(layer).await?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}

/// National forest boundaries for the configured state
pub async fn forest_boundaries(
    State(gis): State<GisClient>,
) -> Result<impl IntoResponse, BackendError> {
    proxy(&gis, GisLayer::Boundaries).await
}

/// Forest roads within the configured state's bounding box
pub async fn forest_roads(State(gis): State<GisClient>) -> Result<impl IntoResponse, BackendError> {
    proxy(&gis, GisLayer::Roads).await
}
