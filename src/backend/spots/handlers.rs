/**
 * Spot HTTP Handlers
 *
 * - `GET /api/camping_spots[?state=XX]` - list, optionally filtered
 * - `POST /api/camping_spots` - create (logged-in users only)
 */

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::spots::db;
use crate::shared::{validate_new_spot, CampingSpot, CreateSpotResponse, NewSpotRequest, SpotFilter};

/// List camping spots
///
/// An absent or empty `state` returns every spot. A query string that does
/// not parse is a 400 in the usual JSON envelope.
pub async fn list_camping_spots(
    State(pool): State<SqlitePool>,
    query: Result<Query<SpotFilter>, QueryRejection>,
) -> Result<Json<Vec<CampingSpot>>, BackendError> {
    let Query(filter) = query?;
    let spots = db::list_spots(&pool, filter.state_code()).await?;
    tracing::debug!(
        "Listing {} spots (state filter: {:?})",
        spots.len(),
        filter.state_code()
    );
    Ok(Json(spots))
}

/// Create a camping spot
///
/// # Errors
///
/// * `401 Unauthorized` - no logged-in user; checked before the body
/// * `400 Bad Request` - malformed JSON, missing field, bad coordinate
/// * `500 Internal Server Error` - the insert failed and was rolled back
pub async fn create_camping_spot(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    payload: Result<Json<NewSpotRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateSpotResponse>), BackendError> {
    let Json(request) = payload?;

    let spot = validate_new_spot(&request).inspect_err(|e| {
        tracing::warn!("Rejected spot from {}: {}", user.username, e);
    })?;

    let id = db::create_spot(&pool, &spot).await?;
    tracing::info!(
        "User {} added spot {} ({}, {})",
        user.username,
        id,
        spot.name,
        spot.state
    );

    Ok((StatusCode::CREATED, Json(CreateSpotResponse { success: true, id })))
}
