/**
 * Get Current User Handler
 *
 * `GET /api/me` tells the map script whether a user is logged in, so it can
 * show or hide the add-spot form. Always 200; anonymous visitors get
 * `{"authenticated": false, "username": null}`.
 */

use axum::response::Json;
use tower_sessions::Session;

use crate::backend::auth::handlers::types::MeResponse;
use crate::backend::auth::sessions::current_user;
use crate::backend::error::BackendError;

/// Get current user handler
pub async fn get_me(session: Session) -> Result<Json<MeResponse>, BackendError> {
    let user = current_user(&session).await?;

    Ok(Json(MeResponse {
        authenticated: user.is_some(),
        username: user.map(|u| u.username),
    }))
}
