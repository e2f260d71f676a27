/**
 * Authentication Extractor
 *
 * Protects handlers that require a logged-in user. `AuthUser` reads the
 * session identity written at login; without one the request is rejected
 * with 401 before the handler (or its body extractor) runs, so an anonymous
 * caller gets 401 whatever it sent.
 */

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::backend::auth::sessions::{current_user, SessionUser};
use crate::backend::error::BackendError;

/// Axum extractor for the authenticated user
///
/// ```rust,ignore
/// async fn handler(AuthUser(user): AuthUser) -> String {
///     format!("hello {}", user.username)
/// }
/// ```
#[derive(Clone, Debug)]
pub struct AuthUser(pub SessionUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(status, message)| {
                tracing::error!("Session unavailable: {}", message);
                BackendError::handler(status, message)
            })?;

        let user = current_user(&session).await?.ok_or_else(|| {
            tracing::warn!("Rejected unauthenticated request to {}", parts.uri.path());
            BackendError::unauthorized("You must be logged in to do that")
        })?;

        Ok(AuthUser(user))
    }
}
