/**
 * Logout Handler
 *
 * `GET /logout` drops the session unconditionally and redirects home.
 * Calling it without a session is not an error.
 */

use axum::response::Redirect;
use tower_sessions::Session;

use crate::backend::auth::sessions::{current_user, end, push_flash, Flash};
use crate::backend::error::BackendError;

/// Log out and redirect to the home page
pub async fn logout(session: Session) -> Result<Redirect, BackendError> {
    if let Some(user) = current_user(&session).await? {
        tracing::info!("User logged out: {}", user.username);
    }

    end(&session).await?;
    push_flash(&session, Flash::info("You have been logged out.")).await?;

    Ok(Redirect::to("/"))
}
