/**
 * Session Management
 *
 * Cookie sessions backed by `tower_sessions`. The session holds the
 * logged-in user and any pending flash messages; it lives only in the
 * in-memory store and expires after a period of inactivity.
 */

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::backend::auth::users::User;

/// Session keys
pub mod keys {
    /// The authenticated user
    pub const USER: &str = "user";

    /// Pending flash messages
    pub const FLASHES: &str = "flashes";
}

/// Session-stored identity of the logged-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}

/// Severity of a flash message, used as its CSS class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Info,
    Error,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

/// A one-shot notice shown on the next rendered page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: FlashLevel::Success, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { level: FlashLevel::Info, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: FlashLevel::Error, message: message.into() }
    }
}

/// Start an authenticated session for `user`
///
/// Whatever the browser's session held before is discarded and the session
/// id is rotated, so an id issued before login is useless afterwards.
pub async fn establish(session: &Session, user: &User) -> Result<SessionUser, tower_sessions::session::Error> {
    session.clear().await;
    session.cycle_id().await?;

    let session_user = SessionUser::from(user);
    session.insert(keys::USER, &session_user).await?;
    Ok(session_user)
}

/// The logged-in user, if any
pub async fn current_user(session: &Session) -> Result<Option<SessionUser>, tower_sessions::session::Error> {
    session.get::<SessionUser>(keys::USER).await
}

/// Drop the session entirely; a no-op for anonymous visitors
pub async fn end(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}

/// Queue a flash message for the next page render
pub async fn push_flash(session: &Session, flash: Flash) -> Result<(), tower_sessions::session::Error> {
    let mut flashes: Vec<Flash> = session.get(keys::FLASHES).await?.unwrap_or_default();
    flashes.push(flash);
    session.insert(keys::FLASHES, flashes).await
}

/// Remove and return all pending flash messages
pub async fn take_flashes(session: &Session) -> Result<Vec<Flash>, tower_sessions::session::Error> {
    Ok(session
        .remove::<Vec<Flash>>(keys::FLASHES)
        .await?
        .unwrap_or_default())
}
