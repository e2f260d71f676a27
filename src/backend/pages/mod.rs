//! Pages Module
//!
//! Server-rendered HTML: the landing page, the map, and the account forms.
//! Markup is built with `format!` in `templates`; every interpolated value
//! goes through `escape_html` first.
//!
//! # Module Structure
//!
//! ```text
//! pages/
//! ├── mod.rs       - PageContext and the index/map handlers
//! └── templates.rs - HTML rendering
//! ```

/// HTML rendering
pub mod templates;

use axum::response::Html;
use tower_sessions::Session;

use crate::backend::auth::sessions::{current_user, take_flashes, Flash, SessionUser};
use crate::backend::error::BackendError;

/// Per-request data every page needs: who is logged in and which flash
/// messages are waiting
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageContext {
    pub user: Option<SessionUser>,
    pub flashes: Vec<Flash>,
}

impl PageContext {
    /// Read the session, consuming pending flash messages
    pub async fn load(session: &Session) -> Result<Self, BackendError> {
        let user = current_user(session).await?;
        let flashes = take_flashes(session).await?;
        Ok(Self { user, flashes })
    }
}

/// `GET /`
pub async fn index(session: Session) -> Result<Html<String>, BackendError> {
    let context = PageContext::load(&session).await?;
    Ok(Html(templates::index_page(&context)))
}

/// `GET /map`
pub async fn map_page(session: Session) -> Result<Html<String>, BackendError> {
    let context = PageContext::load(&session).await?;
    Ok(Html(templates::map_page(&context)))
}
