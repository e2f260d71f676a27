/**
 * Registration Handlers
 *
 * `GET /register` renders the form; `POST /register` applies the account
 * rules and redirects: to `/login` on success, back to `/register` with a
 * flash message on failure.
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, State},
    response::{Html, Redirect},
    Form,
};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::backend::auth::handlers::types::{RegisterForm, UNREADABLE_FORM_MESSAGE};
use crate::backend::auth::service;
use crate::backend::auth::sessions::{push_flash, Flash};
use crate::backend::error::BackendError;
use crate::backend::pages::{templates, PageContext};
use crate::shared::AppConfig;

/// Render the registration form
pub async fn register_page(session: Session) -> Result<Html<String>, BackendError> {
    let context = PageContext::load(&session).await?;
    Ok(Html(templates::register_page(&context)))
}

/// Handle a registration form submission
pub async fn register(
    State(pool): State<SqlitePool>,
    State(config): State<Arc<AppConfig>>,
    session: Session,
    form: Result<Form<RegisterForm>, FormRejection>,
) -> Result<Redirect, BackendError> {
    let Ok(Form(form)) = form.inspect_err(|rejection| {
        tracing::warn!("Unreadable registration form: {}", rejection.body_text());
    }) else {
        push_flash(&session, Flash::error(UNREADABLE_FORM_MESSAGE)).await?;
        return Ok(Redirect::to("/register"));
    };
    tracing::info!("Registration request for username: {}", form.username.trim());

    match service::register(&pool, &form, config.password_cost).await {
        Ok(user) => {
            tracing::info!("User created successfully: {} (id {})", user.username, user.id);
            push_flash(&session, Flash::success("Registration successful! Please log in.")).await?;
            Ok(Redirect::to("/login"))
        }
        Err(e) => {
            if e.is_internal() {
                tracing::error!("Registration failed: {:?}", e);
            } else {
                tracing::warn!("Registration rejected for {}: {}", form.username.trim(), e);
            }
            push_flash(&session, Flash::error(e.user_message())).await?;
            Ok(Redirect::to("/register"))
        }
    }
}
