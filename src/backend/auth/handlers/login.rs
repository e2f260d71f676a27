/**
 * Login Handlers
 *
 * `GET /login` renders the form; `POST /login` checks the credentials and,
 * on success, starts a fresh session and redirects to the map.
 *
 * # Security
 *
 * - Unknown user and wrong password give the same flash message, and both
 *   pay for a bcrypt verification
 * - The session id is rotated on login
 * - Passwords are never logged
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, State},
    response::{Html, Redirect},
    Form,
};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::backend::auth::handlers::types::{LoginForm, UNREADABLE_FORM_MESSAGE};
use crate::backend::auth::service;
use crate::backend::auth::sessions::{establish, push_flash, Flash};
use crate::backend::error::BackendError;
use crate::backend::pages::{templates, PageContext};
use crate::shared::AppConfig;

/// Render the login form
pub async fn login_page(session: Session) -> Result<Html<String>, BackendError> {
    let context = PageContext::load(&session).await?;
    Ok(Html(templates::login_page(&context)))
}

/// Handle a login form submission
pub async fn login(
    State(pool): State<SqlitePool>,
    State(config): State<Arc<AppConfig>>,
    session: Session,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Redirect, BackendError> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::warn!("Unreadable login form: {}", rejection.body_text());
            push_flash(&session, Flash::error(UNREADABLE_FORM_MESSAGE)).await?;
            return Ok(Redirect::to("/login"));
        }
    };
    tracing::info!("Login request for: {}", form.username.trim());

    match service::authenticate(&pool, &form, config.password_cost).await {
        Ok(user) => {
            let session_user = establish(&session, &user).await?;
            tracing::info!("User logged in successfully: {}", session_user.username);
            push_flash(
                &session,
                Flash::success(format!("Welcome back, {}!", session_user.username)),
            )
            .await?;
            Ok(Redirect::to("/map"))
        }
        Err(e) => {
            if e.is_internal() {
                tracing::error!("Login failed: {:?}", e);
            } else {
                tracing::warn!("Rejected login for {}", form.username.trim());
            }
            push_flash(&session, Flash::error(e.user_message())).await?;
            Ok(Redirect::to("/login"))
        }
    }
}
