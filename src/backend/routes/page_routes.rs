/**
 * Page Routes
 *
 * Server-rendered pages and the account form flows. Form POSTs answer with
 * a 303 redirect.
 */

use axum::{routing::get, Router};

use crate::backend::auth::{login, login_page, logout, register, register_page};
use crate::backend::pages::{index, map_page};
use crate::backend::server::state::AppState;

/// Configure page routes
pub fn configure_page_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(index))
        .route("/map", get(map_page))
        .route("/register", get(register_page).post(register))
        .route("/login", get(login_page).post(login))
        .route("/logout", get(logout))
}
