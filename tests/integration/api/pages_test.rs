//! Page integration tests
//!
//! Rendered HTML, static files and the 404 fallback.

use axum::http::StatusCode;

use crate::assert_contains;
use crate::common::{register_and_login, TestApp, TestUser};

#[tokio::test]
async fn test_home_page() {
    let app = TestApp::spawn().await;

    let response = app.server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_contains!(response.header("content-type").to_str().unwrap(), "text/html");
    let html = response.text();
    assert_contains!(html, "Free Camping Map");
    assert_contains!(html, r#"href="/register""#);
}

#[tokio::test]
async fn test_map_page_for_anonymous_visitor() {
    let app = TestApp::spawn().await;

    let html = app.server.get("/map").await.text();

    assert_contains!(html, r#"<div id="map"></div>"#);
    assert_contains!(html, r#"<select id="state-filter">"#);
    assert_contains!(html, r#"<option value="CO">Colorado</option>"#);
    assert_contains!(html, "/static/js/script.js");
    assert!(!html.contains("add-spot-form"));
}

#[tokio::test]
async fn test_map_page_for_logged_in_user() {
    let app = TestApp::spawn().await;
    register_and_login(&app.server, &TestUser::default()).await;

    let html = app.server.get("/map").await.text();

    assert_contains!(html, r#"<form id="add-spot-form">"#);
    assert_contains!(html, r#"href="/logout""#);
}

#[tokio::test]
async fn test_account_forms() {
    let app = TestApp::spawn().await;

    let register = app.server.get("/register").await.text();
    assert_contains!(register, r#"<form method="post" action="/register">"#);
    assert_contains!(register, r#"name="confirm_password""#);

    let login = app.server.get("/login").await.text();
    assert_contains!(login, r#"<form method="post" action="/login">"#);
}

#[tokio::test]
async fn test_static_files_are_served() {
    let app = TestApp::spawn().await;

    let script = app.server.get("/static/js/script.js").await;
    assert_eq!(script.status_code(), StatusCode::OK);
    assert_contains!(script.text(), "fetchCampingSpots");

    let style = app.server.get("/static/css/style.css").await;
    assert_eq!(style.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let app = TestApp::spawn().await;

    let response = app.server.get("/no/such/page").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
