//! Authentication integration tests
//!
//! Registration, login and logout through the HTML form flows, observed
//! through redirects, flash messages and `/api/me`.

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::assert_contains;
use crate::common::{location, login, register, register_and_login, TestApp, TestUser};

async fn me(app: &TestApp) -> Value {
    let response = app.server.get("/api/me").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json::<Value>()
}

#[tokio::test]
async fn test_anonymous_me() {
    let app = TestApp::spawn().await;
    assert_eq!(me(&app).await, json!({ "authenticated": false, "username": null }));
}

#[tokio::test]
async fn test_register_then_login() {
    let app = TestApp::spawn().await;

    let response = register(&app.server, "alice", "secret1", "secret1").await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");

    let page = app.server.get("/login").await.text();
    assert_contains!(page, "Registration successful! Please log in.");

    let response = login(&app.server, "alice", "secret1").await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/map");

    assert_eq!(me(&app).await, json!({ "authenticated": true, "username": "alice" }));

    let page = app.server.get("/map").await.text();
    assert_contains!(page, "Welcome back, alice!");
    assert_contains!(page, "Signed in as alice");
}

#[tokio::test]
async fn test_short_username_is_rejected() {
    let app = TestApp::spawn().await;

    let response = register(&app.server, "bob", "secret1", "secret1").await;
    assert_eq!(location(&response), "/register");
    assert_eq!(app.user_count("bob").await, 0);

    let page = app.server.get("/register").await.text();
    assert_contains!(page, "Username must be at least 4 characters long.");
}

#[tokio::test]
async fn test_password_rules() {
    let app = TestApp::spawn().await;

    register(&app.server, "alice", "12345", "12345").await;
    let page = app.server.get("/register").await.text();
    assert_contains!(page, "Password must be at least 6 characters long.");

    register(&app.server, "alice", "secret1", "secret2").await;
    let page = app.server.get("/register").await.text();
    assert_contains!(page, "Passwords do not match.");

    assert_eq!(app.user_count("alice").await, 0);
}

#[tokio::test]
async fn test_duplicate_username() {
    let app = TestApp::spawn().await;

    register(&app.server, "alice", "secret1", "secret1").await;
    let response = register(&app.server, "alice", "another1", "another1").await;

    assert_eq!(location(&response), "/register");
    assert_eq!(app.user_count("alice").await, 1);

    let page = app.server.get("/register").await.text();
    assert_contains!(page, "Username already exists. Please choose a different one.");
}

#[tokio::test]
async fn test_wrong_password_and_unknown_user_look_the_same() {
    let app = TestApp::spawn().await;
    register(&app.server, "alice", "secret1", "secret1").await;
    // Consume the registration flash
    app.server.get("/login").await;

    let wrong = login(&app.server, "alice", "wrong").await;
    assert_eq!(location(&wrong), "/login");
    let wrong_page = app.server.get("/login").await.text();

    let unknown = login(&app.server, "nonexistent", "x").await;
    assert_eq!(location(&unknown), "/login");
    let unknown_page = app.server.get("/login").await.text();

    assert_contains!(wrong_page, "Invalid username or password.");
    assert_eq!(wrong_page, unknown_page);
    assert_eq!(me(&app).await["authenticated"], json!(false));
}

#[tokio::test]
async fn test_logout_ends_session() {
    let app = TestApp::spawn().await;
    register_and_login(&app.server, &TestUser::default()).await;
    assert_eq!(me(&app).await["authenticated"], json!(true));

    let response = app.server.get("/logout").await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let home = app.server.get("/").await.text();
    assert_contains!(home, "You have been logged out.");
    assert_eq!(me(&app).await["authenticated"], json!(false));

    let response = app
        .server
        .post("/api/camping_spots")
        .json(&json!({ "name": "After logout" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_without_session() {
    let app = TestApp::spawn().await;

    let response = app.server.get("/logout").await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_unreadable_login_form_is_flashed() {
    let app = TestApp::spawn().await;

    let response = app
        .server
        .post("/login")
        .json(&json!({ "username": "alice", "password": "secret1" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    let page = app.server.get("/login").await.text();
    assert_contains!(page, "That form could not be read. Please try again.");
}

#[tokio::test]
async fn test_unreadable_registration_form_is_flashed() {
    let app = TestApp::spawn().await;

    let response = app
        .server
        .post("/register")
        .text("username=alice&username=bobby&password=secret1&confirm_password=secret1")
        .content_type("application/x-www-form-urlencoded")
        .await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/register");
    assert_eq!(app.user_count("alice").await, 0);
    let page = app.server.get("/register").await.text();
    assert_contains!(page, "That form could not be read. Please try again.");
}
