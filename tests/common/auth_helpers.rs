//! Authentication test helpers
//!
//! Drive the real registration and login forms so the test server's cookie
//! jar ends up holding a logged-in session.

use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};

/// Test user credentials
pub struct TestUser {
    pub username: String,
    pub password: String,
}

impl TestUser {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

impl Default for TestUser {
    fn default() -> Self {
        Self::new("trailhead", "campfire42")
    }
}

/// Submit the registration form
pub async fn register(server: &TestServer, username: &str, password: &str, confirm: &str) -> TestResponse {
    server
        .post("/register")
        .form(&[
            ("username", username),
            ("password", password),
            ("confirm_password", confirm),
        ])
        .await
}

/// Submit the login form
pub async fn login(server: &TestServer, username: &str, password: &str) -> TestResponse {
    server
        .post("/login")
        .form(&[("username", username), ("password", password)])
        .await
}

/// The `Location` header of a redirect
pub fn location(response: &TestResponse) -> String {
    response
        .header("location")
        .to_str()
        .expect("Location header is not ASCII")
        .to_string()
}

/// Register `user` and log in, asserting both succeed
pub async fn register_and_login(server: &TestServer, user: &TestUser) {
    let response = register(server, &user.username, &user.password, &user.password).await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login", "registration failed");

    let response = login(server, &user.username, &user.password).await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/map", "login failed");
}
