/**
 * Authentication Handler Types
 *
 * Form bodies posted by the register and login pages, and the JSON body of
 * `GET /api/me`. Missing form fields deserialize as empty strings so they
 * fail the account rules with a readable message instead of a bare 422.
 */

use serde::{Deserialize, Serialize};

/// Flash shown when a form body cannot be decoded at all
pub const UNREADABLE_FORM_MESSAGE: &str = "That form could not be read. Please try again.";

/// Registration form (`POST /register`)
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct RegisterForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

/// Login form (`POST /login`)
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Current session as seen by the client script
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MeResponse {
    pub authenticated: bool,
    pub username: Option<String>,
}
