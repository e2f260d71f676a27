/**
 * Registration and Login
 *
 * The account rules, independent of HTTP: handlers call these functions and
 * decide how to present the outcome.
 *
 * # Registration Rules
 *
 * Checked in this order, first failure wins:
 *
 * 1. Username (trimmed) is at least 4 characters
 * 2. Password is at least 6 characters
 * 3. Password and confirmation match
 * 4. Username is not taken
 *
 * # Login
 *
 * An unknown username and a wrong password produce the same
 * `AuthError::InvalidCredentials`. The unknown-user path verifies against a
 * placeholder hash of the configured cost, so both take about as long.
 */

use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{LoginForm, RegisterForm};
use crate::backend::auth::password::{hash_password, verify_password};
use crate::backend::auth::users::{create_user, get_user_by_username, is_unique_violation, User};
use crate::backend::error::AuthError;

/// Minimum username length, in characters
pub const MIN_USERNAME_LEN: usize = 4;

/// Minimum password length, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

/// Salt and digest of a placeholder bcrypt hash; it matches no password in use
const PLACEHOLDER_HASH_TAIL: &str = "CCCCCCCCCCCCCCCCCCCCC.E5YPO9kmyuRGyh0XouQYb4YMJKvyOeW";

/// A well-formed bcrypt hash at `cost` that no stored account uses
fn placeholder_hash(cost: u32) -> String {
    format!("$2b${:02}${}", cost, PLACEHOLDER_HASH_TAIL)
}

/// Check the form-level registration rules (1-3) without touching the store
pub fn validate_registration(form: &RegisterForm) -> Result<(), AuthError> {
    if form.username.trim().chars().count() < MIN_USERNAME_LEN {
        return Err(AuthError::UsernameTooShort { min: MIN_USERNAME_LEN });
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::PasswordTooShort { min: MIN_PASSWORD_LEN });
    }
    if form.password != form.confirm_password {
        return Err(AuthError::PasswordMismatch);
    }
    Ok(())
}

/// Register a new account
///
/// Only a bcrypt hash of the password is stored. A concurrent registration
/// of the same name that slips past the lookup is caught by the UNIQUE
/// constraint and reported as `UsernameTaken` as well.
pub async fn register(
    pool: &SqlitePool,
    form: &RegisterForm,
    password_cost: u32,
) -> Result<User, AuthError> {
    validate_registration(form)?;
    let username = form.username.trim();

    if get_user_by_username(pool, username).await?.is_some() {
        return Err(AuthError::UsernameTaken);
    }

    let password_hash = hash_password(&form.password, password_cost).await?;

    create_user(pool, username, &password_hash)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AuthError::UsernameTaken
            } else {
                AuthError::Database(e)
            }
        })
}

/// Check credentials and return the matching user
///
/// `password_cost` is the cost new hashes are created with; an unknown
/// username is verified against a placeholder hash of that cost.
pub async fn authenticate(
    pool: &SqlitePool,
    form: &LoginForm,
    password_cost: u32,
) -> Result<User, AuthError> {
    let Some(user) = get_user_by_username(pool, form.username.trim()).await? else {
        verify_password(&form.password, &placeholder_hash(password_cost)).await?;
        return Err(AuthError::InvalidCredentials);
    };

    if !verify_password(&form.password, &user.password_hash).await? {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(user)
}
