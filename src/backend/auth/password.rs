/**
 * Password Hashing
 *
 * bcrypt hashing and verification. bcrypt is deliberately slow, so both
 * operations run on tokio's blocking pool instead of an executor thread.
 * The stored string carries its own salt and cost (`$2b$12$...`).
 */

use crate::backend::error::AuthError;

/// Hash a password with the given bcrypt cost
pub async fn hash_password(password: &str, cost: u32) -> Result<String, AuthError> {
    let password = password.to_owned();
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hash)
}

/// Check a password against a stored bcrypt hash
///
/// A malformed stored hash is an error, not a mismatch.
pub async fn verify_password(password: &str, password_hash: &str) -> Result<bool, AuthError> {
    let password = password.to_owned();
    let password_hash = password_hash.to_owned();
    let valid =
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash)).await??;
    Ok(valid)
}
