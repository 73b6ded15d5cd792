//! # Authentication Module
//!
//! Password hashing and credential checks for clinic accounts. Passwords are
//! stored as Argon2 hashes in PHC string format; the plain text never reaches
//! the database.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use clinicdesk_db::{models::DbUser, repositories::user, DbPool};
use eyre::{eyre, Result};

/// Hashes a password using the Argon2 algorithm
///
/// A fresh random salt is generated for every call, so hashing the same
/// password twice gives two different strings.
///
/// # Example
///
/// ```rust
/// use clinicdesk_api::middleware::auth::{hash_password, verify_password};
///
/// let hashed = hash_password("doctor_password").unwrap();
/// assert!(verify_password("doctor_password", &hashed).unwrap());
/// ```
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Checks `password` against a stored PHC hash.
///
/// A mismatch is `Ok(false)`; only an unreadable hash is an error.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool> {
    let parsed_hash =
        PasswordHash::new(password_hash).map_err(|e| eyre!("Invalid password hash: {}", e))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Looks up `username` and verifies the password.
///
/// Returns `None` both for unknown users and wrong passwords so callers
/// cannot tell the two apart.
pub async fn authenticate(pool: &DbPool, username: &str, password: &str) -> Result<Option<DbUser>> {
    let Some(account) = user::find_by_username(pool, username).await? else {
        tracing::debug!("Login attempt for unknown user");
        return Ok(None);
    };

    if verify_password(password, &account.password_hash)? {
        Ok(Some(account))
    } else {
        tracing::debug!("Password mismatch for user_id={}", account.user_id);
        Ok(None)
    }
}
