//! Student credential checks.
//!
//! Passwords are stored as SHA-256 hex digests; login compares the digest of
//! the submitted password against the stored one for the normalized email.

use sha2::{Digest, Sha256};
use sqlx::PgPool;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("password is required")]
    MissingPassword,
    #[error("Incorrect email or password")]
    BadCredentials,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some(normalized)
}

#[must_use]
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    super::session::bytes_to_hex(&hasher.finalize())
}

/// Resolve a student id from email + password.
///
/// # Errors
///
/// Returns [`AuthError::BadCredentials`] when no student matches, and input
/// errors before touching the database.
pub async fn authenticate(pool: &PgPool, email: &str, password: &str) -> Result<i64, AuthError> {
    let email = normalize_email(email).ok_or(AuthError::InvalidEmail)?;
    if password.is_empty() {
        return Err(AuthError::MissingPassword);
    }

    let student_id: Option<i64> =
        sqlx::query_scalar("SELECT id FROM students WHERE lower(email) = $1 AND password_hash = $2")
            .bind(&email)
            .bind(hash_password(password))
            .fetch_optional(pool)
            .await?;

    student_id.ok_or(AuthError::BadCredentials)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
