//! Student session management.
//!
//! ARCHITECTURE
//! ============
//! A successful login stores a random token in `sessions` and hands it to the
//! browser as an `HttpOnly` cookie. Every authenticated request resolves the
//! cookie back to a student row; expired rows never match.

use std::fmt::Write;

use rand::Rng;
use sqlx::{PgPool, Row};

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Student row returned from session validation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionStudent {
    pub id: i64,
    pub email: Option<String>,
    pub name: String,
    /// Name of the student's degree programme.
    pub degree_programme: String,
    pub degree_programme_id: i64,
}

impl SessionStudent {
    #[must_use]
    pub fn to_summary(&self) -> reviews::StudentSummary {
        reviews::StudentSummary {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            degree_programme: self.degree_programme.clone(),
        }
    }
}

/// Create a session for the given student, returning the token.
pub async fn create_session(pool: &PgPool, student_id: i64, ttl_hours: u32) -> Result<String, sqlx::Error> {
    let token = generate_token();
    sqlx::query(
        "INSERT INTO sessions (token, student_id, expires_at)
         VALUES ($1, $2, now() + make_interval(hours => $3))",
    )
    .bind(&token)
    .bind(student_id)
    .bind(i32::try_from(ttl_hours).unwrap_or(i32::MAX))
    .execute(pool)
    .await?;
    Ok(token)
}

/// Validate a session token and return the associated student.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<SessionStudent>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT s.id, s.email, s.name, d.id AS degree_programme_id, d.name AS degree_programme
          FROM sessions t
          JOIN students s ON s.id = t.student_id
          JOIN degree_programmes d ON d.id = s.degree_programme_id
          WHERE t.token = $1 AND t.expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| SessionStudent {
        id: r.get("id"),
        email: r.get("email"),
        name: r.get("name"),
        degree_programme: r.get("degree_programme"),
        degree_programme_id: r.get("degree_programme_id"),
    }))
}

/// Delete a session by token.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
