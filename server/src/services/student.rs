//! Student profile service: view, edit, and password change.
//!
//! Students may only touch their own row; the id always comes from the
//! session, never from the request.

use reviews::form::FieldError;
use reviews::{FieldErrors, Gender, PasswordForm, ProfileForm, StudentProfile};
use sqlx::PgPool;

use super::auth::hash_password;

#[derive(Debug, thiserror::Error)]
pub enum StudentError {
    #[error("student not found: {0}")]
    NotFound(i64),
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: i64,
    email: Option<String>,
    name: String,
    gender: i16,
    age: i32,
    entry_date: String,
    degree_programme: String,
}

impl ProfileRow {
    fn into_profile(self) -> Option<StudentProfile> {
        Some(StudentProfile {
            id: self.id,
            email: self.email,
            name: self.name,
            gender: Gender::from_code(self.gender)?,
            age: self.age,
            entry_date: self.entry_date,
            degree_programme: self.degree_programme,
        })
    }
}

/// Load the profile page data for `student_id`.
///
/// # Errors
///
/// [`StudentError::NotFound`] if the row is gone or carries an unknown
/// gender code; [`StudentError::Database`] on query failure.
pub async fn load_profile(pool: &PgPool, student_id: i64) -> Result<StudentProfile, StudentError> {
    let row = sqlx::query_as::<_, ProfileRow>(
        r"SELECT s.id, s.email, s.name, s.gender, s.age,
                 to_char(s.entry_date, 'YYYY-MM-DD') AS entry_date,
                 d.name AS degree_programme
          FROM students s
          JOIN degree_programmes d ON d.id = s.degree_programme_id
          WHERE s.id = $1",
    )
    .bind(student_id)
    .fetch_optional(pool)
    .await?;

    row.and_then(ProfileRow::into_profile)
        .ok_or(StudentError::NotFound(student_id))
}

/// Validate and save name, gender and age, returning the refreshed profile.
///
/// # Errors
///
/// [`StudentError::Invalid`] with per-field messages, otherwise as
/// [`load_profile`].
pub async fn update_profile(pool: &PgPool, student_id: i64, form: &ProfileForm) -> Result<StudentProfile, StudentError> {
    let valid = form.validate().map_err(StudentError::Invalid)?;

    let updated = sqlx::query("UPDATE students SET name = $2, gender = $3, age = $4 WHERE id = $1")
        .bind(student_id)
        .bind(&valid.name)
        .bind(valid.gender.code())
        .bind(valid.age)
        .execute(pool)
        .await?
        .rows_affected();
    if updated == 0 {
        return Err(StudentError::NotFound(student_id));
    }

    tracing::info!(student_id, "profile updated");
    load_profile(pool, student_id).await
}

/// Field errors for a new password hash that equals the stored one.
pub(crate) fn unchanged_password_errors() -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.insert("password".to_owned(), vec![FieldError::PasswordUnchanged.to_string()]);
    errors
}

/// Replace the student's password after checking the form and that the new
/// password differs from the current one.
///
/// # Errors
///
/// [`StudentError::Invalid`] for form problems or an unchanged password,
/// [`StudentError::NotFound`] for a missing row, [`StudentError::Database`]
/// on query failure.
pub async fn change_password(pool: &PgPool, student_id: i64, form: &PasswordForm) -> Result<(), StudentError> {
    let password = form.validate().map_err(StudentError::Invalid)?;
    let new_hash = hash_password(password);

    let current: Option<String> = sqlx::query_scalar("SELECT password_hash FROM students WHERE id = $1")
        .bind(student_id)
        .fetch_optional(pool)
        .await?;
    let current = current.ok_or(StudentError::NotFound(student_id))?;
    if current.trim_end() == new_hash {
        return Err(StudentError::Invalid(unchanged_password_errors()));
    }

    sqlx::query("UPDATE students SET password_hash = $2 WHERE id = $1")
        .bind(student_id)
        .bind(&new_hash)
        .execute(pool)
        .await?;

    tracing::info!(student_id, "password changed");
    Ok(())
}

#[cfg(test)]
#[path = "student_test.rs"]
mod tests;
