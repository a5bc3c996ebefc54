//! Student profile: the read-only info view, the editable subset, and the
//! password change form.
//!
//! DESIGN
//! ======
//! Only name, gender and age are editable; email, entry date and degree
//! programme are fixed at registration. Both forms arrive as raw strings and
//! are validated here so server and client agree on the messages. Whether a
//! new password differs from the stored one needs the stored hash, so that
//! check is left to the server (it reports [`FieldError::PasswordUnchanged`]).

use serde::{Deserialize, Serialize};

use crate::form::{FieldError, check_range, parse_integer, parse_text};
use crate::response::FieldErrors;

pub const NAME_MAX_CHARS: usize = 32;
pub const PASSWORD_MAX_CHARS: usize = 64;

/// Editable profile fields in form order.
pub const PROFILE_FIELDS: [&str; 3] = ["name", "gender", "age"];

/// Password form fields in form order.
pub const PASSWORD_FIELDS: [&str; 2] = ["password", "confirm_password"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Every choice with its stored code, in display order.
    pub const CHOICES: [Self; 2] = [Self::Male, Self::Female];

    /// Stored `SMALLINT` code.
    #[must_use]
    pub fn code(self) -> i16 {
        match self {
            Self::Male => 1,
            Self::Female => 2,
        }
    }

    #[must_use]
    pub fn from_code(code: i16) -> Option<Self> {
        Self::CHOICES.into_iter().find(|g| g.code() == code)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Everything the profile page shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: i64,
    pub email: Option<String>,
    pub name: String,
    pub gender: Gender,
    pub age: i32,
    /// `YYYY-MM-DD`.
    pub entry_date: String,
    pub degree_programme: String,
}

/// Raw edit form. `gender` carries the choice code (`"1"` / `"2"`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub name: String,
    pub gender: String,
    pub age: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidProfile {
    pub name: String,
    pub gender: Gender,
    pub age: i32,
}

impl ProfileForm {
    /// Prefill from the current profile.
    #[must_use]
    pub fn from_profile(profile: &StudentProfile) -> Self {
        Self {
            name: profile.name.clone(),
            gender: profile.gender.code().to_string(),
            age: profile.age.to_string(),
        }
    }

    /// # Errors
    ///
    /// Returns the per-field messages when any field is rejected.
    pub fn validate(&self) -> Result<ValidProfile, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = collect(&mut errors, "name", parse_text(&self.name, NAME_MAX_CHARS));
        let gender = collect(&mut errors, "gender", parse_gender(&self.gender));
        let age = collect(
            &mut errors,
            "age",
            parse_integer(&self.age).and_then(|v| check_range(v, i32::MIN, i32::MAX)),
        );

        match (name, gender, age) {
            (Some(name), Some(gender), Some(age)) if errors.is_empty() => Ok(ValidProfile { name, gender, age }),
            _ => Err(errors),
        }
    }
}

/// Raw password change form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordForm {
    pub password: String,
    pub confirm_password: String,
}

impl PasswordForm {
    /// Check presence, length and that both entries match. Passwords are
    /// compared as typed, without trimming.
    ///
    /// # Errors
    ///
    /// Returns the per-field messages when any field is rejected.
    pub fn validate(&self) -> Result<&str, FieldErrors> {
        let mut errors = FieldErrors::new();
        let password = collect(&mut errors, "password", check_password(&self.password));
        let confirm = collect(&mut errors, "confirm_password", required(&self.confirm_password));

        if let (Some(password), Some(confirm)) = (password, confirm) {
            if password != confirm {
                errors.insert("confirm_password".to_owned(), vec![FieldError::PasswordMismatch.to_string()]);
            }
        }
        if errors.is_empty() { Ok(&self.password) } else { Err(errors) }
    }
}

fn collect<T>(errors: &mut FieldErrors, field: &str, result: Result<T, FieldError>) -> Option<T> {
    result
        .map_err(|e| {
            errors.insert(field.to_owned(), vec![e.to_string()]);
        })
        .ok()
}

fn required(raw: &str) -> Result<&str, FieldError> {
    if raw.is_empty() { Err(FieldError::Required) } else { Ok(raw) }
}

fn check_password(raw: &str) -> Result<&str, FieldError> {
    let raw = required(raw)?;
    let actual = raw.chars().count();
    if actual > PASSWORD_MAX_CHARS {
        return Err(FieldError::TooLong { max: PASSWORD_MAX_CHARS, actual });
    }
    Ok(raw)
}

pub(crate) fn parse_gender(raw: &str) -> Result<Gender, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required);
    }
    trimmed
        .parse::<i16>()
        .ok()
        .and_then(Gender::from_code)
        .ok_or_else(|| FieldError::InvalidChoice(trimmed.to_owned()))
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;
