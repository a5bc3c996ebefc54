//! The course comment form: field set, URL encoding, and server-side checks.
//!
//! DESIGN
//! ======
//! Field values travel as the raw strings typed into the dialog. Parsing and
//! range checks happen only on the server, which reports failures per field
//! using the same wording the original site used so existing templates and
//! users see familiar messages.

use serde::{Deserialize, Serialize};

use crate::response::FieldErrors;

/// Lowest accepted score.
pub const SCORE_MIN: i32 = 1;
/// Highest accepted score.
pub const SCORE_MAX: i32 = 10;
/// Maximum comment length in characters, counted after trimming.
pub const COMMENT_MAX_CHARS: usize = 300;

/// The five score fields, in display order.
pub const SCORE_FIELDS: [&str; 5] = [
    "overall_score",
    "easiness_score",
    "interest_score",
    "usefulness_score",
    "teaching_score",
];

/// Every field of the form, in display and encoding order.
pub const FIELDS: [&str; 6] = [
    "overall_score",
    "easiness_score",
    "interest_score",
    "usefulness_score",
    "teaching_score",
    "comment",
];

/// Whether `field` is one of the 1..=10 score inputs.
#[must_use]
pub fn is_score_field(field: &str) -> bool {
    SCORE_FIELDS.contains(&field)
}

/// Human label for a form field.
#[must_use]
pub fn field_label(field: &str) -> &'static str {
    match field {
        "overall_score" => "Overall Score",
        "easiness_score" => "Easiness Score",
        "interest_score" => "Interest Score",
        "usefulness_score" => "Usefulness Score",
        "teaching_score" => "Teaching Score",
        "comment" => "Comment",
        _ => "",
    }
}

/// Why a single field was rejected. `Display` yields the message shown next
/// to the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("This field is required.")]
    Required,
    #[error("Enter a whole number.")]
    NotInteger,
    #[error("Ensure this value is greater than or equal to {0}.")]
    BelowMin(i32),
    #[error("Ensure this value is less than or equal to {0}.")]
    AboveMax(i32),
    #[error("Ensure this value has at most {max} characters (it has {actual}).")]
    TooLong { max: usize, actual: usize },
    #[error("Select a valid choice. {0} is not one of the available choices.")]
    InvalidChoice(String),
    #[error("The new password should not be the same as the old one.")]
    PasswordUnchanged,
    #[error("The confirm password does not match the password.")]
    PasswordMismatch,
}

/// Raw comment form contents as serialized by the browser.
///
/// Missing keys decode as empty strings so the server can answer with
/// "required" errors instead of rejecting the body outright.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentForm {
    pub overall_score: String,
    pub easiness_score: String,
    pub interest_score: String,
    pub usefulness_score: String,
    pub teaching_score: String,
    pub comment: String,
}

/// A form that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidReview {
    pub overall_score: i32,
    pub easiness_score: i32,
    pub interest_score: i32,
    pub usefulness_score: i32,
    pub teaching_score: i32,
    pub comment: String,
}

impl CommentForm {
    /// Current value of `field`, or `None` for names outside [`FIELDS`].
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        let value = match field {
            "overall_score" => &self.overall_score,
            "easiness_score" => &self.easiness_score,
            "interest_score" => &self.interest_score,
            "usefulness_score" => &self.usefulness_score,
            "teaching_score" => &self.teaching_score,
            "comment" => &self.comment,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Overwrite `field`. Returns `false` when the name is unknown.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        let slot = match field {
            "overall_score" => &mut self.overall_score,
            "easiness_score" => &mut self.easiness_score,
            "interest_score" => &mut self.interest_score,
            "usefulness_score" => &mut self.usefulness_score,
            "teaching_score" => &mut self.teaching_score,
            "comment" => &mut self.comment,
            _ => return false,
        };
        *slot = value.into();
        true
    }

    /// Clear every field back to empty.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        FIELDS
            .iter()
            .all(|f| self.get(f).is_none_or(str::is_empty))
    }

    /// Encode as an `application/x-www-form-urlencoded` body.
    #[must_use]
    pub fn encode(&self) -> String {
        FIELDS
            .iter()
            .map(|f| format!("{f}={}", urlencoding::encode(self.get(f).unwrap_or_default())))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Check every field, collecting all failures rather than stopping at the first.
    ///
    /// # Errors
    ///
    /// Returns the per-field messages when any field is rejected.
    pub fn validate(&self) -> Result<ValidReview, FieldErrors> {
        let mut errors = FieldErrors::new();
        let mut scores = [0_i32; SCORE_FIELDS.len()];

        for (slot, field) in scores.iter_mut().zip(SCORE_FIELDS) {
            match parse_score(self.get(field).unwrap_or_default()) {
                Ok(v) => *slot = v,
                Err(e) => {
                    errors.insert(field.to_owned(), vec![e.to_string()]);
                }
            }
        }

        let comment = match parse_comment(&self.comment) {
            Ok(c) => c,
            Err(e) => {
                errors.insert("comment".to_owned(), vec![e.to_string()]);
                String::new()
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        let [overall_score, easiness_score, interest_score, usefulness_score, teaching_score] = scores;
        Ok(ValidReview { overall_score, easiness_score, interest_score, usefulness_score, teaching_score, comment })
    }
}

/// Parse a whole number the way the site's integer inputs do: surrounding
/// whitespace and a trailing `.0` are accepted. Values wider than `i64`
/// saturate by sign so the caller's range check still reports the right bound.
pub(crate) fn parse_integer(raw: &str) -> Result<i64, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required);
    }

    let integral = match trimmed.split_once('.') {
        Some((int_part, frac)) if frac.chars().all(|c| c == '0') => int_part,
        Some(_) => return Err(FieldError::NotInteger),
        None => trimmed,
    };
    let digits = integral.strip_prefix(['+', '-']).unwrap_or(integral);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::NotInteger);
    }
    Ok(integral
        .parse::<i64>()
        .unwrap_or(if integral.starts_with('-') { i64::MIN } else { i64::MAX }))
}

/// Check `value` against an inclusive range, reporting the violated bound.
pub(crate) fn check_range(value: i64, min: i32, max: i32) -> Result<i32, FieldError> {
    if value < i64::from(min) {
        return Err(FieldError::BelowMin(min));
    }
    if value > i64::from(max) {
        return Err(FieldError::AboveMax(max));
    }
    Ok(i32::try_from(value).unwrap_or(max))
}

/// Parse one score input into `SCORE_MIN..=SCORE_MAX`.
pub(crate) fn parse_score(raw: &str) -> Result<i32, FieldError> {
    check_range(parse_integer(raw)?, SCORE_MIN, SCORE_MAX)
}

/// Reject blank input and anything longer than `max` characters.
pub(crate) fn parse_text(raw: &str, max: usize) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required);
    }
    let actual = trimmed.chars().count();
    if actual > max {
        return Err(FieldError::TooLong { max, actual });
    }
    Ok(trimmed.to_owned())
}

pub(crate) fn parse_comment(raw: &str) -> Result<String, FieldError> {
    parse_text(raw, COMMENT_MAX_CHARS)
}

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;
