//! JSON envelope returned by the comment endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Field name -> ordered validation messages for that field.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Message sent when the student already reviewed the course.
pub const ALREADY_COMMENTED: &str = "You have already commented";

/// `{ "status": bool, "error"?: { field: [msg, ..] }, "tips"?: msg }`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentResponse {
    pub status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<FieldErrors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,
}

impl CommentResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self { status: true, error: None, tips: None }
    }

    #[must_use]
    pub fn invalid(errors: FieldErrors) -> Self {
        Self { status: false, error: Some(errors), tips: None }
    }

    #[must_use]
    pub fn already_commented() -> Self {
        Self { status: false, error: None, tips: Some(ALREADY_COMMENTED.to_owned()) }
    }

    /// First message of every field that has one. Fields with an empty list
    /// are skipped.
    pub fn first_errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.error
            .iter()
            .flatten()
            .filter_map(|(field, messages)| messages.first().map(|m| (field.as_str(), m.as_str())))
    }
}

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;
