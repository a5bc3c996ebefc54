//! Shared comment-form schema for the course review flow.
//!
//! This crate owns the wire representation used by both `server` and `client`:
//! the URL-encoded comment form posted to `/student/addcomment/`, the JSON
//! envelope the endpoint answers with, and the paging math behind every list
//! view, plus the student profile and password forms. Validation lives here
//! too so the server and its tests agree on the exact error strings the
//! browser ends up showing.

pub mod form;
pub mod listing;
pub mod page;
pub mod profile;
pub mod response;

pub use form::{CommentForm, FieldError, ValidReview};
pub use listing::{CourseSummary, Paged, ReviewSummary, StudentSummary};
pub use page::{PAGE_SIZE, Pagination};
pub use profile::{Gender, PasswordForm, ProfileForm, StudentProfile, ValidProfile};
pub use response::{CommentResponse, FieldErrors};

/// Path of the comment endpoint, without the query string.
pub const ADD_COMMENT_PATH: &str = "/student/addcomment/";

/// Full request target for commenting on `course_id`.
#[must_use]
pub fn add_comment_url(course_id: i64) -> String {
    format!("{ADD_COMMENT_PATH}?uid={course_id}")
}

/// DOM id of the input rendering `field`. The inline error label is the
/// element immediately after it.
#[must_use]
pub fn input_id(field: &str) -> String {
    format!("id_{field}")
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;
