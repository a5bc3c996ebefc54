//! List DTOs returned by the JSON read endpoints.

use serde::{Deserialize, Serialize};

use crate::page::Pagination;

/// One page of items plus the paging state used to render navigation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// A course on the student's degree programme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub id: i64,
    pub name: String,
    /// Whether the current student already reviewed this course.
    pub is_commented: bool,
}

/// A review written by the current student.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub id: i64,
    pub course_id: i64,
    pub course_name: String,
    pub overall_score: i32,
    pub easiness_score: i32,
    pub interest_score: i32,
    pub usefulness_score: i32,
    pub teaching_score: i32,
    pub comment: String,
}

/// The signed-in student as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub id: i64,
    pub email: Option<String>,
    pub name: String,
    pub degree_programme: String,
}

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;
