//! Comment routes: the dialog's submit endpoint and the student's review list.

use axum::Form;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use reviews::{CommentForm, CommentResponse, Paged, ReviewSummary};
use serde::Deserialize;

use super::PageQuery;
use super::auth::AuthStudent;
use crate::services::review::{self, ReviewError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddCommentQuery {
    pub uid: Option<String>,
}

/// Parse the `uid` query value into a course id.
pub(crate) fn parse_uid(raw: Option<&str>) -> Option<i64> {
    raw.map(str::trim)
        .and_then(|v| v.parse::<i64>().ok())
        .filter(|id| *id > 0)
}

/// Translate the service result into the JSON envelope the dialog expects.
/// Only validation and duplicate failures travel inside the envelope; the
/// rest become HTTP status codes.
pub(crate) fn review_outcome(result: Result<i64, ReviewError>) -> Result<CommentResponse, StatusCode> {
    match result {
        Ok(_) => Ok(CommentResponse::ok()),
        Err(ReviewError::Invalid(errors)) => Ok(CommentResponse::invalid(errors)),
        Err(ReviewError::AlreadyCommented) => Ok(CommentResponse::already_commented()),
        Err(ReviewError::CourseNotFound(_)) => Err(StatusCode::NOT_FOUND),
        Err(ReviewError::Database(e)) => {
            tracing::error!(error = %e, "review insert failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// `POST /student/addcomment/?uid=<course_id>`: store the dialog's review.
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthStudent,
    Query(query): Query<AddCommentQuery>,
    Form(form): Form<CommentForm>,
) -> Result<Json<CommentResponse>, StatusCode> {
    let course_id = parse_uid(query.uid.as_deref()).ok_or(StatusCode::BAD_REQUEST)?;
    let result = review::add_review(&state.pool, auth.student.id, course_id, &form).await;
    if let Err(e) = &result {
        tracing::debug!(student_id = auth.student.id, course_id, reason = %e, "review rejected");
    }
    review_outcome(result).map(Json)
}

/// `GET /api/comments?page=N`: reviews written by the current student.
pub async fn list_comments(
    State(state): State<AppState>,
    auth: AuthStudent,
    Query(query): Query<PageQuery>,
) -> Result<Json<Paged<ReviewSummary>>, StatusCode> {
    review::list_for_student(&state.pool, auth.student.id, query.page.as_deref())
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!(error = %e, "review list failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

#[cfg(test)]
#[path = "comments_test.rs"]
mod tests;
