//! Course list route backing the course page.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use reviews::{CourseSummary, Paged};

use super::PageQuery;
use super::auth::AuthStudent;
use crate::services::course;
use crate::state::AppState;

/// `GET /api/courses?page=N`: courses on the student's degree programme.
pub async fn list_courses(
    State(state): State<AppState>,
    auth: AuthStudent,
    Query(query): Query<PageQuery>,
) -> Result<Json<Paged<CourseSummary>>, StatusCode> {
    course::list_for_student(&state.pool, &auth.student, query.page.as_deref())
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!(error = %e, student_id = auth.student.id, "course list failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })
}
