//! Student profile routes: view, edit, password change.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use reviews::{PasswordForm, ProfileForm, StudentProfile};

use super::auth::AuthStudent;
use crate::services::student::{self, StudentError};
use crate::state::AppState;

/// Rejected forms answer `422` with the field -> messages map as the body.
pub(crate) fn student_error_to_response(err: StudentError) -> Response {
    match err {
        StudentError::Invalid(errors) => (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response(),
        StudentError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
        StudentError::Database(e) => {
            tracing::error!(error = %e, "student query failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// `GET /api/student`: the current student's profile.
pub async fn profile(State(state): State<AppState>, auth: AuthStudent) -> Result<Json<StudentProfile>, Response> {
    student::load_profile(&state.pool, auth.student.id)
        .await
        .map(Json)
        .map_err(student_error_to_response)
}

/// `POST /api/student`: update name, gender and age.
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthStudent,
    Json(form): Json<ProfileForm>,
) -> Result<Json<StudentProfile>, Response> {
    student::update_profile(&state.pool, auth.student.id, &form)
        .await
        .map(Json)
        .map_err(student_error_to_response)
}

/// `POST /api/student/password`: replace the password; the session stays valid.
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthStudent,
    Json(form): Json<PasswordForm>,
) -> Result<StatusCode, Response> {
    student::change_password(&state.pool, auth.student.id, &form)
        .await
        .map(|()| StatusCode::NO_CONTENT)
        .map_err(student_error_to_response)
}

#[cfg(test)]
#[path = "student_test.rs"]
mod tests;
