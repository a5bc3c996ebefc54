use super::*;
use reviews::FieldErrors;

#[test]
fn invalid_form_is_unprocessable() {
    let mut errors = FieldErrors::new();
    errors.insert("name".into(), vec!["This field is required.".into()]);
    let resp = student_error_to_response(StudentError::Invalid(errors));
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn missing_student_is_not_found() {
    let resp = student_error_to_response(StudentError::NotFound(3));
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[test]
fn database_failure_is_internal_error() {
    let resp = student_error_to_response(StudentError::Database(sqlx::Error::RowNotFound));
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
