use super::*;
use reviews::FieldErrors;

// =============================================================================
// parse_uid
// =============================================================================

#[test]
fn parse_uid_accepts_positive_integers() {
    assert_eq!(parse_uid(Some("42")), Some(42));
    assert_eq!(parse_uid(Some(" 7 ")), Some(7));
}

#[test]
fn parse_uid_rejects_missing_and_garbage() {
    assert_eq!(parse_uid(None), None);
    assert_eq!(parse_uid(Some("")), None);
    assert_eq!(parse_uid(Some("undefined")), None);
    assert_eq!(parse_uid(Some("0")), None);
    assert_eq!(parse_uid(Some("-3")), None);
}

// =============================================================================
// review_outcome
// =============================================================================

#[test]
fn stored_review_is_success_envelope() {
    let resp = review_outcome(Ok(5)).unwrap();
    assert_eq!(resp, CommentResponse::ok());
}

#[test]
fn invalid_form_is_error_envelope() {
    let mut errors = FieldErrors::new();
    errors.insert("teaching_score".into(), vec!["Ensure this value is less than or equal to 10.".into()]);
    let resp = review_outcome(Err(ReviewError::Invalid(errors.clone()))).unwrap();
    assert!(!resp.status);
    assert_eq!(resp.error, Some(errors));
    assert!(resp.tips.is_none());
}

#[test]
fn duplicate_is_tips_envelope() {
    let resp = review_outcome(Err(ReviewError::AlreadyCommented)).unwrap();
    assert!(!resp.status);
    assert_eq!(resp.tips.as_deref(), Some("You have already commented"));
}

#[test]
fn unknown_course_is_not_found() {
    assert_eq!(review_outcome(Err(ReviewError::CourseNotFound(9))), Err(StatusCode::NOT_FOUND));
}

#[test]
fn database_failure_is_internal_error() {
    let result = review_outcome(Err(ReviewError::Database(sqlx::Error::PoolTimedOut)));
    assert_eq!(result, Err(StatusCode::INTERNAL_SERVER_ERROR));
}

#[test]
fn add_comment_query_decodes_uid() {
    let query: AddCommentQuery = serde_json::from_value(serde_json::json!({ "uid": "3" })).unwrap();
    assert_eq!(parse_uid(query.uid.as_deref()), Some(3));
}
