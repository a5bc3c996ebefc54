use super::*;

fn filled_form() -> CommentForm {
    CommentForm {
        overall_score: "8".to_owned(),
        easiness_score: "6".to_owned(),
        interest_score: "9".to_owned(),
        usefulness_score: "7".to_owned(),
        teaching_score: "10".to_owned(),
        comment: "Great lectures".to_owned(),
    }
}

// =============================================================================
// get / set / reset
// =============================================================================

#[test]
fn get_returns_each_known_field() {
    let form = filled_form();
    assert_eq!(form.get("overall_score"), Some("8"));
    assert_eq!(form.get("teaching_score"), Some("10"));
    assert_eq!(form.get("comment"), Some("Great lectures"));
}

#[test]
fn get_unknown_field_is_none() {
    assert_eq!(CommentForm::default().get("title"), None);
}

#[test]
fn set_known_field_updates_value() {
    let mut form = CommentForm::default();
    assert!(form.set("interest_score", "4"));
    assert_eq!(form.interest_score, "4");
}

#[test]
fn set_unknown_field_is_rejected() {
    let mut form = CommentForm::default();
    assert!(!form.set("title", "x"));
    assert!(form.is_empty());
}

#[test]
fn reset_clears_every_field() {
    let mut form = filled_form();
    form.reset();
    assert!(form.is_empty());
    assert_eq!(form, CommentForm::default());
}

// =============================================================================
// encode
// =============================================================================

#[test]
fn encode_emits_fields_in_order() {
    let body = filled_form().encode();
    assert_eq!(
        body,
        "overall_score=8&easiness_score=6&interest_score=9&usefulness_score=7&teaching_score=10&comment=Great%20lectures"
    );
}

#[test]
fn encode_escapes_reserved_characters() {
    let mut form = CommentForm::default();
    form.comment = "a&b=c".to_owned();
    assert!(form.encode().ends_with("comment=a%26b%3Dc"));
}

#[test]
fn encode_empty_form_keeps_every_key() {
    let body = CommentForm::default().encode();
    assert_eq!(body.matches('=').count(), FIELDS.len());
}

// =============================================================================
// validate
// =============================================================================

#[test]
fn validate_accepts_filled_form() {
    let review = filled_form().validate().expect("valid");
    assert_eq!(review.overall_score, 8);
    assert_eq!(review.teaching_score, 10);
    assert_eq!(review.comment, "Great lectures");
}

#[test]
fn validate_empty_form_requires_every_field() {
    let errors = CommentForm::default().validate().unwrap_err();
    assert_eq!(errors.len(), FIELDS.len());
    for field in FIELDS {
        assert_eq!(errors[field], vec!["This field is required.".to_owned()]);
    }
}

#[test]
fn validate_reports_only_failing_fields() {
    let mut form = filled_form();
    form.easiness_score = "11".to_owned();
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors["easiness_score"],
        vec!["Ensure this value is less than or equal to 10.".to_owned()]
    );
}

#[test]
fn validate_trims_comment() {
    let mut form = filled_form();
    form.comment = "  fine  ".to_owned();
    assert_eq!(form.validate().expect("valid").comment, "fine");
}

#[test]
fn validate_rejects_overlong_comment_with_count() {
    let mut form = filled_form();
    form.comment = "x".repeat(301);
    let errors = form.validate().unwrap_err();
    assert_eq!(
        errors["comment"],
        vec!["Ensure this value has at most 300 characters (it has 301).".to_owned()]
    );
}

#[test]
fn validate_counts_characters_not_bytes() {
    let mut form = filled_form();
    form.comment = "é".repeat(300);
    assert!(form.validate().is_ok());
}

// =============================================================================
// parse_score
// =============================================================================

#[test]
fn parse_score_bounds_are_inclusive() {
    assert_eq!(parse_score("1"), Ok(1));
    assert_eq!(parse_score("10"), Ok(10));
}

#[test]
fn parse_score_below_min() {
    assert_eq!(parse_score("0"), Err(FieldError::BelowMin(1)));
    assert_eq!(parse_score("-3"), Err(FieldError::BelowMin(1)));
}

#[test]
fn parse_score_above_max() {
    assert_eq!(parse_score("11"), Err(FieldError::AboveMax(10)));
}

#[test]
fn parse_score_accepts_whitespace_and_zero_fraction() {
    assert_eq!(parse_score(" 7 "), Ok(7));
    assert_eq!(parse_score("7.0"), Ok(7));
    assert_eq!(parse_score("7.00"), Ok(7));
}

#[test]
fn parse_score_rejects_non_integers() {
    assert_eq!(parse_score("7.5"), Err(FieldError::NotInteger));
    assert_eq!(parse_score("seven"), Err(FieldError::NotInteger));
    assert_eq!(parse_score("+-3"), Err(FieldError::NotInteger));
    assert_eq!(parse_score("-"), Err(FieldError::NotInteger));
}

#[test]
fn parse_score_overflow_is_range_checked_by_sign() {
    assert_eq!(parse_score("99999999999"), Err(FieldError::AboveMax(10)));
    assert_eq!(parse_score("-99999999999"), Err(FieldError::BelowMin(1)));
    assert_eq!(parse_score(" 99999999999.0 "), Err(FieldError::AboveMax(10)));
}

#[test]
fn parse_score_accepts_explicit_sign() {
    assert_eq!(parse_score("+4"), Ok(4));
    assert_eq!(parse_score("-4"), Err(FieldError::BelowMin(1)));
}

#[test]
fn parse_score_blank_is_required() {
    assert_eq!(parse_score("   "), Err(FieldError::Required));
}

#[test]
fn field_error_messages_match_site_wording() {
    assert_eq!(FieldError::NotInteger.to_string(), "Enter a whole number.");
    assert_eq!(
        FieldError::BelowMin(1).to_string(),
        "Ensure this value is greater than or equal to 1."
    );
}

#[test]
fn field_label_covers_every_field() {
    for field in FIELDS {
        assert!(!field_label(field).is_empty(), "missing label for {field}");
    }
    assert_eq!(field_label("title"), "");
}

#[test]
fn score_fields_are_recognised() {
    assert!(is_score_field("teaching_score"));
    assert!(!is_score_field("comment"));
    assert!(!is_score_field("title"));
}
