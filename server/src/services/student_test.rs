use super::*;

fn row(gender: i16) -> ProfileRow {
    ProfileRow {
        id: 4,
        email: None,
        name: "Grace".into(),
        gender,
        age: 23,
        entry_date: "2022-09-19".into(),
        degree_programme: "Software Engineering".into(),
    }
}

#[test]
fn profile_row_maps_gender_code() {
    let profile = row(1).into_profile().unwrap();
    assert_eq!(profile.gender, Gender::Male);
    assert_eq!(profile.entry_date, "2022-09-19");
    assert_eq!(profile.degree_programme, "Software Engineering");
}

#[test]
fn profile_row_with_unknown_gender_is_dropped() {
    assert!(row(0).into_profile().is_none());
}

#[test]
fn unchanged_password_is_reported_on_password_field() {
    let errors = unchanged_password_errors();
    assert_eq!(
        errors["password"],
        vec!["The new password should not be the same as the old one.".to_owned()]
    );
}

#[test]
fn student_error_messages() {
    assert_eq!(StudentError::NotFound(9).to_string(), "student not found: 9");
    let mut errors = FieldErrors::new();
    errors.insert("age".into(), vec!["Enter a whole number.".into()]);
    assert_eq!(StudentError::Invalid(errors).to_string(), "form has 1 invalid field(s)");
}

#[tokio::test]
async fn invalid_profile_form_is_rejected_before_the_database() {
    let state = crate::state::test_helpers::test_app_state();
    let err = update_profile(&state.pool, 1, &ProfileForm::default()).await.unwrap_err();
    assert!(matches!(err, StudentError::Invalid(e) if e.len() == 3));
}

#[tokio::test]
async fn mismatched_password_is_rejected_before_the_database() {
    let state = crate::state::test_helpers::test_app_state();
    let form = PasswordForm { password: "one".into(), confirm_password: "two".into() };
    let err = change_password(&state.pool, 1, &form).await.unwrap_err();
    assert!(matches!(err, StudentError::Invalid(e) if e.contains_key("confirm_password")));
}
