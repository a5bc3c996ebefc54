use super::*;
use reviews::{FieldErrors, Gender};

fn grace() -> StudentProfile {
    StudentProfile {
        id: 4,
        email: Some("grace@example.ac.uk".to_owned()),
        name: "Grace".to_owned(),
        gender: Gender::Female,
        age: 23,
        entry_date: "2022-09-19".to_owned(),
        degree_programme: "Software Engineering".to_owned(),
    }
}

fn field_errors(field: &str, messages: &[&str]) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.insert(field.to_owned(), messages.iter().map(|m| (*m).to_owned()).collect());
    errors
}

#[test]
fn begin_edit_without_profile_does_nothing() {
    let mut state = ProfileState::default();
    state.begin_edit();
    assert!(!state.editing);
}

#[test]
fn begin_edit_prefills_from_profile() {
    let mut state = ProfileState::default();
    state.loaded(grace());
    state.begin_edit();
    assert!(state.editing);
    assert_eq!(state.edit.name, "Grace");
    assert_eq!(state.edit.gender, "2");
    assert_eq!(state.edit.age, "23");
}

#[test]
fn saved_profile_replaces_current_and_closes_form() {
    let mut state = ProfileState::default();
    state.loaded(grace());
    state.begin_edit();
    let mut updated = grace();
    updated.age = 24;
    state.apply_saved(Ok(updated));
    assert!(!state.editing);
    assert_eq!(state.profile.as_ref().map(|p| p.age), Some(24));
    assert_eq!(state.notice.as_deref(), Some("Profile saved."));
}

#[test]
fn rejected_profile_keeps_form_open_with_first_messages() {
    let mut state = ProfileState::default();
    state.loaded(grace());
    state.begin_edit();
    state.apply_saved(Err(ApiError::Invalid(field_errors("age", &["Enter a whole number.", "second"]))));
    assert!(state.editing);
    assert_eq!(state.edit_errors.get("age").map(String::as_str), Some("Enter a whole number."));
    assert!(state.notice.is_none());
}

#[test]
fn begin_save_clears_previous_labels() {
    let mut state = ProfileState::default();
    state.edit_errors.insert("name".to_owned(), "This field is required.".to_owned());
    state.edit.name = "Grace".to_owned();
    let form = state.begin_save();
    assert!(state.edit_errors.is_empty());
    assert_eq!(form.name, "Grace");
}

#[test]
fn transport_failure_becomes_notice() {
    let mut state = ProfileState::default();
    state.apply_saved(Err(ApiError::Status(500)));
    assert_eq!(state.notice.as_deref(), Some("request failed: 500"));
    assert!(state.edit_errors.is_empty());
}

#[test]
fn password_change_success_empties_inputs() {
    let mut state = ProfileState::default();
    state.password.password = "n3w".to_owned();
    state.password.confirm_password = "n3w".to_owned();
    let sent = state.begin_password_change();
    assert_eq!(sent.password, "n3w");
    state.apply_password_changed(Ok(()));
    assert_eq!(state.password, PasswordForm::default());
    assert_eq!(state.notice.as_deref(), Some("Password changed."));
}

#[test]
fn password_errors_do_not_touch_edit_labels() {
    let mut state = ProfileState::default();
    state.edit_errors.insert("name".to_owned(), "keep".to_owned());
    state.apply_password_changed(Err(ApiError::Invalid(field_errors(
        "password",
        &["The new password should not be the same as the old one."],
    ))));
    assert_eq!(
        state.password_errors.get("password").map(String::as_str),
        Some("The new password should not be the same as the old one.")
    );
    assert_eq!(state.edit_errors.get("name").map(String::as_str), Some("keep"));
}
