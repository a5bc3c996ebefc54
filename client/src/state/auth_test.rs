use super::*;

fn ada() -> StudentSummary {
    StudentSummary {
        id: 1,
        email: Some("ada@example.ac.uk".to_owned()),
        name: "Ada".to_owned(),
        degree_programme: "Computing Science".to_owned(),
    }
}

#[test]
fn auth_state_default_is_idle_and_anonymous() {
    let state = AuthState::default();
    assert!(state.student.is_none());
    assert!(!state.loading);
}

#[test]
fn pending_is_loading() {
    assert!(AuthState::pending().loading);
}

#[test]
fn needs_login_when_loaded_without_student() {
    assert!(AuthState::default().needs_login());
}

#[test]
fn no_login_redirect_while_loading() {
    assert!(!AuthState::pending().needs_login());
}

#[test]
fn no_login_redirect_with_student() {
    let state = AuthState { student: Some(ada()), loading: false };
    assert!(!state.needs_login());
    assert_eq!(state.display_name(), "Ada");
}

#[test]
fn display_name_placeholder_without_student() {
    assert_eq!(AuthState::default().display_name(), "—");
}
