//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and student-aware components to coordinate login
//! redirects and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use reviews::StudentSummary;

/// Authentication state tracking the current student and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub student: Option<StudentSummary>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state while `/api/auth/me` is in flight.
    #[must_use]
    pub fn pending() -> Self {
        Self { student: None, loading: true }
    }

    /// Whether the guard should send the browser to `/login`.
    #[must_use]
    pub fn needs_login(&self) -> bool {
        !self.loading && self.student.is_none()
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        self.student
            .as_ref()
            .map_or_else(|| "—".to_owned(), |s| s.name.clone())
    }
}
