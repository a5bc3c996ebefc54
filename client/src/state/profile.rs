//! Profile page state: loaded profile, edit form, password form.
//!
//! Each form keeps its own error labels so a failed password change does not
//! clear messages on the edit form, and vice versa.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use std::collections::BTreeMap;

use reviews::{PasswordForm, ProfileForm, StudentProfile};

use crate::net::api::ApiError;

/// First message per field, as shown next to each input.
pub type FieldLabels = BTreeMap<String, String>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileState {
    pub profile: Option<StudentProfile>,
    pub editing: bool,
    pub edit: ProfileForm,
    pub edit_errors: FieldLabels,
    pub password: PasswordForm,
    pub password_errors: FieldLabels,
    pub notice: Option<String>,
}

impl ProfileState {
    pub fn loaded(&mut self, profile: StudentProfile) {
        self.profile = Some(profile);
    }

    /// Show the edit form prefilled from the current profile.
    pub fn begin_edit(&mut self) {
        if let Some(profile) = &self.profile {
            self.edit = ProfileForm::from_profile(profile);
            self.edit_errors.clear();
            self.editing = true;
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = false;
        self.edit_errors.clear();
    }

    /// Clear edit labels and hand back the form to send.
    pub fn begin_save(&mut self) -> ProfileForm {
        self.edit_errors.clear();
        self.notice = None;
        self.edit.clone()
    }

    pub fn apply_saved(&mut self, result: Result<StudentProfile, ApiError>) {
        match result {
            Ok(profile) => {
                self.profile = Some(profile);
                self.editing = false;
                self.notice = Some("Profile saved.".to_owned());
            }
            Err(err) => absorb(&mut self.edit_errors, &mut self.notice, err),
        }
    }

    /// Clear password labels and hand back the form to send.
    pub fn begin_password_change(&mut self) -> PasswordForm {
        self.password_errors.clear();
        self.notice = None;
        self.password.clone()
    }

    /// A successful change also empties both password inputs.
    pub fn apply_password_changed(&mut self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.password = PasswordForm::default();
                self.notice = Some("Password changed.".to_owned());
            }
            Err(err) => absorb(&mut self.password_errors, &mut self.notice, err),
        }
    }
}

fn absorb(labels: &mut FieldLabels, notice: &mut Option<String>, err: ApiError) {
    match err {
        ApiError::Invalid(errors) => {
            for (field, messages) in errors {
                if let Some(first) = messages.into_iter().next() {
                    labels.insert(field, first);
                }
            }
        }
        other => *notice = Some(other.to_string()),
    }
}
