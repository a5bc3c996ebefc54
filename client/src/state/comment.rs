//! View-model behind the "Add Comment" dialog on the course page.
//!
//! DESIGN
//! ======
//! The course being commented on lives here rather than in a page-global: the
//! page owns one `RwSignal<CommentDialog>`, row buttons call [`CommentDialog::open`],
//! and the dialog component drives [`CommentDialog::begin_submit`] and
//! [`CommentDialog::apply_response`] around a single network call. Nothing
//! here touches the DOM, so the whole open/submit/respond cycle is testable
//! on the host.
//!
//! Overlapping submissions are not guarded. Each request carries the course
//! id captured when it was started, and whichever response lands last wins.

#[cfg(test)]
#[path = "comment_test.rs"]
mod comment_test;

use std::collections::BTreeMap;

use reviews::{CommentForm, CommentResponse};

use crate::net::api::ApiError;

/// Heading shown on the dialog whenever it is opened.
pub const DIALOG_TITLE: &str = "Add Comment";

/// What the caller must do after a response has been applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Saved. The dialog is closed; reload the page to pick up server state.
    Reload,
    /// Rejected. The dialog stays open showing the server's messages.
    Invalid,
}

/// A form submission ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitRequest {
    pub course_id: i64,
    /// `application/x-www-form-urlencoded` body.
    pub body: String,
}

impl SubmitRequest {
    #[must_use]
    pub fn url(&self) -> String {
        reviews::add_comment_url(self.course_id)
    }
}

/// Dialog state: selected course, visibility, form values, and inline errors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentDialog {
    /// Course chosen by the most recent [`Self::open`].
    pub course_id: Option<i64>,
    pub visible: bool,
    pub title: String,
    pub form: CommentForm,
    /// Text of the error label next to each field, keyed by field name.
    pub field_errors: BTreeMap<String, String>,
    /// Dialog-wide message (duplicate review, network failure).
    pub notice: Option<String>,
}

impl CommentDialog {
    /// Select `course_id`, clear the form and its labels, and show the dialog.
    pub fn open(&mut self, course_id: i64) {
        self.course_id = Some(course_id);
        self.form.reset();
        self.field_errors.clear();
        self.notice = None;
        DIALOG_TITLE.clone_into(&mut self.title);
        self.visible = true;
    }

    /// Hide the dialog without touching its contents.
    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn set_field(&mut self, field: &str, value: String) {
        self.form.set(field, value);
    }

    #[must_use]
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }

    /// Errors for fields the form does not render, in field-name order.
    pub fn unplaced_errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.field_errors
            .iter()
            .filter(|(field, _)| !reviews::form::FIELDS.contains(&field.as_str()))
            .map(|(field, msg)| (field.as_str(), msg.as_str()))
    }

    /// Clear the inline labels and package the current form for sending.
    /// Returns `None` if no course has been selected.
    pub fn begin_submit(&mut self) -> Option<SubmitRequest> {
        self.field_errors.clear();
        self.notice = None;
        let course_id = self.course_id?;
        Some(SubmitRequest { course_id, body: self.form.encode() })
    }

    /// Fold a server response into the dialog.
    ///
    /// Success clears the form and hides the dialog. Failure writes the first
    /// message of each listed field into that field's label and leaves the
    /// dialog open for correction.
    pub fn apply_response(&mut self, response: &CommentResponse) -> SubmitOutcome {
        if response.status {
            self.form.reset();
            self.visible = false;
            return SubmitOutcome::Reload;
        }

        for (field, message) in response.first_errors() {
            self.field_errors.insert(field.to_owned(), message.to_owned());
        }
        self.notice.clone_from(&response.tips);
        SubmitOutcome::Invalid
    }

    /// Surface a transport or decode failure. The dialog stays open.
    pub fn apply_failure(&mut self, err: &ApiError) {
        self.notice = Some(format!("Could not save comment: {err}"));
    }
}
