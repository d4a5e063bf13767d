//! Waiting-list signup form: draft fields, focus ring and submit transitions

use super::email::{is_valid_email, validate_email};
use super::field::FormField;
use super::handle::{is_valid_handle, profile_url, validate_handle};
use crate::state::{SubmitStatus, SubscriberRecord};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

pub const EMAIL_FIELD: usize = 0;
pub const HANDLE_FIELD: usize = 1;
pub const SUBMIT_BUTTON: usize = 2;

/// Draft signup plus the status of the last submit attempt
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub email: FormField,
    pub handle: FormField,
    pub status: SubmitStatus,
    pub active_field_index: usize,
}

impl SignupForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "Email Address", "you@example.com"),
            handle: FormField::text("twitter", "Twitter Profile", "@username"),
            status: SubmitStatus::Idle,
            active_field_index: EMAIL_FIELD,
        }
    }

    /// Returns true if the submit button is currently focused
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON
    }

    /// Validation message for the current email (empty when acceptable)
    pub fn email_error(&self) -> &'static str {
        validate_email(self.email.as_text())
    }

    /// Validation message for the current handle (empty when acceptable)
    pub fn handle_error(&self) -> &'static str {
        validate_handle(self.handle.as_text())
    }

    /// Profile link to display, only for a non-empty valid handle
    pub fn profile_url(&self) -> Option<String> {
        if self.handle.is_empty() || !is_valid_handle(self.handle.as_text()) {
            return None;
        }
        let url = profile_url(self.handle.as_text());
        (!url.is_empty()).then_some(url)
    }

    /// Whether the submit control is enabled.
    ///
    /// The email input only accepts a present, well-formed address; the
    /// handle guard is checked separately by [`Self::handle_accepted`].
    pub fn can_submit(&self) -> bool {
        is_valid_email(self.email.as_text()) && self.handle_accepted()
    }

    /// Submit guard: the handle is empty or valid and nothing is in flight
    pub fn handle_accepted(&self) -> bool {
        is_valid_handle(self.handle.as_text()) && !self.status.is_submitting()
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.get_active_field_mut() {
            field.push_char(c);
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.pop_char();
        }
    }

    /// Run the guard and enter `Submitting`.
    ///
    /// Returns the record to insert, or `None` when the submit is refused, in
    /// which case nothing about the form changes.
    pub fn begin_submit(&mut self) -> Option<SubscriberRecord> {
        if !self.can_submit() {
            return None;
        }
        self.status = SubmitStatus::Submitting;
        Some(SubscriberRecord::new(
            self.email.as_text().trim(),
            self.handle.as_text(),
        ))
    }

    /// Apply the outcome of the insert started by [`Self::begin_submit`].
    ///
    /// Success clears the draft; failure keeps it so the user can retry.
    pub fn finish_submit(&mut self, succeeded: bool) {
        if succeeded {
            self.status = SubmitStatus::Success;
            self.email.clear();
            self.handle.clear();
        } else {
            self.status = SubmitStatus::Error;
        }
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        3 // email, handle, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_BUTTON);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            EMAIL_FIELD => Some(&mut self.email),
            HANDLE_FIELD => Some(&mut self.handle),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            EMAIL_FIELD => Some(&self.email),
            HANDLE_FIELD => Some(&self.handle),
            _ => None,
        }
    }
}
