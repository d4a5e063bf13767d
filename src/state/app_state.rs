//! Application state definitions

use super::forms::SignupForm;
use std::collections::VecDeque;

/// Everything the UI renders from
#[derive(Debug, Default)]
pub struct AppState {
    /// The waiting-list form (the only screen)
    pub signup: SignupForm,
    /// Whether a subscriber store endpoint is configured
    pub store_configured: bool,
    /// Errors waiting to be shown in the modal dialog, oldest first
    error_queue: VecDeque<String>,
}

impl AppState {
    pub fn new(store_configured: bool) -> Self {
        Self {
            store_configured,
            ..Default::default()
        }
    }

    /// Queue an error for the modal dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// The error currently shown, if any
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    /// Dismiss the error currently shown
    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
