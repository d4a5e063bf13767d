//! Submission status and the record sent to the subscriber store

use serde::{Deserialize, Serialize};

pub const SUCCESS_NOTICE: &str = "Thank you for subscribing! We'll keep you updated.";
pub const ERROR_NOTICE: &str = "There was an error submitting your information. Please try again.";

/// Outcome of the most recent submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    /// An insert is in flight
    Submitting,
    Success,
    Error,
}

impl SubmitStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// User-facing notice for terminal states
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Success => Some(SUCCESS_NOTICE),
            Self::Error => Some(ERROR_NOTICE),
            Self::Idle | Self::Submitting => None,
        }
    }
}

/// A row in the `subscribers` collection.
///
/// An absent handle is sent as an explicit `null`, never as `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriberRecord {
    pub email: String,
    pub twitter_handle: Option<String>,
}

impl SubscriberRecord {
    pub fn new(email: &str, handle: &str) -> Self {
        Self {
            email: email.to_string(),
            twitter_handle: if handle.is_empty() {
                None
            } else {
                Some(handle.to_string())
            },
        }
    }
}
