//! Form domain layer
//!
//! Field values, the email and handle rules and the signup form's submit
//! transitions.
//! Nothing here knows about the terminal or the network.

mod email;
mod field;
mod handle;
mod signup_form;

pub use field::FormField;
pub use signup_form::{Form, SignupForm, EMAIL_FIELD, HANDLE_FIELD};

#[cfg(test)]
pub use signup_form::SUBMIT_BUTTON;
