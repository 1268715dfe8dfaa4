//! Signup form state.
//!
//! DESIGN
//! ======
//! One small record owns every transient field of the form. Pages keep it in
//! a signal and mutate it only through the methods below, which keeps the
//! submission lifecycle (error cleared on start, single attempt in flight)
//! in one place instead of spread across event handlers.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use std::fmt;

use crate::net::identity::{CreatedAccount, ProviderError};

/// Transient state of the signup form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub show_password: bool,
    /// Empty unless the last completed attempt failed.
    pub error_message: String,
    /// An account-creation call is in flight.
    pub pending: bool,
}

/// Snapshot of the credentials taken when an attempt starts.
#[derive(Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

/// What the caller should do once an attempt settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(CreatedAccount),
    Failed,
}

impl SignupForm {
    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Input `type` for the password field.
    pub fn password_input_type(&self) -> &'static str {
        if self.show_password { "text" } else { "password" }
    }

    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }

    /// Start a submission attempt.
    ///
    /// The previous error is cleared either way. Returns `None` while an
    /// earlier attempt is still pending so repeated clicks cannot fan out
    /// into concurrent account-creation calls.
    pub fn begin_submit(&mut self) -> Option<SignupRequest> {
        self.error_message.clear();
        if self.pending {
            return None;
        }
        self.pending = true;
        Some(SignupRequest { email: self.email.clone(), password: self.password.clone() })
    }

    /// Record the result of the attempt started by [`Self::begin_submit`].
    pub fn finish_submit(&mut self, result: Result<CreatedAccount, ProviderError>) -> SubmitOutcome {
        self.pending = false;
        match result {
            Ok(account) => SubmitOutcome::Created(account),
            Err(err) => {
                self.error_message = err.to_string();
                SubmitOutcome::Failed
            }
        }
    }
}

impl fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("show_password", &self.show_password)
            .field("error_message", &self.error_message)
            .field("pending", &self.pending)
            .finish()
    }
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
