//! Placeholder access gate in front of department screens.
//!
//! The credential pair is a hardcoded demo value. This is not a security mechanism.

use std::fmt;

use crate::content::Department;

/// Demo username.
pub const DEMO_USERNAME: &str = "admin";

/// Demo password.
pub const DEMO_PASSWORD: &str = "pass123";

/// Title of the notice shown on a credential mismatch.
pub const LOGIN_ERROR_TITLE: &str = "Login Error";

/// Text of the notice shown on a credential mismatch.
pub const LOGIN_ERROR_MESSAGE: &str = "Invalid username or password";

/// A single credential attempt.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Result of checking a credential attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Granted,
    Denied,
}

impl GateOutcome {
    pub fn is_granted(&self) -> bool {
        matches!(self, GateOutcome::Granted)
    }
}

/// Compare an attempt byte-for-byte against the demo pair.
pub fn verify(credentials: &Credentials) -> GateOutcome {
    if credentials.username.as_bytes() == DEMO_USERNAME.as_bytes()
        && credentials.password.as_bytes() == DEMO_PASSWORD.as_bytes()
    {
        GateOutcome::Granted
    } else {
        GateOutcome::Denied
    }
}

/// Form state of an open login prompt.
#[derive(Debug, Clone)]
pub struct LoginDialog {
    /// Department the prompt is gating.
    pub department: Department,
    /// Username input.
    pub username: String,
    /// Password input.
    pub password: String,
}

impl LoginDialog {
    /// Fresh prompt with empty fields.
    pub fn new(department: Department) -> Self {
        Self {
            department,
            username: String::new(),
            password: String::new(),
        }
    }

    /// Window title.
    pub fn title(&self) -> String {
        format!("Login Required - {}", self.department.name())
    }

    /// Snapshot of the current inputs.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone())
    }

    /// Check the current inputs.
    pub fn check(&self) -> GateOutcome {
        verify(&self.credentials())
    }
}
