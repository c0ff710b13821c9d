//! Two-step demo login: phone number, then a fixed one-time passcode.
//!
//! The passcode is surfaced out-of-band by the caller in place of a real SMS
//! dispatch; verification never leaves the device.

use crate::error::LoginError;
use crate::phone::is_valid_phone;

/// Fixed demo passcode standing in for real SMS verification.
pub const DEMO_OTP: &str = "123456";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoginStage {
    #[default]
    AwaitingPhone,
    AwaitingCode {
        phone: String,
    },
    Verified {
        phone: String,
    },
}

/// One login attempt. A code mismatch keeps the flow on the code step so the
/// user can retry; submitting a phone again re-issues the code ("resend").
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginFlow {
    stage: LoginStage,
}

impl LoginFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn stage(&self) -> &LoginStage {
        &self.stage
    }

    /// Validate the number and move to the code-entry step.
    ///
    /// Returns the code to surface out-of-band.
    ///
    /// # Errors
    ///
    /// `InvalidPhone` if the number fails the format check; the stage is
    /// left unchanged.
    pub fn submit_phone(&mut self, raw: &str) -> Result<&'static str, LoginError> {
        let phone = raw.trim();
        if !is_valid_phone(phone) {
            return Err(LoginError::InvalidPhone);
        }
        self.stage = LoginStage::AwaitingCode {
            phone: phone.to_string(),
        };
        Ok(DEMO_OTP)
    }

    /// Check the submitted code and finish the attempt.
    ///
    /// # Errors
    ///
    /// `CodeMismatch` on a wrong code (the flow stays on the code step), or
    /// `NoPendingCode` when no phone has been submitted yet.
    pub fn submit_code(&mut self, code: &str) -> Result<String, LoginError> {
        let LoginStage::AwaitingCode { phone } = &self.stage else {
            return Err(LoginError::NoPendingCode);
        };
        if code.trim() != DEMO_OTP {
            return Err(LoginError::CodeMismatch);
        }
        let phone = phone.clone();
        self.stage = LoginStage::Verified {
            phone: phone.clone(),
        };
        Ok(phone)
    }

    /// Abandon the attempt, e.g. when the login dialog is dismissed.
    pub fn reset(&mut self) {
        self.stage = LoginStage::AwaitingPhone;
    }
}
