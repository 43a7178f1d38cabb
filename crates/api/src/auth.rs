// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! PIN gate protecting the history routes.

use crate::error::AuthError;

/// The PIN used when none is configured at startup.
pub const DEFAULT_PIN: &str = "1234";

/// Shared-secret gate for the attendance history routes.
///
/// The ledger exposes personal data (names, phone numbers), so reads,
/// purges, and report downloads all pass through this gate. The PIN is a
/// deployment-level secret configured once at startup, not a per-user
/// credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinGate {
    /// The configured PIN.
    pin: String,
}

impl PinGate {
    /// Creates a gate with the given PIN.
    #[must_use]
    pub fn new(pin: impl Into<String>) -> Self {
        Self { pin: pin.into() }
    }

    /// Verifies a supplied PIN against the configured one.
    ///
    /// A missing PIN is rejected the same way as a wrong one; the error
    /// never discloses which case occurred.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::AccessDenied`] when the PIN is absent or does
    /// not match.
    pub fn verify(&self, supplied: Option<&str>) -> Result<(), AuthError> {
        match supplied {
            Some(pin) if pin == self.pin => Ok(()),
            _ => Err(AuthError::AccessDenied),
        }
    }
}

impl Default for PinGate {
    fn default() -> Self {
        Self::new(DEFAULT_PIN)
    }
}
