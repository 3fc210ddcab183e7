// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Safeguard.

use thiserror::Error;

/// Error code returned to the application layer when `phone` or `message`
/// is missing from a `send` call.
pub const INVALID_ARGUMENTS: &str = "INVALID_ARGUMENTS";

/// Human-readable detail accompanying [`INVALID_ARGUMENTS`].
pub const INVALID_ARGUMENTS_DETAIL: &str = "Phone number or message is null";

/// Failure while handing a message to the platform telephony stack.
///
/// These never reach the application layer. They are logged where they
/// occur and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransmissionError {
    /// The platform refused to send (SMS permission not granted).
    #[error("SMS permission not granted: {0}")]
    PermissionDenied(String),

    /// Any other failure while splitting or sending.
    #[error("SMS transmission failed: {0}")]
    Failed(String),
}

impl TransmissionError {
    /// True for the permission-denial class.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied(_))
    }
}

/// Top-level error type for all Safeguard operations.
#[derive(Debug, Error)]
pub enum SafeguardError {
    #[error("{}", INVALID_ARGUMENTS_DETAIL)]
    InvalidArguments,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SafeguardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_class_is_distinguished() {
        assert!(TransmissionError::PermissionDenied("denied".into()).is_permission_denied());
        assert!(!TransmissionError::Failed("radio off".into()).is_permission_denied());
    }

    #[test]
    fn invalid_arguments_message_matches_caller_detail() {
        assert_eq!(SafeguardError::InvalidArguments.to_string(), INVALID_ARGUMENTS_DETAIL);
        assert_eq!(INVALID_ARGUMENTS_DETAIL, "Phone number or message is null");
    }
}
