// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub telephony for desktop/CI builds where no SMS stack exists.
//
// Splitting uses the built-in GSM/UCS-2 segmenter so the single/multipart
// decision behaves like a handset; every send fails with a warning.

use safeguard_core::TransmissionError;

use crate::segment;
use crate::traits::*;

/// Telephony returned on platforms without an SMS stack.
pub struct StubTelephony;

impl Telephony for StubTelephony {
    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }
}

impl MessageSplitter for StubTelephony {
    fn divide_message(&self, message: &str) -> Result<Vec<String>, TransmissionError> {
        Ok(segment::divide_message(message))
    }
}

impl TextSender for StubTelephony {
    fn send_text(&self, _phone: &str, _text: &str) -> Result<(), TransmissionError> {
        tracing::warn!("TextSender::send_text called on stub telephony");
        Err(unavailable())
    }

    fn send_multipart_text(&self, _phone: &str, parts: &[String]) -> Result<(), TransmissionError> {
        tracing::warn!(parts = parts.len(), "TextSender::send_multipart_text called on stub telephony");
        Err(unavailable())
    }
}

fn unavailable() -> TransmissionError {
    TransmissionError::Failed("SMS is not available on this platform".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_splits_like_a_handset() {
        let parts = StubTelephony.divide_message(&"x".repeat(200)).expect("split");
        assert_eq!(parts.len(), 2);
    }

    #[test]
    fn stub_sends_fail_as_generic_transmission_errors() {
        let err = StubTelephony.send_text("+15551234567", "hi").unwrap_err();
        assert!(!err.is_permission_denied());
        let err = StubTelephony
            .send_multipart_text("+15551234567", &["a".into(), "b".into()])
            .unwrap_err();
        assert!(!err.is_permission_denied());
    }
}
