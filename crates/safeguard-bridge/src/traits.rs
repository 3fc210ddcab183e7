// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for the native telephony stack.
//
// The SMS bridge never talks to a platform API directly; it goes through
// these traits so the send logic can run against a fake on desktop and CI.

use safeguard_core::TransmissionError;

/// The telephony capabilities the SMS bridge needs from the platform.
pub trait Telephony: MessageSplitter + TextSender {
    /// Human-readable platform name (e.g. "Android").
    fn platform_name(&self) -> &str;
}

/// Carrier-aware message chunking.
pub trait MessageSplitter {
    /// Split `message` into the ordered parts the transport can carry.
    ///
    /// Always returns at least one part; the part-size limit is a platform
    /// concern.
    fn divide_message(&self, message: &str) -> Result<Vec<String>, TransmissionError>;
}

/// Hand text to the carrier network.
///
/// Both methods return once the platform has accepted the request. Delivery
/// is not awaited.
pub trait TextSender {
    /// Send a message that fits in a single SMS.
    fn send_text(&self, phone: &str, text: &str) -> Result<(), TransmissionError>;

    /// Send an ordered sequence of parts as one concatenated SMS.
    fn send_multipart_text(&self, phone: &str, parts: &[String]) -> Result<(), TransmissionError>;
}

impl<T: Telephony + ?Sized> Telephony for Box<T> {
    fn platform_name(&self) -> &str {
        (**self).platform_name()
    }
}

impl<T: MessageSplitter + ?Sized> MessageSplitter for Box<T> {
    fn divide_message(&self, message: &str) -> Result<Vec<String>, TransmissionError> {
        (**self).divide_message(message)
    }
}

impl<T: TextSender + ?Sized> TextSender for Box<T> {
    fn send_text(&self, phone: &str, text: &str) -> Result<(), TransmissionError> {
        (**self).send_text(phone, text)
    }

    fn send_multipart_text(&self, phone: &str, parts: &[String]) -> Result<(), TransmissionError> {
        (**self).send_multipart_text(phone, parts)
    }
}
