// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Safeguard: native SMS bridge.
//
// The application layer calls `send` on the `sendSms` method channel; the
// host activity forwards the call here, and the bridge hands the message to
// the platform telephony stack through the traits in `traits`.

pub mod channel;
pub mod logging;
pub mod segment;
pub mod sms;
pub mod traits;

#[cfg(target_os = "android")]
pub mod android;

#[cfg(not(target_os = "android"))]
pub mod stub;

pub use sms::SmsBridge;

/// Method-channel name shared with the host activity's registration code.
pub const CHANNEL: &str = "sendSms";

/// The only operation the channel implements.
pub const SEND_METHOD: &str = "send";

/// Telephony implementation for the target operating system.
///
/// On Android this goes through JNI to `SmsManager`; everywhere else a stub
/// that can split but never transmit.
pub fn platform_telephony() -> Box<dyn traits::Telephony> {
    #[cfg(target_os = "android")]
    {
        Box::new(android::AndroidTelephony::new())
    }
    #[cfg(not(target_os = "android"))]
    {
        Box::new(stub::StubTelephony)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Telephony;

    #[test]
    fn platform_telephony_is_stub_off_device() {
        assert_eq!(platform_telephony().platform_name(), "Desktop (stub)");
    }

    #[test]
    fn boxed_telephony_drives_the_bridge() {
        let bridge = SmsBridge::new(platform_telephony());
        let outcome = bridge.handle(SEND_METHOD, &serde_json::Map::new());
        assert_eq!(outcome, safeguard_core::SendOutcome::invalid_arguments());
    }
}
