// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// SMS bridge: handles `send` calls arriving on the method channel and
// forwards them to the platform telephony stack.
//
// Flow per call: validate -> split -> single or multipart send. Nothing is
// queued, cached, deduplicated or retried; each call reaches the platform
// on its own.

use serde_json::{Map, Value};
use tracing::{debug, error, info, warn};

use safeguard_core::{BridgeConfig, SendOutcome, SendRequest, TransmissionError};

use crate::SEND_METHOD;
use crate::traits::Telephony;

/// Method-channel handler for outbound SMS.
pub struct SmsBridge<T> {
    telephony: T,
    config: BridgeConfig,
}

impl<T: Telephony> SmsBridge<T> {
    pub fn new(telephony: T) -> Self {
        Self::with_config(telephony, BridgeConfig::default())
    }

    pub fn with_config(telephony: T, config: BridgeConfig) -> Self {
        Self { telephony, config }
    }

    pub fn telephony(&self) -> &T {
        &self.telephony
    }

    /// Handle one method-channel call.
    ///
    /// * unknown `method` -> [`SendOutcome::NotImplemented`], `arguments` ignored
    /// * missing `phone` or `message` -> `INVALID_ARGUMENTS`, nothing sent
    /// * otherwise -> [`SendOutcome::Success`], even if transmission fails
    pub fn handle(&self, method: &str, arguments: &Map<String, Value>) -> SendOutcome {
        if method != SEND_METHOD {
            debug!(method, "unsupported method-channel call");
            return SendOutcome::NotImplemented;
        }

        let request = match SendRequest::from_arguments(arguments) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "rejecting send call");
                return SendOutcome::invalid_arguments();
            }
        };

        // Transmission failures are reported through diagnostics only. The
        // caller is told the send succeeded once its arguments validate; this
        // is the established contract with the app layer and tests pin it.
        let _ = self.send_text(&request.phone, &request.message);
        SendOutcome::Success
    }

    /// Split `message` and submit it to the platform.
    ///
    /// Any failure is logged here, tagged by class, before being returned.
    fn send_text(&self, phone: &str, message: &str) -> Result<(), TransmissionError> {
        info!(phone, "attempting to send SMS");
        if self.config.log_message_body {
            debug!(phone, body = message, "SMS body");
        }

        let result = self.transmit(phone, message);
        match &result {
            Ok(()) => info!(phone, "SMS sent"),
            Err(e @ TransmissionError::PermissionDenied(_)) => {
                error!(phone, failure = "permission", error = %e, "SMS permission not granted");
            }
            Err(e @ TransmissionError::Failed(_)) => {
                error!(phone, failure = "transmission", error = %e, "failed to send SMS");
            }
        }
        result
    }

    fn transmit(&self, phone: &str, message: &str) -> Result<(), TransmissionError> {
        let parts = self.telephony.divide_message(message)?;
        match parts.as_slice() {
            [single] => self.telephony.send_text(phone, single),
            [] => self.telephony.send_text(phone, message),
            _ => {
                info!(phone, parts = parts.len(), "message split into parts");
                self.telephony.send_multipart_text(phone, &parts)
            }
        }
    }
}
