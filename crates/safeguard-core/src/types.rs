// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Method-channel payloads exchanged between the application layer and the
// native SMS bridge.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{INVALID_ARGUMENTS, INVALID_ARGUMENTS_DETAIL, Result, SafeguardError};

/// A single inbound call on the method channel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MethodCall {
    /// Operation name, e.g. `"send"`.
    pub method: String,
    /// Named arguments.
    pub arguments: Map<String, Value>,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }
}

/// String argument lookup. `None` when the key is absent, `null`, or holds a
/// non-string value.
fn argument_str<'a>(arguments: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    arguments.get(key).and_then(Value::as_str)
}

/// Validated arguments of a `send` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendRequest {
    /// Destination address, passed to the platform untouched.
    pub phone: String,
    /// Message body, passed to the platform untouched.
    pub message: String,
}

impl SendRequest {
    /// Extract `phone` and `message` from the channel arguments.
    ///
    /// Only presence is checked; neither the number shape nor the message
    /// encoding is validated.
    pub fn from_arguments(arguments: &Map<String, Value>) -> Result<Self> {
        match (argument_str(arguments, "phone"), argument_str(arguments, "message")) {
            (Some(phone), Some(message)) => Ok(Self {
                phone: phone.to_owned(),
                message: message.to_owned(),
            }),
            _ => Err(SafeguardError::InvalidArguments),
        }
    }
}

/// Result of one method-channel call, handed straight back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SendOutcome {
    /// The request was accepted and submitted to the platform.
    Success,
    /// The request was rejected before anything was sent.
    #[serde(rename = "error")]
    Failure { code: String, detail: String },
    /// The caller invoked an operation this bridge does not provide.
    NotImplemented,
}

impl SendOutcome {
    pub fn failure(code: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Failure {
            code: code.into(),
            detail: detail.into(),
        }
    }

    /// The `INVALID_ARGUMENTS` failure returned for a missing phone or message.
    pub fn invalid_arguments() -> Self {
        Self::failure(INVALID_ARGUMENTS, INVALID_ARGUMENTS_DETAIL)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("object")
    }

    #[test]
    fn request_requires_both_fields() {
        let ok = SendRequest::from_arguments(&args(json!({
            "phone": "+15551234567",
            "message": "hi"
        })))
        .expect("valid request");
        assert_eq!(ok.phone, "+15551234567");
        assert_eq!(ok.message, "hi");

        for missing in [
            json!({ "message": "hi" }),
            json!({ "phone": "+15551234567" }),
            json!({}),
            json!({ "phone": null, "message": "hi" }),
        ] {
            let err = SendRequest::from_arguments(&args(missing)).unwrap_err();
            assert!(matches!(err, SafeguardError::InvalidArguments));
        }
    }

    #[test]
    fn non_string_argument_counts_as_absent() {
        let err = SendRequest::from_arguments(&args(json!({
            "phone": 15551234567u64,
            "message": "hi"
        })))
        .unwrap_err();
        assert!(matches!(err, SafeguardError::InvalidArguments));
    }

    #[test]
    fn empty_strings_are_present() {
        let req = SendRequest::from_arguments(&args(json!({ "phone": "", "message": "" })))
            .expect("empty strings are not null");
        assert!(req.phone.is_empty());
        assert!(req.message.is_empty());
    }

    #[test]
    fn outcome_wire_format() {
        assert_eq!(
            serde_json::to_value(SendOutcome::Success).expect("encode"),
            json!({ "status": "success" })
        );
        assert_eq!(
            serde_json::to_value(SendOutcome::invalid_arguments()).expect("encode"),
            json!({
                "status": "error",
                "code": "INVALID_ARGUMENTS",
                "detail": "Phone number or message is null"
            })
        );
        assert_eq!(
            serde_json::to_value(SendOutcome::NotImplemented).expect("encode"),
            json!({ "status": "not_implemented" })
        );
    }
}
