// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Method-channel envelope handling.
//
// The host activity forwards each call on the `sendSms` channel as a method
// name plus a JSON-encoded argument object, and relays the JSON outcome
// back to the application layer.

use serde_json::{Map, Value};
use tracing::warn;

use safeguard_core::error::Result;
use safeguard_core::MethodCall;

use crate::sms::SmsBridge;
use crate::traits::Telephony;

/// Decode the raw argument payload.
///
/// Blank input, `null`, non-object JSON and undecodable JSON all yield an
/// empty map, which the bridge then treats as missing arguments.
pub fn decode_arguments(raw: &str) -> Map<String, Value> {
    if raw.trim().is_empty() {
        return Map::new();
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(arguments)) => arguments,
        Ok(Value::Null) => Map::new(),
        Ok(other) => {
            warn!(kind = value_kind(&other), "method-channel arguments are not an object");
            Map::new()
        }
        Err(e) => {
            warn!(error = %e, "undecodable method-channel arguments");
            Map::new()
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decode, handle and encode one call. Returns the JSON outcome.
pub fn dispatch<T: Telephony>(
    bridge: &SmsBridge<T>,
    method: &str,
    arguments_json: &str,
) -> Result<String> {
    let call = MethodCall::new(method, decode_arguments(arguments_json));
    let outcome = bridge.handle(&call.method, &call.arguments);
    Ok(serde_json::to_string(&outcome)?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::stub::StubTelephony;

    fn decode(raw: &str) -> Value {
        serde_json::from_str(raw).expect("outcome is JSON")
    }

    #[test]
    fn blank_and_malformed_arguments_are_empty() {
        assert!(decode_arguments("").is_empty());
        assert!(decode_arguments("null").is_empty());
        assert!(decode_arguments("[1, 2]").is_empty());
        assert!(decode_arguments("{phone:").is_empty());
    }

    #[test]
    fn object_arguments_are_kept() {
        let args = decode_arguments(r#"{"phone":"+15551234567","message":"hi"}"#);
        assert_eq!(args.get("phone"), Some(&json!("+15551234567")));
        assert_eq!(args.get("message"), Some(&json!("hi")));
    }

    #[test]
    fn dispatch_send_reports_success_even_on_stub() {
        // The stub cannot transmit; the failure stays local.
        let bridge = SmsBridge::new(StubTelephony);
        let out = dispatch(&bridge, "send", r#"{"phone":"+15551234567","message":"hi"}"#)
            .expect("encode");
        assert_eq!(decode(&out), json!({ "status": "success" }));
    }

    #[test]
    fn dispatch_missing_arguments() {
        let bridge = SmsBridge::new(StubTelephony);
        let out = dispatch(&bridge, "send", "not json").expect("encode");
        assert_eq!(
            decode(&out),
            json!({
                "status": "error",
                "code": "INVALID_ARGUMENTS",
                "detail": "Phone number or message is null"
            })
        );
    }

    #[test]
    fn dispatch_unknown_method() {
        let bridge = SmsBridge::new(StubTelephony);
        let out = dispatch(&bridge, "getInbox", r#"{"phone":"+1"}"#).expect("encode");
        assert_eq!(decode(&out), json!({ "status": "not_implemented" }));
    }
}
