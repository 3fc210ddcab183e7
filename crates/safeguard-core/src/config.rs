// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bridge configuration supplied by the host application at start-up.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Settings for the native SMS bridge.
///
/// None of these change what a `send` call returns; they only shape the
/// local diagnostic output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    pub log_filter: String,
    /// Include the message body in debug-level diagnostics.
    pub log_message_body: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".into(),
            log_message_body: true,
        }
    }
}

impl BridgeConfig {
    /// Parse a JSON config object. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = BridgeConfig::from_json(r#"{"log_message_body": false}"#).expect("parse");
        assert_eq!(config.log_filter, "info");
        assert!(!config.log_message_body);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(BridgeConfig::from_json("{}").expect("parse"), BridgeConfig::default());
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(BridgeConfig::from_json("log_filter=debug").is_err());
    }
}
