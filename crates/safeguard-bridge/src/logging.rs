// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Diagnostic output for the bridge.

use safeguard_core::BridgeConfig;
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `config.log_filter`; an unparsable filter falls back
/// to `info`. Returns `false` if a subscriber was already installed (the host
/// may call this more than once across activity restarts).
pub fn init(config: &BridgeConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(filter = %config.log_filter, "Safeguard SMS bridge logging initialised");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        let config = BridgeConfig {
            log_filter: "not a [valid filter".into(),
            ..BridgeConfig::default()
        };
        init(&config);
        assert!(!init(&BridgeConfig::default()));
    }
}
