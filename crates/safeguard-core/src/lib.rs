// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Safeguard: core types and error definitions shared by the SMS bridge.

pub mod config;
pub mod error;
pub mod types;

pub use config::BridgeConfig;
pub use error::{SafeguardError, TransmissionError};
pub use types::*;
