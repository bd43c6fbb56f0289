// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dispatcher configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings consumed by the job dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// External print-spooling command for ipp/ipps/lpd targets (default "lp").
    pub spooler_command: String,
    /// Hard bound on a raw-socket connect + transfer, in seconds (default 10).
    pub socket_timeout_secs: u64,
}

impl DispatchConfig {
    pub fn socket_timeout(&self) -> Duration {
        Duration::from_secs(self.socket_timeout_secs)
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            spooler_command: "lp".to_string(),
            socket_timeout_secs: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_production_values() {
        let cfg = DispatchConfig::default();
        assert_eq!(cfg.spooler_command, "lp");
        assert_eq!(cfg.socket_timeout(), Duration::from_secs(10));
    }
}
