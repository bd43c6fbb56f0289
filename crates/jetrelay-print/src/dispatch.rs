// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Job dispatcher: scheme-keyed selection between the spooler and raw-socket
// transports.
//
// One dispatch call makes exactly one transport attempt and surfaces its
// outcome unmodified. No retries, no queueing, no shared state between
// concurrent calls.

use tracing::{info, warn};

use jetrelay_core::config::DispatchConfig;
use jetrelay_core::error::{DispatchError, Result};
use jetrelay_core::types::{DispatchResult, PrintJob};

use crate::raw_client::send_raw;
use crate::spooler::{CommandRunner, SystemCommandRunner, send_via_spooler};
use crate::target::{PrintScheme, PrinterTarget};

/// Routes a print job to the transport its target's scheme calls for.
///
/// Generic over the [`CommandRunner`] so tests can script the spooler
/// boundary; production code uses [`Dispatcher::new`].
#[derive(Debug)]
pub struct Dispatcher<R: CommandRunner = SystemCommandRunner> {
    config: DispatchConfig,
    runner: R,
}

impl Dispatcher<SystemCommandRunner> {
    pub fn new(config: DispatchConfig) -> Self {
        Self::with_runner(config, SystemCommandRunner)
    }
}

impl Default for Dispatcher<SystemCommandRunner> {
    fn default() -> Self {
        Self::new(DispatchConfig::default())
    }
}

impl<R: CommandRunner> Dispatcher<R> {
    pub fn with_runner(config: DispatchConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// Normalize `raw` and deliver `job` over the matching transport,
    /// folding any error into a `{success, message}` pair.
    pub async fn dispatch(&self, raw: &str, job: &PrintJob) -> DispatchResult {
        self.try_dispatch(raw, job).await.into()
    }

    /// As [`dispatch`](Self::dispatch), but keeps the error taxonomy for
    /// callers that want to present failures themselves.
    ///
    /// An empty address is a terminal validation failure; no transport is
    /// attempted. Schemes outside ipp/ipps/lpd/socket are rejected.
    pub async fn try_dispatch(&self, raw: &str, job: &PrintJob) -> Result<String> {
        let target = match PrinterTarget::normalize(raw) {
            Ok(target) => target,
            Err(err) => {
                warn!(error = %err, "printer address rejected");
                return Err(err);
            }
        };

        info!(
            scheme = target.scheme().as_str(),
            uri = %target.uri(),
            job = %job.id,
            "dispatching print job"
        );

        let outcome = match target.scheme() {
            PrintScheme::Ipp | PrintScheme::Ipps | PrintScheme::Lpd => {
                send_via_spooler(&self.runner, &self.config.spooler_command, &target, job).await
            }
            PrintScheme::Socket => send_raw(&target, job, self.config.socket_timeout()).await,
            PrintScheme::Other(scheme) => {
                Err(DispatchError::UnsupportedProtocol(scheme.clone()))
            }
        };

        if let Err(err) = &outcome {
            warn!(error = %err, job = %job.id, "dispatch failed");
        }
        outcome
    }
}
