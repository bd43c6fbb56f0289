// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Spooler transport: hands ipp/ipps/lpd jobs to the external print-spooling
// command (CUPS `lp` by default).
//
// The spooler is an explicit boundary, not a hidden dependency: process
// lookup and execution go through the `CommandRunner` trait so tests can
// substitute a fake that records invocations and scripts exit codes.
// The contract with the real command is exactly its exit status and its
// standard streams — no particular error-message format is assumed beyond
// "non-empty stderr on failure".

use std::env;
use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::{debug, info};

use jetrelay_core::error::{DispatchError, Result};
use jetrelay_core::types::PrintJob;

use crate::target::PrinterTarget;

/// Captured outcome of one spooler invocation.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Whether the process exited with status zero.
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Process lookup and execution seam for the spooler transport.
#[allow(async_fn_in_trait)]
pub trait CommandRunner: Send + Sync {
    /// Find `program` on the host, returning its full path if present and
    /// executable. A `None` here means the spooler is unavailable and no
    /// invocation will be attempted.
    fn locate(&self, program: &str) -> Option<PathBuf>;

    /// Execute `program` with `args`, capturing both streams and the exit
    /// status.
    async fn run(&self, program: &Path, args: &[&OsStr]) -> io::Result<CommandOutput>;
}

/// Production runner: PATH lookup + `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        // An explicit path bypasses the PATH search.
        if program.contains(std::path::MAIN_SEPARATOR) {
            let candidate = PathBuf::from(program);
            return is_executable(&candidate).then_some(candidate);
        }
        let path = env::var_os("PATH")?;
        env::split_paths(&path)
            .map(|dir| dir.join(program))
            .find(|candidate| is_executable(candidate))
    }

    async fn run(&self, program: &Path, args: &[&OsStr]) -> io::Result<CommandOutput> {
        let output = Command::new(program).args(args).output().await?;
        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        path.metadata()
            .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }
    #[cfg(not(unix))]
    {
        path.is_file()
    }
}

/// Submit a job to the external spooler as `<command> -d <uri> <file>`.
///
/// Returns the spooler's trimmed stdout on success (or a generic
/// confirmation when it printed nothing), and maps a non-zero exit to its
/// trimmed stderr. A single attempt, never retried.
pub async fn send_via_spooler<R: CommandRunner>(
    runner: &R,
    command: &str,
    target: &PrinterTarget,
    job: &PrintJob,
) -> Result<String> {
    let program = runner
        .locate(command)
        .ok_or_else(|| DispatchError::SpoolerUnavailable(command.to_string()))?;

    info!(
        command = %program.display(),
        uri = %target.uri(),
        job = %job.id,
        "submitting job to spooler"
    );

    let args: [&OsStr; 3] = [
        OsStr::new("-d"),
        OsStr::new(target.uri()),
        job.path().as_os_str(),
    ];
    let output = runner.run(&program, &args).await.map_err(|e| {
        DispatchError::SpoolerFailure(format!("Failed to run '{}': {e}", program.display()))
    })?;

    debug!(success = output.success, "spooler exited");

    if !output.success {
        let stderr = output.stderr.trim();
        let message = if stderr.is_empty() {
            format!("Failed to submit the print job via {command}.")
        } else {
            stderr.to_string()
        };
        return Err(DispatchError::SpoolerFailure(message));
    }

    let stdout = output.stdout.trim();
    if stdout.is_empty() {
        Ok("Print job submitted successfully.".to_string())
    } else {
        Ok(stdout.to_string())
    }
}
