// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for jetrelay.
//
// Every variant's display string doubles as the user-facing diagnostic in a
// `DispatchResult`, so the wording here is part of the caller contract.

use thiserror::Error;

/// Top-level error type for all dispatch operations.
///
/// All errors are terminal for a single dispatch attempt — nothing here is
/// retried internally.
#[derive(Debug, Error)]
pub enum DispatchError {
    // -- Address errors --
    #[error("Please provide a printer address.")]
    EmptyAddress,

    #[error("Invalid printer address: {0}")]
    InvalidAddress(String),

    #[error("Unsupported printer protocol. Use ipp(s)://, socket://, or provide an IP address.")]
    UnsupportedProtocol(String),

    // -- Spooler transport --
    #[error("The '{0}' command is not available on this system. Install CUPS to enable IPP printing.")]
    SpoolerUnavailable(String),

    #[error("{0}")]
    SpoolerFailure(String),

    // -- Raw-socket transport --
    #[error("Unable to determine printer hostname from the provided address.")]
    UnresolvableHost,

    #[error("Failed to send data to printer: {0}")]
    Network(String),

    // -- Caller-side plumbing --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DispatchError>;
