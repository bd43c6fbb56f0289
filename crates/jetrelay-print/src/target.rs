// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Printer target normalization.
//
// Turns a free-form user address into a structured target. Most
// non-technical users type a bare IP, so an unqualified value is assumed to
// be an IPP printer behind the standard spooler path. Advanced users opt
// into socket:// or explicit ports themselves.

use http::Uri;
use serde::{Deserialize, Serialize};

use jetrelay_core::error::{DispatchError, Result};

use crate::raw_client::RAW_PORT;

/// Spooler path synthesized for bare host/IP input.
pub const DEFAULT_IPP_PATH: &str = "/ipp/print";

/// Recognized printer URI schemes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrintScheme {
    /// IPP (port 631, ipp://), delegated to the spooler.
    Ipp,
    /// IPP over TLS (ipps://), delegated to the spooler.
    Ipps,
    /// LPR/LPD (RFC 1179, lpd://), delegated to the spooler.
    Lpd,
    /// Raw TCP socket (port 9100, JetDirect).
    Socket,
    /// Anything else — rejected at dispatch time.
    Other(String),
}

impl PrintScheme {
    fn parse(scheme: &str) -> Self {
        match scheme.to_ascii_lowercase().as_str() {
            "ipp" => Self::Ipp,
            "ipps" => Self::Ipps,
            "lpd" => Self::Lpd,
            "socket" => Self::Socket,
            other => Self::Other(other.to_string()),
        }
    }

    /// Whether this scheme is handled by the external spooler command.
    pub fn is_spooled(&self) -> bool {
        matches!(self, Self::Ipp | Self::Ipps | Self::Lpd)
    }

    /// Scheme keyword for logging.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ipp => "ipp",
            Self::Ipps => "ipps",
            Self::Lpd => "lpd",
            Self::Socket => "socket",
            Self::Other(s) => s,
        }
    }
}

/// A normalized printer address.
///
/// `uri` is the canonical string handed to the spooler. For input that
/// already carried a scheme it is byte-identical to the
/// whitespace-stripped input, so normalization is idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterTarget {
    scheme: PrintScheme,
    host: Option<String>,
    port: Option<u16>,
    path: String,
    uri: String,
}

impl PrinterTarget {
    /// Canonicalize a free-form printer address.
    ///
    /// Empty (or all-whitespace) input is a validation failure, never a
    /// default target. Input with any `scheme://` prefix passes through
    /// unchanged; a bare host/IP becomes `ipp://<host>/ipp/print`.
    pub fn normalize(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DispatchError::EmptyAddress);
        }

        // Accidental spaces inside pasted addresses are never meaningful.
        let value: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();

        let canonical = if value.contains("://") {
            value
        } else {
            format!("ipp://{value}{DEFAULT_IPP_PATH}")
        };

        let parsed: Uri = canonical
            .parse()
            .map_err(|e| DispatchError::InvalidAddress(format!("'{canonical}': {e}")))?;

        let scheme = parsed
            .scheme_str()
            .map(PrintScheme::parse)
            .unwrap_or_else(|| PrintScheme::Other(String::new()));

        // Spooler-class targets without an explicit resource path print to
        // the conventional IPP endpoint.
        let parsed_path = parsed.path();
        let path = if scheme.is_spooled() && (parsed_path.is_empty() || parsed_path == "/") {
            DEFAULT_IPP_PATH.to_string()
        } else {
            parsed_path.to_string()
        };

        Ok(Self {
            scheme,
            host: parsed.host().map(str::to_string),
            port: parsed.port_u16(),
            path,
            uri: canonical,
        })
    }

    pub fn scheme(&self) -> &PrintScheme {
        &self.scheme
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Explicit port, if the address carried one.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Port for the raw-socket transport: explicit port, else 9100.
    pub fn socket_port(&self) -> u16 {
        self.port.unwrap_or(RAW_PORT)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The canonical URI string, as handed to the spooler.
    pub fn uri(&self) -> &str {
        &self.uri
    }
}
