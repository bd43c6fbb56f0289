// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the jetrelay print dispatcher.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DispatchError;

/// Unique identifier for a print job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A document to be printed: a path to a readable, already-materialized file.
///
/// The caller owns the file's lifecycle (creation and deletion); the
/// dispatcher only reads it and never deletes it. `name` is purely for
/// logging and spooler job identification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintJob {
    pub id: JobId,
    pub path: PathBuf,
    pub name: String,
    pub submitted_at: DateTime<Utc>,
}

impl PrintJob {
    /// Create a job for the document at `path`.
    ///
    /// The file is not opened here; readability is checked by the transport
    /// at send time.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        Self {
            id: JobId::new(),
            path,
            name,
            submitted_at: Utc::now(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Outcome of a single dispatch attempt.
///
/// `message` is always non-empty and human-readable: a success confirmation
/// or a diagnostic. There is no partial-success state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchResult {
    pub success: bool,
    pub message: String,
}

impl DispatchResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl From<crate::error::Result<String>> for DispatchResult {
    fn from(res: crate::error::Result<String>) -> Self {
        match res {
            Ok(message) => Self::ok(message),
            Err(err) => Self::fail(err.to_string()),
        }
    }
}

impl From<DispatchError> for DispatchResult {
    fn from(err: DispatchError) -> Self {
        Self::fail(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_name_defaults_to_file_name() {
        let job = PrintJob::new("/tmp/uploads/report.pdf");
        assert_eq!(job.name, "report.pdf");
    }

    #[test]
    fn job_ids_are_unique() {
        let a = PrintJob::new("/tmp/a.txt");
        let b = PrintJob::new("/tmp/a.txt");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn result_from_error_is_failure_with_message() {
        let result: DispatchResult = DispatchError::EmptyAddress.into();
        assert!(!result.success);
        assert_eq!(result.message, "Please provide a printer address.");
    }

    #[test]
    fn result_from_ok_carries_transport_message() {
        let result: DispatchResult = Ok("request id is printer-42".to_string()).into();
        assert!(result.success);
        assert_eq!(result.message, "request id is printer-42");
    }
}
