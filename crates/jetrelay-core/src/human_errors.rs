// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error presentation.
//
// Every dispatch error is mapped to a plain-English summary plus a clear
// suggestion. The severity levels drive how a front-end presents the
// failure (and whether a retry is even worth offering).

use crate::error::DispatchError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Network blip, timeout — trying again may succeed.
    Transient,
    /// User must do something (type an address, install CUPS).
    ActionRequired,
    /// Cannot be fixed by retrying — wrong protocol, malformed address.
    Permanent,
}

/// A human-readable error with a plain-English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain-English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Whether retrying the same dispatch could help.
    pub retriable: bool,
    pub severity: Severity,
}

/// Convert a [`DispatchError`] into presentation-ready guidance.
pub fn humanize_error(err: &DispatchError) -> HumanError {
    match err {
        DispatchError::EmptyAddress => HumanError {
            message: "No printer address was given.".into(),
            suggestion: "Type the printer's IP address, or a full ipp://, ipps://, lpd:// or socket:// URI.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        DispatchError::InvalidAddress(detail) => HumanError {
            message: "The printer address couldn't be understood.".into(),
            suggestion: format!("Check the address for typos and try again. ({detail})"),
            retriable: false,
            severity: Severity::Permanent,
        },

        DispatchError::UnsupportedProtocol(scheme) => HumanError {
            message: format!("'{scheme}://' printing isn't supported."),
            suggestion: "Use ipp://, ipps://, lpd://, socket://, or just the printer's IP address.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        DispatchError::SpoolerUnavailable(command) => HumanError {
            message: format!("The '{command}' print command is missing."),
            suggestion: "Install CUPS (or your system's print spooler), then try again.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        DispatchError::SpoolerFailure(detail) => HumanError {
            message: "The print spooler rejected the job.".into(),
            suggestion: format!("Check that the printer address is correct and the printer is online. ({detail})"),
            retriable: true,
            severity: Severity::Transient,
        },

        DispatchError::UnresolvableHost => HumanError {
            message: "The address doesn't name a printer host.".into(),
            suggestion: "Include a hostname or IP address, e.g. socket://192.168.1.50.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        DispatchError::Network(detail) => {
            let timed_out = detail.contains("timed out") || detail.contains("timeout");
            HumanError {
                message: if timed_out {
                    "The printer didn't respond in time.".into()
                } else {
                    "We couldn't reach the printer.".into()
                },
                suggestion: "Make sure the printer is turned on and on the same network, then try again.".into(),
                retriable: true,
                severity: Severity::Transient,
            }
        }

        DispatchError::Io(detail) => HumanError {
            message: "The document couldn't be read.".into(),
            suggestion: format!("Check that the file exists and is readable. ({detail})"),
            retriable: false,
            severity: Severity::Permanent,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_address_requires_action() {
        let human = humanize_error(&DispatchError::EmptyAddress);
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(!human.retriable);
    }

    #[test]
    fn timeout_is_transient_and_retriable() {
        let err = DispatchError::Network("connection to 10.0.0.9:9100 timed out after 10s".into());
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::Transient);
        assert!(human.retriable);
        assert!(human.message.contains("didn't respond"));
    }

    #[test]
    fn unsupported_protocol_names_the_scheme() {
        let err = DispatchError::UnsupportedProtocol("http".into());
        let human = humanize_error(&err);
        assert!(human.message.contains("http"));
        assert_eq!(human.severity, Severity::Permanent);
    }
}
