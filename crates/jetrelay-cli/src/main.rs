// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Jetrelay CLI — the caller side of the dispatch contract. Validates the
// document against the extension allowlist, runs one dispatch, presents the
// result, and sets the exit code. The document file belongs to the user and
// is never deleted here.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use jetrelay_core::config::DispatchConfig;
use jetrelay_core::human_errors::humanize_error;
use jetrelay_core::types::{DispatchResult, PrintJob};
use jetrelay_print::Dispatcher;

/// File extensions accepted for printing. A name without any extension
/// passes — printers routinely receive extension-less spool files.
const ALLOWED_EXTENSIONS: &[&str] = &[
    "pdf", "png", "jpg", "jpeg", "gif", "bmp", "tiff", "txt", "doc", "docx", "ppt", "pptx", "xls",
    "xlsx",
];

#[derive(Debug, Parser)]
#[command(
    name = "jetrelay",
    version,
    about = "Send a document to a network printer via the CUPS spooler or raw TCP"
)]
struct Args {
    /// Printer address: a bare IP/hostname, or a full ipp://, ipps://,
    /// lpd:// or socket:// URI.
    printer: String,

    /// Document to print.
    file: PathBuf,

    /// Print-spooling command used for ipp/ipps/lpd targets.
    #[arg(long, default_value = "lp")]
    spooler: String,

    /// Timeout in seconds for raw-socket delivery.
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Emit the result as JSON instead of prose.
    #[arg(long)]
    json: bool,
}

fn allowed_file(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    match name.rsplit_once('.') {
        None => true,
        Some((_, ext)) => ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    tracing::debug!(printer = %args.printer, file = %args.file.display(), "jetrelay starting");

    let file_name = args
        .file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if !allowed_file(&file_name) {
        eprintln!("Unsupported file type. Use a standard document or image format.");
        return ExitCode::FAILURE;
    }
    if !args.file.is_file() {
        eprintln!("No such file: {}", args.file.display());
        return ExitCode::FAILURE;
    }

    let config = DispatchConfig {
        spooler_command: args.spooler,
        socket_timeout_secs: args.timeout_secs,
    };
    let dispatcher = Dispatcher::new(config);
    let job = PrintJob::new(&args.file);

    match dispatcher.try_dispatch(&args.printer, &job).await {
        Ok(message) => {
            if args.json {
                let result = DispatchResult::ok(message);
                println!("{}", serde_json::to_string(&result).unwrap_or_default());
            } else {
                println!("{message}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            let human = humanize_error(&err);
            if args.json {
                let payload = serde_json::json!({
                    "success": false,
                    "message": err.to_string(),
                    "suggestion": human.suggestion,
                    "retriable": human.retriable,
                });
                println!("{payload}");
            } else {
                eprintln!("{err}");
                eprintln!("{}", human.suggestion);
            }
            ExitCode::FAILURE
        }
    }
}
