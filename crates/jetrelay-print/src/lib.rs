// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Jetrelay Print — printer-target normalization and job dispatch. This crate
// bridges between the core domain types defined in `jetrelay-core` and the
// two actual delivery paths: the external print spooler (ipp/ipps/lpd) and
// raw TCP streaming (socket, JetDirect-style).

pub mod dispatch;
pub mod raw_client;
pub mod spooler;
pub mod target;

pub use dispatch::Dispatcher;
pub use spooler::{CommandRunner, SystemCommandRunner};
pub use target::{PrintScheme, PrinterTarget};
