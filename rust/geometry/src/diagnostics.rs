// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! User-facing diagnostic messages.
//!
//! The validator and the floor command report failures as short, verbatim
//! messages to a [`DiagnosticSink`]. What the sink does with them (a dialog,
//! a log line, a JSON report) is up to the caller.

use serde::Serialize;

/// Message category, matching the titles shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "Success",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single emitted message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

/// Receives diagnostic messages.
pub trait DiagnosticSink {
    fn emit(&mut self, severity: Severity, message: &str);
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, severity: Severity, message: &str) {
        match severity {
            Severity::Success => tracing::info!(%severity, "{message}"),
            Severity::Warning => tracing::warn!(%severity, "{message}"),
            Severity::Error => tracing::error!(%severity, "{message}"),
        }
    }
}

/// Keeps every diagnostic in emission order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    diagnostics: Vec<Diagnostic>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// The most recent message, if any.
    pub fn last(&self) -> Option<&Diagnostic> {
        self.diagnostics.last()
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&mut self, severity: Severity, message: &str) {
        self.diagnostics.push(Diagnostic {
            severity,
            message: message.to_owned(),
        });
    }
}

/// Sends each diagnostic to two sinks.
pub struct Tee<'a, A: DiagnosticSink + ?Sized, B: DiagnosticSink + ?Sized> {
    pub first: &'a mut A,
    pub second: &'a mut B,
}

impl<A: DiagnosticSink + ?Sized, B: DiagnosticSink + ?Sized> DiagnosticSink for Tee<'_, A, B> {
    fn emit(&mut self, severity: Severity, message: &str) {
        self.first.emit(severity, message);
        self.second.emit(severity, message);
    }
}
