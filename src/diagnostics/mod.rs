//! Diagnostics — non-fatal analysis events.
//!
//! Every problem the analyzer finds is reported as a [`Diagnostic`] on one
//! shared, source-ordered stream. Nothing in the analyzer aborts: an `E_`
//! diagnostic means the statement (or call) was dropped, a `W_` diagnostic
//! means it was kept but flagged.

mod codes;

use indexmap::IndexMap;

use crate::base::Location;

pub use codes::DiagnosticCode;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// A diagnostic with its source location.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    /// Stable diagnostic code.
    pub code: DiagnosticCode,
    /// Severity level (derived from the code).
    pub severity: Severity,
    /// Where the offending statement lives.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Create a diagnostic with the code's default message.
    pub fn new(code: DiagnosticCode, location: Location) -> Self {
        Self {
            code,
            severity: code.severity(),
            location,
            message: code.default_message().to_string(),
        }
    }

    /// Replace the message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Format as `file:line: CODE: message`.
    pub fn format(&self) -> String {
        format!("{}: {}: {}", self.location, self.code, self.message)
    }
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics in emission (source) order.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(
            code = diagnostic.code.as_str(),
            location = %diagnostic.location,
            "{}",
            diagnostic.message
        );
        self.diagnostics.push(diagnostic);
    }

    /// Add a diagnostic with the code's default message.
    pub fn emit(&mut self, code: DiagnosticCode, location: &Location) {
        self.add(Diagnostic::new(code, location.clone()));
    }

    /// Get all diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Count diagnostics per code, in order of first emission.
    pub fn counts(&self) -> IndexMap<DiagnosticCode, usize> {
        let mut counts = IndexMap::new();
        for d in &self.diagnostics {
            *counts.entry(d.code).or_insert(0) += 1;
        }
        counts
    }

    /// Count diagnostics with the given code.
    pub fn count(&self, code: DiagnosticCode) -> usize {
        self.diagnostics.iter().filter(|d| d.code == code).count()
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// Get the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Take all diagnostics, leaving the collector empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}
