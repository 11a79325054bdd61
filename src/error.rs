//! Error types for the analyzer's own API.
//!
//! Problems found in the analyzed dialplan are never errors; they are
//! [`Diagnostic`](crate::diagnostics::Diagnostic)s. These are for misuse of
//! the library, such as an unrecognized configuration value.

use thiserror::Error;

/// Errors that can occur while building an analyzer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Compatibility mode string not recognized.
    #[error("unknown compatibility mode '{0}' (expected 'modern', 'legacy', '1.4' or '11')")]
    UnknownCompat(String),
}
