//! Diagnostic code definitions
//!
//! Codes follow the `{severity}_{area}_{what}` convention:
//! - `E_`/`W_` prefix: error (statement or call dropped) or warning (kept)
//! - `DP_PRIO`: priority resolution in the dialplan core
//! - `APP`: application call checks

use std::fmt;

use super::Severity;

/// Diagnostic codes emitted by the analyzer
///
/// The string form (see [`DiagnosticCode::as_str`]) is stable and is what
/// reports and tests match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiagnosticCode {
    // =========================================================================
    // DP_PRIO: priority resolution
    // =========================================================================
    /// Priority is not a positive integer nor `n`
    PrioInvalid,
    /// Priority was already used (or lies below the last one) for this pattern
    PrioDupe,
    /// Continuation with nothing to continue from
    PrioMissing,
    /// Priority accepted, but not one more than the previous one
    PrioBadOrder,

    // =========================================================================
    // APP: application calls
    // =========================================================================
    /// Empty or unknown application name
    AppMissing,
    /// Application called without parentheses
    AppNeedParens,
    /// Fewer arguments than the application takes
    AppArgFew,
    /// More arguments than the application takes
    AppArgMany,
    /// Legacy `|` argument delimiter where only `,` is allowed
    AppArgPipeDelim,
    /// Conditional application without a `?` separator
    AppArgIfStyle,
}

impl DiagnosticCode {
    /// Get the stable string representation (e.g., "E_DP_PRIO_DUPE")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PrioInvalid => "E_DP_PRIO_INVALID",
            Self::PrioDupe => "E_DP_PRIO_DUPE",
            Self::PrioMissing => "E_DP_PRIO_MISSING",
            Self::PrioBadOrder => "W_DP_PRIO_BADORDER",
            Self::AppMissing => "E_APP_MISSING",
            Self::AppNeedParens => "W_APP_NEED_PARENS",
            Self::AppArgFew => "E_APP_ARG_FEW",
            Self::AppArgMany => "E_APP_ARG_MANY",
            Self::AppArgPipeDelim => "E_APP_ARG_PIPEDELIM",
            Self::AppArgIfStyle => "E_APP_ARG_IFSTYLE",
        }
    }

    /// Severity, as encoded by the `E_`/`W_` prefix
    pub fn severity(&self) -> Severity {
        match self {
            Self::PrioBadOrder | Self::AppNeedParens => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Get the default message template for this code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::PrioInvalid => "invalid priority",
            Self::PrioDupe => "duplicate priority",
            Self::PrioMissing => "no previous priority to continue from",
            Self::PrioBadOrder => "priority out of order",
            Self::AppMissing => "application name is missing",
            Self::AppNeedParens => "application call needs parentheses",
            Self::AppArgFew => "too few arguments",
            Self::AppArgMany => "too many arguments",
            Self::AppArgPipeDelim => "pipe delimiter is not allowed, use commas",
            Self::AppArgIfStyle => "expected condition?true:false",
        }
    }

    /// Whether this code comes from priority resolution
    pub fn is_priority(&self) -> bool {
        matches!(
            self,
            Self::PrioInvalid | Self::PrioDupe | Self::PrioMissing | Self::PrioBadOrder
        )
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
