//! Analyzer configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Which Asterisk numbering behavior to reproduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CompatMode {
    /// Current versions: a context starts with fresh priority cursors.
    #[default]
    Modern,
    /// Asterisk 1.4: an `n` opening a context continues from the previous one.
    Legacy,
}

impl CompatMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Legacy => "legacy",
        }
    }
}

impl FromStr for CompatMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "modern" | "11" => Ok(Self::Modern),
            "legacy" | "1.4" => Ok(Self::Legacy),
            _ => Err(ConfigError::UnknownCompat(s.to_string())),
        }
    }
}

impl fmt::Display for CompatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnalyzerConfig {
    /// Let a continuation that opens a context inherit the previous
    /// context's cursor. Off unless asked for.
    pub cross_context_carry_over: bool,
    /// Run application checks on accepted steps.
    pub check_apps: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            cross_context_carry_over: false,
            check_apps: true,
        }
    }
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration matching a compatibility mode.
    pub fn for_compat(mode: CompatMode) -> Self {
        Self::default().with_cross_context_carry_over(mode == CompatMode::Legacy)
    }

    pub fn with_cross_context_carry_over(mut self, enabled: bool) -> Self {
        self.cross_context_carry_over = enabled;
        self
    }

    pub fn with_check_apps(mut self, enabled: bool) -> Self {
        self.check_apps = enabled;
        self
    }
}
