//! Foundation types for the dialplan analyzer.
//!
//! This module provides the small value types used throughout the crate:
//! - [`Name`] - Context, pattern, label and application names
//! - [`Location`] - Source position of a statement (file + line)
//!
//! This module has NO dependencies on other dplint modules.

mod location;

pub use location::Location;

/// A cheap-to-clone name (context, pattern, label, application).
///
/// Dialplan names are short, so `SmolStr` keeps them inline without
/// allocating.
pub type Name = smol_str::SmolStr;
