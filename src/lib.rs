//! # dialplan-lint
//!
//! Priority resolution and ordering diagnostics for Asterisk-style dialplans.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! analysis    → Analyzer driver, configuration
//!   ↓
//! apps        → Application dispatch table, argument checks
//!   ↓
//! jumps       → Jump destinations referenced by Gosub/Goto
//!   ↓
//! dialplan    → Statements, PriorityResolver, Context, ExtensionStep
//!   ↓
//! diagnostics → Diagnostic codes, Diagnostic, DiagnosticCollector
//!   ↓
//! base        → Primitives (Name, Location)
//! ```
//!
//! Tokenizing configuration files is not done here: callers feed
//! already-tokenized [`Statement`]s, in source order.
//!
//! ```
//! use dplint::{Analyzer, JumpRegistry, Location, Statement};
//!
//! let mut analyzer = Analyzer::default();
//! let mut jumps = JumpRegistry::new();
//! for (line, prio) in [(1, "1"), (2, "n"), (3, "n")] {
//!     let location = Location::new("extensions.conf", line);
//!     let stmt = Statement::exten("default", "s", prio, "NoOp()", location);
//!     analyzer.process(stmt, &mut jumps);
//! }
//! let ctx = analyzer.dialplan().context("default").unwrap();
//! let prios: Vec<u32> = ctx.steps().iter().map(|s| s.priority.get()).collect();
//! assert_eq!(prios, vec![1, 2, 3]);
//! ```

// ============================================================================
// MODULES (dependency order: base → diagnostics → dialplan → jumps → apps → analysis)
// ============================================================================

/// Foundation types: Name, Location
pub mod base;

/// Diagnostic codes and collection
pub mod diagnostics;

/// Statements, priority resolution, contexts
pub mod dialplan;

/// Jump destination registry
pub mod jumps;

/// Application dispatch table and argument checks
pub mod apps;

/// Streaming analyzer and configuration
pub mod analysis;

/// Errors of the library API
pub mod error;

// Re-export commonly needed items
pub use analysis::{Analysis, Analyzer, AnalyzerConfig, CompatMode, StatementOutcome, analyze};
pub use base::{Location, Name};
pub use diagnostics::{Diagnostic, DiagnosticCode, DiagnosticCollector, Severity};
pub use dialplan::{Context, Dialplan, ExtensionStep, PatternRef, Priority, RawPriority, Statement};
pub use error::ConfigError;
pub use jumps::{JumpDestination, JumpPriority, JumpRegistry};
