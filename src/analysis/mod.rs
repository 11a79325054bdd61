//! Analysis driver — feeds statements through the resolver, one at a time.
//!
//! ```text
//! Statement ──► PriorityResolver ──► Accept ──► AppTable::check ──► Context
//!                     │                              │
//!                     └── Reject ──► diagnostics ◄───┘──► JumpRegistry
//! ```
//!
//! The [`Analyzer`] never needs the whole input: statements can be pushed
//! as the tokenizer produces them. The [`JumpRegistry`] is owned by the
//! caller and passed into every call.

mod config;

use tracing::debug;

use crate::apps::{AppArgs, AppTable};
use crate::diagnostics::{Diagnostic, DiagnosticCode, DiagnosticCollector};
use crate::dialplan::{
    Dialplan, ExtensionStep, PatternRef, Priority, PriorityResolver, Resolution, Statement,
};
use crate::jumps::JumpRegistry;

pub use config::{AnalyzerConfig, CompatMode};

/// What happened to one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementOutcome {
    /// Became a step at this priority.
    Accepted {
        priority: Priority,
        /// Parsed application arguments, when the call checked out.
        args: Option<AppArgs>,
    },
    /// Dropped, with the error that dropped it.
    Rejected(DiagnosticCode),
}

impl StatementOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Result of a finished analysis.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub dialplan: Dialplan,
    pub diagnostics: Vec<Diagnostic>,
}

/// Streaming dialplan analyzer.
#[derive(Debug)]
pub struct Analyzer {
    config: AnalyzerConfig,
    resolver: PriorityResolver,
    apps: AppTable,
    dialplan: Dialplan,
    diagnostics: DiagnosticCollector,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            resolver: PriorityResolver::new()
                .with_cross_context_carry_over(config.cross_context_carry_over),
            apps: AppTable::builtin(),
            dialplan: Dialplan::new(),
            diagnostics: DiagnosticCollector::new(),
            config,
        }
    }

    /// Replace the application table.
    pub fn with_apps(mut self, apps: AppTable) -> Self {
        self.apps = apps;
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn dialplan(&self) -> &Dialplan {
        &self.dialplan
    }

    pub fn diagnostics(&self) -> &DiagnosticCollector {
        &self.diagnostics
    }

    /// Process one statement, in source order.
    pub fn process(&mut self, statement: Statement, jumps: &mut JumpRegistry) -> StatementOutcome {
        let Statement {
            context,
            pattern,
            priority: token,
            app,
            location,
        } = statement;

        let resolution = self.resolver.resolve(&context, &pattern, &token.raw);
        let shown_pattern = match (&resolution, &pattern) {
            (Resolution::Accept { pattern, .. }, _) | (_, PatternRef::Exten(pattern)) => {
                pattern.as_str()
            }
            (_, PatternRef::Same) => "same",
        };
        for code in resolution.codes() {
            let raw = &token.raw;
            let message = match code {
                DiagnosticCode::PrioInvalid => {
                    format!("invalid priority '{}' for pattern '{}'", raw, shown_pattern)
                }
                DiagnosticCode::PrioDupe => {
                    format!("duplicate priority '{}' for pattern '{}'", raw, shown_pattern)
                }
                DiagnosticCode::PrioMissing => format!(
                    "priority '{}' for pattern '{}' has nothing to continue from",
                    raw, shown_pattern
                ),
                _ => match resolution.priority() {
                    Some(priority) => format!(
                        "priority {} for pattern '{}' is out of order",
                        priority, shown_pattern
                    ),
                    None => format!(
                        "priority '{}' for pattern '{}' is out of order",
                        raw, shown_pattern
                    ),
                },
            };
            self.diagnostics
                .add(Diagnostic::new(code, location.clone()).with_message(message));
        }

        // The context exists from its first statement on, accepted or not.
        self.dialplan.get_or_create(&context);

        match resolution {
            Resolution::Reject { error, .. } => {
                debug!(%location, code = error.as_str(), "dropped statement");
                StatementOutcome::Rejected(error)
            }
            Resolution::Accept {
                pattern, priority, ..
            } => {
                let args = if self.config.check_apps {
                    self.apps.check(&app, &location, &mut self.diagnostics, jumps)
                } else {
                    None
                };
                let step = ExtensionStep {
                    context: context.clone(),
                    pattern,
                    priority,
                    label: token.label,
                    app,
                    location,
                };
                self.dialplan.get_or_create(&context).push(step);
                StatementOutcome::Accepted { priority, args }
            }
        }
    }

    /// Process every statement of an iterator.
    pub fn analyze<I>(&mut self, statements: I, jumps: &mut JumpRegistry)
    where
        I: IntoIterator<Item = Statement>,
    {
        for statement in statements {
            self.process(statement, jumps);
        }
    }

    /// Stop analyzing and hand over the results.
    pub fn finish(mut self) -> Analysis {
        Analysis {
            diagnostics: self.diagnostics.take(),
            dialplan: self.dialplan,
        }
    }
}

/// Analyze a whole statement stream with a fresh analyzer.
pub fn analyze<I>(statements: I, config: AnalyzerConfig, jumps: &mut JumpRegistry) -> Analysis
where
    I: IntoIterator<Item = Statement>,
{
    let mut analyzer = Analyzer::new(config);
    analyzer.analyze(statements, jumps);
    analyzer.finish()
}
