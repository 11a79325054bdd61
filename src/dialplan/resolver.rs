//! Priority resolution.
//!
//! Turns raw priority tokens into absolute priorities, one statement at a
//! time, in source order. The resolver owns all cursor state:
//!
//! - per (context, pattern): the last accepted priority
//! - per context: the "last touched" (pattern, priority), whatever the
//!   pattern; this is what a legacy `n` continues from
//! - globally: the last context that received a statement, for the optional
//!   cross-context carry-over
//!
//! ## Continuation carry-over
//!
//! ```text
//! exten => 10,1,NoOp(a)      10 → 1
//! exten => 10,n,NoOp(b)      10 → 2
//! exten => 20,1,NoOp(c)      20 → 1
//! exten => 10,n,NoOp(d)      continues from 20,1: 10,2 is taken → DUPE + BADORDER
//! exten => 10,n,NoOp(e)      continues from the attempted 2: 10 → 3, BADORDER
//! exten => 10,n,NoOp(f)      10 → 4
//! ```

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::base::Name;
use crate::diagnostics::DiagnosticCode;

use super::priority::{Priority, RawPriority};
use super::statement::PatternRef;

/// Outcome of resolving one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The statement becomes a step with this pattern and priority.
    Accept {
        pattern: Name,
        priority: Priority,
        /// Tolerated, but flagged `W_DP_PRIO_BADORDER`.
        bad_order: bool,
    },
    /// The statement is dropped.
    Reject {
        error: DiagnosticCode,
        /// The carry-over collision also flags `W_DP_PRIO_BADORDER`.
        bad_order: bool,
    },
}

impl Resolution {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accept { .. })
    }

    pub fn priority(&self) -> Option<Priority> {
        match self {
            Self::Accept { priority, .. } => Some(*priority),
            Self::Reject { .. } => None,
        }
    }

    /// Diagnostic codes this resolution emits, in emission order.
    pub fn codes(&self) -> Vec<DiagnosticCode> {
        match self {
            Self::Accept { bad_order, .. } => {
                if *bad_order {
                    vec![DiagnosticCode::PrioBadOrder]
                } else {
                    Vec::new()
                }
            }
            Self::Reject { error, bad_order } => {
                let mut codes = vec![*error];
                if *bad_order {
                    codes.push(DiagnosticCode::PrioBadOrder);
                }
                codes
            }
        }
    }

    fn reject(error: DiagnosticCode) -> Self {
        Self::Reject {
            error,
            bad_order: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Touched {
    pattern: Name,
    priority: Priority,
}

#[derive(Debug, Default)]
struct ContextCursor {
    /// Statements seen in this context, accepted or not.
    statements: usize,
    /// Pattern of the most recent statement (for `same =>`).
    last_pattern: Option<Name>,
    last_touched: Option<Touched>,
    patterns: FxHashMap<Name, Priority>,
}

/// Resolves raw priorities into absolute ones.
#[derive(Debug, Default)]
pub struct PriorityResolver {
    contexts: FxHashMap<Name, ContextCursor>,
    last_context: Option<Name>,
    cross_context_carry_over: bool,
}

impl PriorityResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Let a continuation that opens a context continue from the previous
    /// context's cursor (Asterisk 1.4 behavior; later versions drop it).
    pub fn with_cross_context_carry_over(mut self, enabled: bool) -> Self {
        self.cross_context_carry_over = enabled;
        self
    }

    /// Last accepted priority for (context, pattern).
    pub fn last_priority(&self, context: &str, pattern: &str) -> Option<Priority> {
        self.contexts
            .get(context)
            .and_then(|c| c.patterns.get(pattern).copied())
    }

    /// Resolve one statement. Must be called in source order.
    pub fn resolve(
        &mut self,
        context: &str,
        pattern: &PatternRef,
        raw: &RawPriority,
    ) -> Resolution {
        let inherited = self.inherited_cursor(context, raw);
        self.last_context = Some(Name::from(context));

        let cursor = self.contexts.entry(Name::from(context)).or_default();
        cursor.statements += 1;

        let pattern = match pattern {
            PatternRef::Exten(name) => name.clone(),
            PatternRef::Same => match &cursor.last_pattern {
                Some(name) => name.clone(),
                None => {
                    trace!(context, "same => without a previous pattern");
                    return Resolution::reject(DiagnosticCode::PrioMissing);
                }
            },
        };
        cursor.last_pattern = Some(pattern.clone());

        let resolution = match raw {
            RawPriority::Malformed(_) => Resolution::reject(DiagnosticCode::PrioInvalid),
            RawPriority::Explicit(n) => Self::resolve_explicit(cursor, pattern, Priority::from(*n)),
            RawPriority::Continuation => Self::resolve_continuation(cursor, pattern, inherited),
        };
        trace!(context, %raw, ?resolution, "resolved priority");
        resolution
    }

    /// Cursor a brand-new context inherits when carry-over is enabled.
    fn inherited_cursor(&self, context: &str, raw: &RawPriority) -> Option<Touched> {
        if !self.cross_context_carry_over || !raw.is_continuation() {
            return None;
        }
        if self.contexts.get(context).is_some_and(|c| c.statements > 0) {
            return None;
        }
        let previous = self.last_context.as_ref().filter(|name| name.as_str() != context)?;
        self.contexts.get(previous)?.last_touched.clone()
    }

    fn resolve_explicit(cursor: &mut ContextCursor, pattern: Name, n: Priority) -> Resolution {
        let bad_order = match cursor.patterns.get(&pattern) {
            None => n != Priority::FIRST,
            Some(&last) if n <= last => return Resolution::reject(DiagnosticCode::PrioDupe),
            Some(&last) => last.next() != Some(n),
        };
        Self::accept(cursor, pattern, n, bad_order)
    }

    /// `inherited` only takes effect when the statement is accepted.
    fn resolve_continuation(
        cursor: &mut ContextCursor,
        pattern: Name,
        inherited: Option<Touched>,
    ) -> Resolution {
        let last_same = cursor.patterns.get(&pattern).copied();
        let Some(touched) = cursor.last_touched.clone().or(inherited) else {
            return Resolution::reject(DiagnosticCode::PrioMissing);
        };

        if let Some(last) = last_same {
            if touched.pattern == pattern {
                return match last.next() {
                    Some(next) => Self::accept(cursor, pattern, next, false),
                    None => Resolution::reject(DiagnosticCode::PrioInvalid),
                };
            }
        }

        // Legacy carry-over: continue from whatever pattern was touched last.
        let Some(candidate) = touched.priority.next() else {
            return Resolution::reject(DiagnosticCode::PrioInvalid);
        };
        if last_same.is_some_and(|last| candidate <= last) {
            // The attempt still moves the context counter along.
            if let Some(t) = cursor.last_touched.as_mut() {
                t.priority = candidate;
            }
            return Resolution::Reject {
                error: DiagnosticCode::PrioDupe,
                bad_order: true,
            };
        }
        Self::accept(cursor, pattern, candidate, true)
    }

    fn accept(
        cursor: &mut ContextCursor,
        pattern: Name,
        priority: Priority,
        bad_order: bool,
    ) -> Resolution {
        cursor.patterns.insert(pattern.clone(), priority);
        cursor.last_touched = Some(Touched {
            pattern: pattern.clone(),
            priority,
        });
        Resolution::Accept {
            pattern,
            priority,
            bad_order,
        }
    }
}
