//! Tokenized dialplan statements, as handed over by the tokenizer.

use crate::base::{Location, Name};

use super::priority::PriorityToken;

/// Which pattern a statement applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PatternRef {
    /// `exten => pattern,...`
    Exten(Name),
    /// `same => ...`: the pattern of the previous statement in the context
    Same,
}

/// One `exten =>` or `same =>` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub context: Name,
    pub pattern: PatternRef,
    pub priority: PriorityToken,
    /// Raw application call text, e.g. `Gosub(sub,s,1)`.
    pub app: String,
    pub location: Location,
}

impl Statement {
    /// Build an `exten => pattern,prio,app` statement from raw fields.
    pub fn exten(
        context: impl Into<Name>,
        pattern: impl Into<Name>,
        priority: &str,
        app: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            context: context.into(),
            pattern: PatternRef::Exten(pattern.into()),
            priority: PriorityToken::parse(priority),
            app: app.into(),
            location,
        }
    }

    /// Build a `same => prio,app` statement from raw fields.
    pub fn same(
        context: impl Into<Name>,
        priority: &str,
        app: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            context: context.into(),
            pattern: PatternRef::Same,
            priority: PriorityToken::parse(priority),
            app: app.into(),
            location,
        }
    }
}
