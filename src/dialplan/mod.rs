//! Dialplan core — statements, priority resolution, contexts.
//!
//! ## Key Types
//!
//! - [`Statement`] — one tokenized `exten =>` / `same =>` line
//! - [`PriorityResolver`] — raw priority → absolute [`Priority`]
//! - [`Context`] — append-only list of accepted [`ExtensionStep`]s
//! - [`Dialplan`] — all contexts, in order of first appearance

mod context;
mod priority;
mod resolver;
mod statement;

use indexmap::IndexMap;

use crate::base::Name;

pub use context::{Context, ExtensionStep, PatternGroup};
pub use priority::{Priority, PriorityToken, RawPriority};
pub use resolver::{PriorityResolver, Resolution};
pub use statement::{PatternRef, Statement};

/// All contexts seen so far.
///
/// A context exists from the first statement naming it, even if every one
/// of its statements was rejected.
#[derive(Debug, Clone, Default)]
pub struct Dialplan {
    contexts: IndexMap<Name, Context>,
}

impl Dialplan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.get(name)
    }

    /// Contexts in order of first appearance.
    pub fn contexts(&self) -> impl ExactSizeIterator<Item = &Context> {
        self.contexts.values()
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    /// Total number of accepted steps.
    pub fn step_count(&self) -> usize {
        self.contexts.values().map(Context::len).sum()
    }

    pub(crate) fn get_or_create(&mut self, name: &Name) -> &mut Context {
        self.contexts
            .entry(name.clone())
            .or_insert_with(|| Context::new(name.clone()))
    }
}
