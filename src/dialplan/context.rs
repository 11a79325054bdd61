//! Contexts and their accepted steps.

use indexmap::IndexMap;

use crate::base::{Location, Name};

use super::priority::Priority;

/// An accepted routing step. Never mutated after acceptance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionStep {
    pub context: Name,
    pub pattern: Name,
    pub priority: Priority,
    /// Label from `n(label)` / `1(label)`, a jump target.
    pub label: Option<Name>,
    /// Raw application call text.
    pub app: String,
    pub location: Location,
}

/// Steps of one pattern, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternGroup<'a> {
    pub pattern: &'a str,
    pub steps: Vec<&'a ExtensionStep>,
}

/// A named, append-only list of steps in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    name: Name,
    steps: Vec<ExtensionStep>,
}

impl Context {
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accepted steps, in source order regardless of pattern.
    pub fn steps(&self) -> &[ExtensionStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Group steps by pattern.
    ///
    /// Groups appear in order of each pattern's first step. Within a group
    /// priorities already increase in source order, so this is a stable
    /// partition rather than a sort.
    pub fn by_pattern(&self) -> Vec<PatternGroup<'_>> {
        let mut groups: IndexMap<&str, Vec<&ExtensionStep>> = IndexMap::new();
        for step in &self.steps {
            groups.entry(step.pattern.as_str()).or_default().push(step);
        }
        groups
            .into_iter()
            .map(|(pattern, steps)| PatternGroup { pattern, steps })
            .collect()
    }

    /// All steps, pattern group after pattern group.
    pub fn by_pattern_flat(&self) -> impl Iterator<Item = &ExtensionStep> + '_ {
        self.by_pattern().into_iter().flat_map(|group| group.steps)
    }

    /// Steps of a single pattern, in priority order.
    pub fn pattern_steps<'a>(
        &'a self,
        pattern: &'a str,
    ) -> impl Iterator<Item = &'a ExtensionStep> + 'a {
        self.steps.iter().filter(move |s| s.pattern.as_str() == pattern)
    }

    /// Find the step carrying `label` within `pattern`.
    pub fn find_label(&self, pattern: &str, label: &str) -> Option<&ExtensionStep> {
        self.steps
            .iter()
            .find(|s| s.pattern.as_str() == pattern && s.label.as_deref() == Some(label))
    }

    /// Find the step at (pattern, priority).
    pub fn find_priority(&self, pattern: &str, priority: Priority) -> Option<&ExtensionStep> {
        self.steps
            .iter()
            .find(|s| s.pattern.as_str() == pattern && s.priority == priority)
    }

    pub(crate) fn push(&mut self, step: ExtensionStep) {
        debug_assert_eq!(step.context, self.name);
        debug_assert!(
            self.pattern_steps(&step.pattern)
                .last()
                .is_none_or(|prev| prev.priority < step.priority),
            "priorities must increase within a pattern"
        );
        self.steps.push(step);
    }
}
