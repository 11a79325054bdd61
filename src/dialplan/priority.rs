//! Priority tokens and absolute priorities.
//!
//! A priority token is what the tokenizer found in the second field of an
//! `exten =>` / `same =>` line: `1`, `n`, `n(label)`, `2(label)` or garbage.

use std::fmt;
use std::num::NonZeroU32;

use crate::base::Name;

/// Raw priority, before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawPriority {
    /// An explicit positive number (`1`, `2`, ...)
    Explicit(NonZeroU32),
    /// The `n` marker: one more than the previous priority
    Continuation,
    /// Anything else (empty, `0`, negative, non-numeric); keeps the text
    Malformed(String),
}

impl RawPriority {
    /// Parse a priority token without a label.
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        if token == "n" {
            return Self::Continuation;
        }
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            if let Some(n) = token.parse::<u32>().ok().and_then(NonZeroU32::new) {
                return Self::Explicit(n);
            }
        }
        Self::Malformed(token.to_string())
    }

    pub fn explicit(n: u32) -> Self {
        match NonZeroU32::new(n) {
            Some(n) => Self::Explicit(n),
            None => Self::Malformed(n.to_string()),
        }
    }

    pub fn is_continuation(&self) -> bool {
        matches!(self, Self::Continuation)
    }
}

impl fmt::Display for RawPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(n) => write!(f, "{}", n),
            Self::Continuation => f.write_str("n"),
            Self::Malformed(text) => f.write_str(text),
        }
    }
}

/// A priority token together with its optional label, e.g. `n(retry)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PriorityToken {
    pub raw: RawPriority,
    pub label: Option<Name>,
}

impl PriorityToken {
    /// Parse `prio` or `prio(label)`.
    ///
    /// A label with an unbalanced or empty parenthesis makes the whole token
    /// malformed.
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        let Some(open) = token.find('(') else {
            return Self::from(RawPriority::parse(token));
        };
        let label = token[open + 1..].strip_suffix(')').map(str::trim);
        match label {
            Some(label) if !label.is_empty() && !label.contains(['(', ')']) => Self {
                raw: RawPriority::parse(&token[..open]),
                label: Some(Name::from(label)),
            },
            _ => Self::from(RawPriority::Malformed(token.to_string())),
        }
    }
}

impl From<RawPriority> for PriorityToken {
    fn from(raw: RawPriority) -> Self {
        Self { raw, label: None }
    }
}

/// An absolute, resolved priority (always >= 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Priority(NonZeroU32);

impl Priority {
    pub const FIRST: Priority = Priority(NonZeroU32::MIN);

    pub fn new(n: u32) -> Option<Self> {
        NonZeroU32::new(n).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// The priority right after this one; `None` on overflow.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl From<NonZeroU32> for Priority {
    fn from(n: NonZeroU32) -> Self {
        Self(n)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
