//! Jump destinations referenced by `Gosub`/`Goto` style applications.
//!
//! Destinations are recorded as given; checking them against the accepted
//! steps is left to whoever consumes the registry once the whole dialplan
//! has been read.

use std::fmt;

use crate::base::{Location, Name};

/// Priority part of a destination: a number or a priority label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JumpPriority {
    Number(u32),
    Named(Name),
}

impl JumpPriority {
    /// Parse a priority argument. Subroutine arguments, as in
    /// `1(arg1,arg2)`, are not part of the destination.
    pub fn parse(arg: &str) -> Self {
        let arg = arg.trim();
        let arg = arg.split_once('(').map_or(arg, |(priority, _)| priority.trim_end());
        match arg.parse::<u32>() {
            Ok(n) if arg.bytes().all(|b| b.is_ascii_digit()) => Self::Number(n),
            _ => Self::Named(Name::from(arg)),
        }
    }
}

impl fmt::Display for JumpPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// A `(context, label, priority)` triple. `None` means "same as the caller".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JumpDestination {
    pub context: Option<Name>,
    pub label: Option<Name>,
    pub priority: Option<JumpPriority>,
}

impl JumpDestination {
    /// Build a destination from 1–3 positional arguments.
    ///
    /// The arguments are right-aligned: one argument is a priority, two are
    /// label and priority, three are the full triple. Returns `None` for
    /// more than three arguments.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Option<Self> {
        let args: Vec<Option<&str>> = args.iter().map(|a| Some(a.as_ref())).collect();
        let [context, label, priority] =
            <[Option<&str>; 3]>::try_from(pad_left(args, 3, None)).ok()?;
        Some(Self {
            context: context.map(Name::from),
            label: label.map(Name::from),
            priority: priority.map(JumpPriority::parse),
        })
    }
}

impl fmt::Display for JumpDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let part = |p: Option<String>| p.unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "({}, {}, {})",
            part(self.context.as_ref().map(|c| c.to_string())),
            part(self.label.as_ref().map(|l| l.to_string())),
            part(self.priority.as_ref().map(|p| p.to_string()))
        )
    }
}

/// Left-pad `list` with `absent` up to `width` items.
///
/// Lists already at or above `width` are returned unchanged.
pub fn pad_left<T: Clone>(list: Vec<T>, width: usize, absent: T) -> Vec<T> {
    let missing = width.saturating_sub(list.len());
    let mut padded = vec![absent; missing];
    padded.extend(list);
    padded
}

/// A registered destination and the call that referenced it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JumpEntry {
    pub destination: JumpDestination,
    pub location: Location,
}

/// Append-only list of jump destinations (no dedup, no validation).
#[derive(Debug, Clone, Default)]
pub struct JumpRegistry {
    entries: Vec<JumpEntry>,
}

impl JumpRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, destination: JumpDestination, location: Location) {
        tracing::debug!(%destination, %location, "registered jump destination");
        self.entries.push(JumpEntry {
            destination,
            location,
        });
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &JumpEntry> {
        self.entries.iter()
    }

    pub fn destinations(&self) -> impl Iterator<Item = &JumpDestination> {
        self.entries.iter().map(|e| &e.destination)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
