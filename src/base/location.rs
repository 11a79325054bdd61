/// Location tracking for dialplan statements
///
/// The tokenizer hands each statement over together with the file and line
/// it came from. Every accepted step and every diagnostic carries one.
use std::fmt;

use super::Name;

/// A position in a dialplan source (1-indexed line, like the editor shows it)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub file: Name,
    pub line: u32,
}

impl Location {
    pub fn new(file: impl Into<Name>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
