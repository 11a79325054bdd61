//! Splitting an application call into name and argument data.

use crate::base::Name;

/// `Name(data)` as written in the third field of an extension line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppCall {
    pub name: Name,
    /// Everything between the parentheses, untouched.
    pub data: String,
    /// False for `Answer` or an unterminated `Dial(SIP/1`.
    pub parenthesized: bool,
}

impl AppCall {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let Some(open) = raw.find('(') else {
            return Self {
                name: Name::from(raw),
                data: String::new(),
                parenthesized: false,
            };
        };
        let rest = &raw[open + 1..];
        let (data, parenthesized) = match rest.strip_suffix(')') {
            Some(data) => (data, true),
            None => (rest, false),
        };
        Self {
            name: Name::from(raw[..open].trim_end()),
            data: data.to_string(),
            parenthesized,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}
