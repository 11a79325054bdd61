//! Argument splitting and arity checks.

use thiserror::Error;

use crate::diagnostics::DiagnosticCode;

/// Problems with an application's arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgError {
    #[error("{app}: expected at least {min} argument(s), got {got}")]
    TooFew { app: &'static str, min: usize, got: usize },

    #[error("{app}: expected at most {max} argument(s), got {got}")]
    TooMany { app: &'static str, max: usize, got: usize },

    #[error("{app}: arguments are delimited by '|', use ',' instead")]
    PipeDelimiter { app: &'static str },

    #[error("{app}: expected condition?iftrue:iffalse")]
    NotIfStyle { app: &'static str },
}

impl ArgError {
    pub fn code(&self) -> DiagnosticCode {
        match self {
            Self::TooFew { .. } => DiagnosticCode::AppArgFew,
            Self::TooMany { .. } => DiagnosticCode::AppArgMany,
            Self::PipeDelimiter { .. } => DiagnosticCode::AppArgPipeDelim,
            Self::NotIfStyle { .. } => DiagnosticCode::AppArgIfStyle,
        }
    }
}

/// Byte offsets of top-level occurrences of `delimiter`.
///
/// Delimiters inside `()`, `[]`, `{}` or double quotes do not count, so
/// `${CUT(x,-,1)}` and `1(arg1,arg2)` stay in one piece.
fn top_level_offsets(data: &str, delimiter: char) -> Vec<usize> {
    let mut offsets = Vec::new();
    let mut depth = 0usize;
    let mut quoted = false;
    let mut escaped = false;
    for (i, c) in data.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => quoted = !quoted,
            _ if quoted => {}
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            c if c == delimiter && depth == 0 => offsets.push(i),
            _ => {}
        }
    }
    offsets
}

/// Split argument data on top-level `delimiter`. Empty data has no arguments.
pub fn separate_args(data: &str, delimiter: char) -> Vec<String> {
    if data.is_empty() {
        return Vec::new();
    }
    let mut args = Vec::new();
    let mut start = 0;
    for offset in top_level_offsets(data, delimiter) {
        args.push(data[start..offset].to_string());
        start = offset + delimiter.len_utf8();
    }
    args.push(data[start..].to_string());
    args
}

/// Whether the data uses the legacy `|` delimiter instead of `,`.
pub fn uses_pipe_delimiter(data: &str) -> bool {
    !top_level_offsets(data, '|').is_empty() && top_level_offsets(data, ',').is_empty()
}

/// Split `condition?iftrue:iffalse`. A missing `:` leaves `iffalse` empty.
pub fn split_if_style(data: &str) -> Option<(String, String, String)> {
    let question = *top_level_offsets(data, '?').first()?;
    let condition = data[..question].to_string();
    let branches = &data[question + 1..];
    let (if_true, if_false) = match top_level_offsets(branches, ':').first() {
        Some(&colon) => (&branches[..colon], &branches[colon + 1..]),
        None => (branches, ""),
    };
    Some((condition, if_true.to_string(), if_false.to_string()))
}
