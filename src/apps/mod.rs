//! Application calls — capability dispatch table and generic checks.
//!
//! Each known application is described by an [`AppSpec`] record instead of a
//! type of its own: arity bounds, whether the legacy `|` delimiter is
//! tolerated, how its data is split, and whether it references a jump
//! destination. Application-specific argument grammars are not checked here.
//!
//! ```text
//! "GosubIf(${X}?a,s,1:b,s,1)"
//!     │ AppCall::parse
//!     ▼
//! name = GosubIf, data = "${X}?a,s,1:b,s,1"
//!     │ AppTable::lookup → AppSpec { parse: if-style, registers_jump }
//!     ▼
//! AppArgs::Conditional { .. }  +  two JumpDestinations
//! ```

mod args;
mod call;

use rustc_hash::FxHashMap;

use crate::base::{Location, Name};
use crate::diagnostics::{Diagnostic, DiagnosticCode, DiagnosticCollector};
use crate::jumps::{JumpDestination, JumpRegistry};

pub use args::{ArgError, separate_args, split_if_style, uses_pipe_delimiter};
pub use call::AppCall;

/// Parsed application arguments, handed back to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppArgs {
    Positional(Vec<String>),
    Conditional {
        condition: String,
        if_true: String,
        if_false: String,
    },
}

/// Splits and checks argument data for one application.
pub type ParseFn = fn(&AppSpec, &str) -> Result<AppArgs, ArgError>;

/// What the analyzer knows about an application.
#[derive(Debug, Clone, Copy)]
pub struct AppSpec {
    pub name: &'static str,
    /// Arity bounds; for conditional apps they apply to each branch.
    pub min_args: usize,
    pub max_args: Option<usize>,
    pub allows_pipe_delimiter: bool,
    pub parse: ParseFn,
    /// Positional args (or each branch) form a `(context, label, priority)`.
    pub registers_jump: bool,
}

impl AppSpec {
    /// Any number of arguments, either delimiter.
    pub const fn plain(name: &'static str) -> Self {
        Self {
            name,
            min_args: 0,
            max_args: None,
            allows_pipe_delimiter: true,
            parse: parse_delimited,
            registers_jump: false,
        }
    }

    pub const fn jump(name: &'static str) -> Self {
        Self {
            name,
            min_args: 1,
            max_args: Some(3),
            allows_pipe_delimiter: false,
            parse: parse_delimited,
            registers_jump: true,
        }
    }

    pub const fn jump_if(name: &'static str) -> Self {
        Self {
            parse: parse_if_style,
            ..Self::jump(name)
        }
    }

    pub const fn with_arity(self, min_args: usize, max_args: Option<usize>) -> Self {
        Self {
            min_args,
            max_args,
            ..self
        }
    }

    /// Split `data` on commas and check the arity bounds.
    pub fn delimited_args(&self, data: &str) -> Result<Vec<String>, ArgError> {
        if !self.allows_pipe_delimiter && uses_pipe_delimiter(data) {
            return Err(ArgError::PipeDelimiter { app: self.name });
        }
        let args = separate_args(data, ',');
        if args.len() < self.min_args {
            return Err(ArgError::TooFew {
                app: self.name,
                min: self.min_args,
                got: args.len(),
            });
        }
        if let Some(max) = self.max_args.filter(|&max| args.len() > max) {
            return Err(ArgError::TooMany {
                app: self.name,
                max,
                got: args.len(),
            });
        }
        Ok(args)
    }
}

fn parse_delimited(spec: &AppSpec, data: &str) -> Result<AppArgs, ArgError> {
    spec.delimited_args(data).map(AppArgs::Positional)
}

fn parse_if_style(spec: &AppSpec, data: &str) -> Result<AppArgs, ArgError> {
    let (condition, if_true, if_false) =
        split_if_style(data).ok_or(ArgError::NotIfStyle { app: spec.name })?;
    Ok(AppArgs::Conditional {
        condition,
        if_true,
        if_false,
    })
}

/// Applications known out of the box.
///
/// Only the jump applications carry arity bounds; argument grammars of the
/// others are not checked.
const BUILTIN_APPS: &[AppSpec] = &[
    AppSpec::plain("Answer"),
    AppSpec::plain("BackGround"),
    AppSpec::plain("Busy"),
    AppSpec::plain("ChanSpy"),
    AppSpec::plain("Congestion"),
    AppSpec::plain("Dial"),
    AppSpec::plain("Echo"),
    AppSpec::plain("ExecIf"),
    AppSpec::jump("Gosub"),
    AppSpec::jump_if("GosubIf"),
    AppSpec::jump("Goto"),
    AppSpec::jump_if("GotoIf"),
    AppSpec::plain("Hangup"),
    AppSpec::plain("Log"),
    AppSpec::plain("Macro"),
    AppSpec::plain("MixMonitor"),
    AppSpec::plain("MusicOnHold"),
    AppSpec::plain("NoOp"),
    AppSpec::plain("Playback"),
    AppSpec::plain("PlayTones"),
    AppSpec::plain("Progress"),
    AppSpec::plain("Queue"),
    AppSpec::plain("Read"),
    AppSpec::plain("Record"),
    AppSpec::plain("Return"),
    AppSpec::plain("Ringing"),
    AppSpec::plain("SayDigits"),
    AppSpec::plain("SayNumber"),
    AppSpec::plain("Set"),
    AppSpec::plain("StackPop"),
    AppSpec::plain("System"),
    AppSpec::plain("Verbose"),
    AppSpec::plain("VoiceMail"),
    AppSpec::plain("VoiceMailMain"),
    AppSpec::plain("Wait"),
    AppSpec::plain("WaitExten"),
];

/// Stand-in for applications missing from the table.
static UNLISTED_APP: AppSpec = AppSpec::plain("");

/// Dispatch table keyed by lowercase application name.
#[derive(Debug, Clone, Default)]
pub struct AppTable {
    apps: FxHashMap<Name, AppSpec>,
}

impl AppTable {
    /// An empty table; every application is checked as a plain one.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table with all built-in applications.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for spec in BUILTIN_APPS {
            table.register(*spec);
        }
        table
    }

    /// Add or replace an application.
    pub fn register(&mut self, spec: AppSpec) {
        self.apps.insert(Self::key(spec.name), spec);
    }

    /// Look up an application; names are case-insensitive.
    pub fn lookup(&self, name: &str) -> Option<&AppSpec> {
        self.apps.get(&Self::key(name))
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    fn key(name: &str) -> Name {
        Name::from(name.to_ascii_lowercase())
    }

    /// Check one application call, registering any jump destinations.
    ///
    /// Applications missing from the table are split like plain ones.
    /// Returns the parsed arguments, or `None` when the application name is
    /// empty or its arguments do not check out.
    pub fn check(
        &self,
        raw: &str,
        location: &Location,
        diagnostics: &mut DiagnosticCollector,
        jumps: &mut JumpRegistry,
    ) -> Option<AppArgs> {
        let call = AppCall::parse(raw);
        if !call.parenthesized {
            diagnostics.add(
                Diagnostic::new(DiagnosticCode::AppNeedParens, location.clone())
                    .with_message(format!("application call '{}' needs parentheses", raw.trim())),
            );
        }
        if call.is_empty() {
            diagnostics.add(
                Diagnostic::new(DiagnosticCode::AppMissing, location.clone())
                    .with_message(format!("application call '{}' has no name", raw.trim())),
            );
            return None;
        }
        let spec = self.lookup(&call.name).unwrap_or(&UNLISTED_APP);

        let args = match (spec.parse)(spec, &call.data) {
            Ok(args) => args,
            Err(err) => {
                let diagnostic = Diagnostic::new(err.code(), location.clone());
                diagnostics.add(diagnostic.with_message(err.to_string()));
                return None;
            }
        };

        if spec.registers_jump {
            register_jumps(spec, &args, location, diagnostics, jumps);
        }
        Some(args)
    }
}

/// Record the destinations referenced by a jump-capable application.
fn register_jumps(
    spec: &AppSpec,
    args: &AppArgs,
    location: &Location,
    diagnostics: &mut DiagnosticCollector,
    jumps: &mut JumpRegistry,
) {
    let mut register = |args: &[String]| {
        if let Some(destination) = JumpDestination::from_args(args) {
            jumps.register(destination, location.clone());
        }
    };
    match args {
        AppArgs::Positional(args) => register(args.as_slice()),
        AppArgs::Conditional {
            if_true, if_false, ..
        } => {
            for branch in [if_true, if_false] {
                if branch.is_empty() {
                    continue;
                }
                match spec.delimited_args(branch) {
                    Ok(args) => register(args.as_slice()),
                    Err(err) => diagnostics.add(
                        Diagnostic::new(err.code(), location.clone()).with_message(err.to_string()),
                    ),
                }
            }
        }
    }
}
