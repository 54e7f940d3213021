//! Interpreter seam
//!
//! The shell talks to its scripting interpreter through the [`Interpreter`]
//! trait: evaluate a script and get its result back as a string or as a
//! list of strings, and ask whether a script is syntactically complete.
//! Completion discovers live command, procedure, and variable names only
//! through [`Interpreter::eval_list`] on small textual introspection queries
//! built by [`Interpreter::name_query`].
//!
//! [`MoltInterpreter`] implements the trait for the Molt Tcl interpreter.

mod molt_interp;
#[cfg(test)]
pub(crate) mod stub;

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::InterpError;

pub use self::molt_interp::MoltInterpreter;

/// Interpreter handle shared between the shell driver and the completer.
pub type SharedInterpreter = Rc<RefCell<dyn Interpreter>>;

/// The kind of name an introspection query lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    /// Built-in and registered commands
    Commands,
    /// User-defined procedures
    Procs,
    /// Variables visible in the current scope
    Vars,
}

impl NameKind {
    /// The `info` subcommand that lists names of this kind.
    pub fn info_subcommand(self) -> &'static str {
        match self {
            NameKind::Commands => "commands",
            NameKind::Procs => "procs",
            NameKind::Vars => "vars",
        }
    }
}

/// A scripting interpreter the shell can drive.
pub trait Interpreter {
    /// Evaluate a script and return its result as a string.
    fn eval(&mut self, script: &str) -> Result<String, InterpError>;

    /// Evaluate a script whose result is a list, returning its elements.
    fn eval_list(&mut self, script: &str) -> Result<Vec<String>, InterpError>;

    /// Whether `script` is a syntactically complete command (balanced
    /// braces, brackets, and quotes).
    fn is_complete(&mut self, script: &str) -> bool;

    /// Build the introspection query listing names of `kind` that start with
    /// `prefix`.
    ///
    /// The default form is the standard Tcl `info <kind> <pattern>` with the
    /// prefix escaped for glob matching and braced against substitution.
    fn name_query(&self, kind: NameKind, prefix: &str) -> String {
        format!(
            "info {} {{{}*}}",
            kind.info_subcommand(),
            glob_escape(prefix)
        )
    }
}

/// Escape glob metacharacters (and braces) so `text` matches literally.
pub fn glob_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '*' | '?' | '[' | ']' | '\\' | '{' | '}') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
