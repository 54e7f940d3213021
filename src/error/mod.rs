//! Error handling for moltsh.
//!
//! One crate-wide error type, [`ShellError`], wraps the more specific kinds:
//! configuration problems and script file failures. Interpreter evaluation
//! errors ([`InterpError`]) stay with the interpreter seam and reach the user
//! as the interpreter's own message. Completion never produces errors of its
//! own; see [`crate::repl::completion`].

pub mod kinds;

// Re-export commonly used types
pub use kinds::{ConfigError, InterpError, Result, ScriptError, ShellError};
