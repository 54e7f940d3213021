//! moltsh library
//!
//! This library provides the core of moltsh, an interactive Tcl shell built
//! on the Molt interpreter. It can be embedded to give any Molt-based tool a
//! shell with context-sensitive completion.
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `config`: Configuration management
//! - `error`: Error types and handling
//! - `interp`: Interpreter abstraction and the Molt binding
//! - `repl`: Interactive REPL engine and the completion system
//! - `script`: Script file execution
//! - `shell`: Shell session (interpreter, registry, exit state, prompts)
//!
//! # Example
//!
//! ```no_run
//! use moltsh::{Config, Shell};
//!
//! let mut shell = Shell::new(&Config::default());
//! shell.eval_unit("proc greet {name} {return \"hello $name\"}").unwrap();
//!
//! // ["greet"]
//! let lines = shell.session().complete("gre");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod interp;
pub mod repl;
pub mod script;
pub mod shell;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, ShellError};
pub use interp::{Interpreter, MoltInterpreter};
pub use repl::ReplEngine;
pub use repl::completion::CompletionSession;
pub use shell::Shell;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
///
/// # Returns
/// * `&str` - Version string
pub fn version() -> &'static str {
    VERSION
}
