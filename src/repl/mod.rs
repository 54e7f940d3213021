//! REPL (Read-Eval-Print Loop) engine for moltsh
//!
//! This module provides the interactive shell interface:
//! - Command line editing with rustyline
//! - Command history management
//! - Context-sensitive completion of commands, variables, and arguments
//! - History hints
//! - Multi-line input with a continuation prompt

pub mod completion;
mod engine;
mod helper;

pub use engine::ReplEngine;
pub use helper::ShellHelper;
