//! Completion context definitions
//!
//! This module defines what the scanner learns about the buffer: which kind
//! of name is being typed and where the replacement text begins.

/// The kind of name the user is currently typing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionKind {
    /// First word of a command: command and procedure names
    Command,

    /// A `$name` reference: variable names
    Variable,

    /// A later word of a command: registered argument candidates
    Argument,
}

/// Result of scanning a buffer for completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// Kind of completion to perform
    pub kind: CompletionKind,

    /// First word of the current fragment; `::` qualifier removed for
    /// argument lookups
    pub command: String,

    /// Partial text being completed
    pub base: String,

    /// Byte offset where candidates are spliced in; the buffer before it is
    /// kept verbatim
    pub replace_from: usize,
}

impl ScanResult {
    /// Create a command-name context
    pub fn command(command: impl Into<String>, replace_from: usize) -> Self {
        let command = command.into();
        Self {
            kind: CompletionKind::Command,
            base: command.clone(),
            command,
            replace_from,
        }
    }

    /// Create a variable-name context
    pub fn variable(
        command: impl Into<String>,
        base: impl Into<String>,
        replace_from: usize,
    ) -> Self {
        Self {
            kind: CompletionKind::Variable,
            command: command.into(),
            base: base.into(),
            replace_from,
        }
    }

    /// Create an argument context
    pub fn argument(
        command: impl Into<String>,
        base: impl Into<String>,
        replace_from: usize,
    ) -> Self {
        Self {
            kind: CompletionKind::Argument,
            command: command.into(),
            base: base.into(),
            replace_from,
        }
    }
}
