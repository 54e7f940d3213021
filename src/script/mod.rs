//! Script file execution for moltsh
//!
//! This module runs Tcl script files through the shell's interpreter:
//! - Loading script files
//! - Accumulating lines until they form a complete command
//! - Optional echo of each command and its result
//! - Stopping at the first failing command or when `exit` is called

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::error::{Result, ScriptError};
use crate::interp::Interpreter;
use crate::shell::SharedState;

/// How a script run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptOutcome {
    /// Every command was evaluated
    Completed,

    /// A command failed; carries the interpreter's error message
    Failed(String),

    /// The script called `exit`
    Exited,
}

/// Lines of input waiting to form a complete command
#[derive(Debug, Clone, Default)]
pub struct ChunkBuffer {
    text: String,
    lines: usize,
}

impl ChunkBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line, separated from earlier lines by a newline
    pub fn push_line(&mut self, line: &str) {
        if self.lines > 0 {
            self.text.push('\n');
        }
        self.text.push_str(line);
        self.lines += 1;
    }

    /// Accumulated text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether earlier lines are waiting for completion
    pub fn is_continuation(&self) -> bool {
        self.lines > 0
    }

    pub fn is_empty(&self) -> bool {
        self.lines == 0
    }

    /// Take the accumulated text, leaving the buffer empty
    pub fn take(&mut self) -> String {
        self.lines = 0;
        std::mem::take(&mut self.text)
    }

    /// Drop the accumulated text
    pub fn clear(&mut self) {
        self.lines = 0;
        self.text.clear();
    }
}

/// Script loader for reading script files
pub struct ScriptLoader {
    /// Maximum script size in bytes
    max_size_bytes: u64,
}

impl ScriptLoader {
    /// Create a new script loader
    ///
    /// # Returns
    /// * `Self` - New loader with default settings
    pub fn new() -> Self {
        Self {
            max_size_bytes: 10 * 1024 * 1024,
        }
    }

    /// Load script from file
    ///
    /// # Arguments
    /// * `path` - Path to script file
    ///
    /// # Returns
    /// * `Result<String>` - Script content or error
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(ScriptError::FileNotFound(path.display().to_string()).into());
        }

        let metadata = fs::metadata(path)?;
        if metadata.len() > self.max_size_bytes {
            return Err(ScriptError::ReadFailed(format!(
                "{}: file too large ({} bytes, max {} bytes)",
                path.display(),
                metadata.len(),
                self.max_size_bytes
            ))
            .into());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ScriptError::ReadFailed(format!("{}: {e}", path.display())))?;
        Ok(content)
    }

    /// Set maximum script size
    ///
    /// # Arguments
    /// * `bytes` - Maximum size in bytes
    pub fn set_max_size(&mut self, bytes: u64) {
        self.max_size_bytes = bytes;
    }
}

impl Default for ScriptLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluates script text chunk by chunk
pub struct ScriptRunner<'a> {
    /// Interpreter evaluating the chunks
    interp: &'a mut dyn Interpreter,

    /// Exit state polled between chunks
    state: &'a SharedState,

    /// Echo each chunk and print its result
    verbose: bool,
}

impl<'a> ScriptRunner<'a> {
    /// Create a new script runner
    ///
    /// # Arguments
    /// * `interp` - Interpreter to evaluate with
    /// * `state` - Shared state whose exit flag ends the run
    /// * `verbose` - Echo each command and print its result
    pub fn new(interp: &'a mut dyn Interpreter, state: &'a SharedState, verbose: bool) -> Self {
        Self {
            interp,
            state,
            verbose,
        }
    }

    /// Run script text read from `reader`
    ///
    /// Results and echoes go to `out`; errors go to `err` unless verbose, in
    /// which case they are printed as the command's result on `out`.
    ///
    /// # Returns
    /// * `Result<ScriptOutcome>` - How the run ended, or an I/O error
    pub fn run<R, W, E>(&mut self, reader: R, out: &mut W, err: &mut E) -> Result<ScriptOutcome>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut chunk = ChunkBuffer::new();

        for line in reader.lines() {
            if self.state.exit_requested() {
                return Ok(ScriptOutcome::Exited);
            }
            let line = line.map_err(|e| ScriptError::ReadFailed(e.to_string()))?;
            chunk.push_line(&line);
            if !self.interp.is_complete(chunk.as_str()) {
                continue;
            }

            let script = chunk.take();
            if let Some(outcome) = self.eval_chunk(&script, out, err)? {
                return Ok(outcome);
            }
        }

        // Evaluate leftovers so the interpreter reports what is unbalanced
        if !chunk.is_empty() && !self.state.exit_requested() {
            let script = chunk.take();
            if let Some(outcome) = self.eval_chunk(&script, out, err)? {
                return Ok(outcome);
            }
        }

        Ok(ScriptOutcome::Completed)
    }

    /// Evaluate one chunk; `Some` ends the run
    fn eval_chunk<W: Write, E: Write>(
        &mut self,
        script: &str,
        out: &mut W,
        err: &mut E,
    ) -> Result<Option<ScriptOutcome>> {
        tracing::debug!(bytes = script.len(), "evaluating script chunk");

        if self.verbose {
            writeln!(out, "{script}")?;
        }

        match self.interp.eval(script) {
            Ok(result) => {
                if self.verbose && !result.is_empty() {
                    writeln!(out, "{result}")?;
                }
            }
            Err(e) => {
                if !e.message().is_empty() {
                    if self.verbose {
                        writeln!(out, "{e}")?;
                    } else {
                        writeln!(err, "{e}")?;
                    }
                }
                return Ok(Some(ScriptOutcome::Failed(e.message().to_string())));
            }
        }

        if self.state.exit_requested() {
            return Ok(Some(ScriptOutcome::Exited));
        }
        Ok(None)
    }
}
