//! Molt-backed interpreter

use molt::Interp;
use molt::types::{CommandFunc, ContextID, Exception};

use super::{Interpreter, NameKind};
use crate::error::InterpError;

/// [`Interpreter`] implementation on top of a Molt [`Interp`].
pub struct MoltInterpreter {
    interp: Interp,
}

impl MoltInterpreter {
    /// Create an interpreter populated with Molt's standard commands.
    pub fn new() -> Self {
        Self {
            interp: Interp::new(),
        }
    }

    /// Define (or replace) a command implemented in Rust.
    pub fn add_command(&mut self, name: &str, func: CommandFunc) {
        self.interp.add_command(name, func);
    }

    /// Define (or replace) a command that receives `data` as its context.
    ///
    /// # Arguments
    /// * `name` - Command name as seen by scripts
    /// * `func` - Command implementation
    /// * `data` - Context handed to `func` through its `ContextID`
    ///
    /// # Returns
    /// * `ContextID` - Identifier of the saved context
    pub fn add_context_command<T: 'static>(
        &mut self,
        name: &str,
        func: CommandFunc,
        data: T,
    ) -> ContextID {
        let id = self.interp.save_context(data);
        self.interp.add_context_command(name, func, id);
        id
    }
}

impl Default for MoltInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

fn to_interp_error(exception: Exception) -> InterpError {
    InterpError::new(exception.value().as_str())
}

impl Interpreter for MoltInterpreter {
    fn eval(&mut self, script: &str) -> Result<String, InterpError> {
        self.interp
            .eval(script)
            .map(|value| value.as_str().to_string())
            .map_err(to_interp_error)
    }

    fn eval_list(&mut self, script: &str) -> Result<Vec<String>, InterpError> {
        let value = self.interp.eval(script).map_err(to_interp_error)?;
        let list = value.as_list().map_err(to_interp_error)?;
        Ok(list.iter().map(|item| item.as_str().to_string()).collect())
    }

    fn is_complete(&mut self, script: &str) -> bool {
        self.interp.complete(script)
    }

    /// Molt's `info` subcommands list every name and take no pattern, so the
    /// query is issued bare and callers filter by prefix.
    fn name_query(&self, kind: NameKind, _prefix: &str) -> String {
        format!("info {}", kind.info_subcommand())
    }
}
