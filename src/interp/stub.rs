//! Scripted interpreter double for completion tests.

use super::{Interpreter, NameKind};
use crate::error::InterpError;

/// Answers `info commands|procs|vars` queries from canned lists.
///
/// Lists are returned whole, ignoring any pattern, so callers must do their
/// own prefix filtering. Every query is recorded in `queries`.
#[derive(Debug, Default)]
pub struct StubInterpreter {
    pub commands: Vec<String>,
    pub procs: Vec<String>,
    pub vars: Vec<String>,
    pub failing: bool,
    pub queries: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl StubInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_commands(mut self, commands: &[&str]) -> Self {
        self.commands = owned(commands);
        self
    }

    pub fn with_procs(mut self, procs: &[&str]) -> Self {
        self.procs = owned(procs);
        self
    }

    pub fn with_vars(mut self, vars: &[&str]) -> Self {
        self.vars = owned(vars);
        self
    }

    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }
}

impl Interpreter for StubInterpreter {
    fn eval(&mut self, script: &str) -> Result<String, InterpError> {
        self.eval_list(script).map(|items| items.join(" "))
    }

    fn eval_list(&mut self, script: &str) -> Result<Vec<String>, InterpError> {
        self.queries.push(script.to_string());
        if self.failing {
            return Err(InterpError::new("stub failure"));
        }

        let mut words = script.split_whitespace();
        if words.next() != Some("info") {
            return Err(InterpError::new(format!("unsupported script: {script}")));
        }
        match words.next() {
            Some(sub) if sub == NameKind::Commands.info_subcommand() => Ok(self.commands.clone()),
            Some(sub) if sub == NameKind::Procs.info_subcommand() => Ok(self.procs.clone()),
            Some(sub) if sub == NameKind::Vars.info_subcommand() => Ok(self.vars.clone()),
            _ => Err(InterpError::new(format!("bad option in: {script}"))),
        }
    }

    fn is_complete(&mut self, script: &str) -> bool {
        let mut depth = 0i32;
        for ch in script.chars() {
            match ch {
                '{' | '[' => depth += 1,
                '}' | ']' => depth -= 1,
                _ => {}
            }
        }
        depth <= 0
    }
}
