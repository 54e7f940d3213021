//! Shell session
//!
//! [`Shell`] owns everything one interactive session needs: the Molt
//! interpreter, the argument registry used for completion, the exit state
//! raised by the `exit` command, and the prompt pair. Both the interactive
//! loop ([`crate::repl::ReplEngine`]) and file execution
//! ([`Shell::run_file`]) drive it.

mod shared_state;

use std::cell::RefCell;
use std::io::{self, BufReader};
use std::path::Path;
use std::rc::Rc;

use molt::types::{CommandFunc, ContextID, Exception, MoltResult, Value};
use molt::{Interp, check_args, molt_err, molt_ok};

use crate::config::Config;
use crate::error::Result;
use crate::interp::{Interpreter, MoltInterpreter, SharedInterpreter};
use crate::repl::completion::{ArgumentRegistry, CompletionSession, SharedRegistry};
use crate::script::{ScriptLoader, ScriptOutcome, ScriptRunner};

pub use self::shared_state::SharedState;

/// Prompt shown when a new command starts
pub const DEFAULT_PROMPT_MAIN: &str = "> ";

/// Prompt shown while a command spans several lines
pub const DEFAULT_PROMPT_CONTINUATION: &str = ": ";

/// Default name of the script command that registers argument candidates
pub const DEFAULT_COMPLETION_COMMAND: &str = "moltsh::add_completion";

/// Result of evaluating one complete command: its result string on success,
/// the interpreter's error message on failure
pub type EvalOutcome = std::result::Result<String, String>;

/// One shell session
pub struct Shell {
    /// Interpreter shared with the completer
    interp: Rc<RefCell<MoltInterpreter>>,

    /// Argument candidates shared with the completer and the registration command
    registry: SharedRegistry,

    /// Exit state shared with the `exit` command
    state: SharedState,

    prompt_main: String,
    prompt_continuation: String,
}

impl Shell {
    /// Create a shell session
    ///
    /// Installs `exit`, seeds the registry with the built-in tables and any
    /// tables from `config`, and installs the registration command if
    /// `config` asks for it.
    ///
    /// # Arguments
    /// * `config` - Prompt and completion settings
    pub fn new(config: &Config) -> Self {
        let state = SharedState::new();
        let mut interp = MoltInterpreter::new();
        interp.add_context_command("exit", cmd_exit, state.clone());

        let mut registry = ArgumentRegistry::with_builtins();
        for (command, arguments) in &config.completion.commands {
            registry.register(command, arguments.iter().cloned());
        }

        let mut shell = Self {
            interp: Rc::new(RefCell::new(interp)),
            registry: registry.into_shared(),
            state,
            prompt_main: DEFAULT_PROMPT_MAIN.to_string(),
            prompt_continuation: DEFAULT_PROMPT_CONTINUATION.to_string(),
        };
        shell.set_prompt(
            Some(config.prompt.main.as_str()),
            Some(config.prompt.continuation.as_str()),
        );
        if config.completion.provide_command {
            shell.provide_completion_command(Some(config.completion.command_name.as_str()));
        }

        tracing::debug!(
            completion_tables = shell.registry.borrow().len(),
            "shell initialized"
        );
        shell
    }

    /// Define a command and, with `arguments`, its completion candidates
    ///
    /// # Arguments
    /// * `name` - Command name as seen by scripts
    /// * `arguments` - Argument candidates; `None` leaves the registry alone
    /// * `func` - Command implementation
    pub fn add_command(&mut self, name: &str, arguments: Option<&[&str]>, func: CommandFunc) {
        self.interp.borrow_mut().add_command(name, func);
        if let Some(arguments) = arguments {
            self.register_completion(name, arguments.iter().copied());
        }
    }

    /// Replace the completion candidates of `command`
    pub fn register_completion<I, S>(&self, command: &str, arguments: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.registry.borrow_mut().register(command, arguments);
    }

    /// Install the script command that registers completion candidates
    ///
    /// # Arguments
    /// * `name` - Command name, `moltsh::add_completion` when `None`
    pub fn provide_completion_command(&mut self, name: Option<&str>) {
        let name = name.unwrap_or(DEFAULT_COMPLETION_COMMAND);
        self.interp
            .borrow_mut()
            .add_context_command(name, cmd_add_completion, self.registry.clone());
    }

    /// Set the prompts; `None` restores the default for that prompt
    pub fn set_prompt(&mut self, main: Option<&str>, continuation: Option<&str>) {
        self.prompt_main = main.unwrap_or(DEFAULT_PROMPT_MAIN).to_string();
        self.prompt_continuation = continuation
            .unwrap_or(DEFAULT_PROMPT_CONTINUATION)
            .to_string();
    }

    /// The prompt for fresh (`false`) or continued (`true`) input
    pub fn prompt(&self, multiline: bool) -> &str {
        if multiline {
            &self.prompt_continuation
        } else {
            &self.prompt_main
        }
    }

    /// Evaluate one complete command
    pub fn eval_unit(&mut self, script: &str) -> EvalOutcome {
        tracing::debug!(bytes = script.len(), "evaluating input");
        self.interp
            .borrow_mut()
            .eval(script)
            .map_err(|e| e.message().to_string())
    }

    /// Whether `script` is syntactically complete
    pub fn is_complete(&self, script: &str) -> bool {
        self.interp.borrow_mut().is_complete(script)
    }

    /// Run a script file
    ///
    /// Commands are evaluated as soon as the lines read so far form a
    /// complete command. The run stops at the first failing command or when
    /// the script calls `exit`.
    ///
    /// # Arguments
    /// * `path` - Script file
    /// * `verbose` - Echo each command and print its result
    ///
    /// # Returns
    /// * `Result<ScriptOutcome>` - How the run ended; error if the file
    ///   cannot be read
    pub fn run_file(&mut self, path: &Path, verbose: bool) -> Result<ScriptOutcome> {
        let source = ScriptLoader::new().load_file(path)?;
        tracing::debug!(path = %path.display(), verbose, "running script");

        let mut interp = self.interp.borrow_mut();
        let outcome = ScriptRunner::new(&mut *interp, &self.state, verbose).run(
            BufReader::new(source.as_bytes()),
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
        )?;

        tracing::debug!(?outcome, "script finished");
        Ok(outcome)
    }

    /// Whether `exit` has been called
    pub fn exit_requested(&self) -> bool {
        self.state.exit_requested()
    }

    /// Return code recorded by `exit`, 0 if it was not called
    pub fn return_code(&self) -> i32 {
        self.state.return_code()
    }

    /// A completion session bound to this shell's interpreter and registry
    pub fn session(&self) -> CompletionSession {
        CompletionSession::for_interpreter(self.interpreter(), self.registry())
    }

    /// Handle to the interpreter
    pub fn interpreter(&self) -> SharedInterpreter {
        self.interp.clone()
    }

    /// Handle to the argument registry
    pub fn registry(&self) -> SharedRegistry {
        self.registry.clone()
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// `exit ?returnCode?`
fn cmd_exit(interp: &mut Interp, context_id: ContextID, argv: &[Value]) -> MoltResult {
    check_args(1, argv, 1, 2, "?returnCode?")?;

    let code = match argv.get(1) {
        Some(value) => match value.as_int().ok().and_then(|n| i32::try_from(n).ok()) {
            Some(code) => code,
            None => return molt_err!("expected integer but got \"{}\"", value.as_str()),
        },
        None => 0,
    };

    interp.context::<SharedState>(context_id).request_exit(code);
    molt_ok!()
}

/// `moltsh::add_completion commandName arg ?arg ...?`
fn cmd_add_completion(interp: &mut Interp, context_id: ContextID, argv: &[Value]) -> MoltResult {
    check_args(1, argv, 3, 0, "commandName arg ?arg ...?")?;

    let registry = interp.context::<SharedRegistry>(context_id).clone();
    let Ok(mut registry) = registry.try_borrow_mut() else {
        return molt_err!("completion registry is busy");
    };
    registry.register(
        argv[1].as_str(),
        argv[2..].iter().map(|arg| arg.as_str().to_string()),
    );
    molt_ok!(Value::from("1"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd_hello(_interp: &mut Interp, _context_id: ContextID, _argv: &[Value]) -> MoltResult {
        molt_ok!(Value::from("hello"))
    }

    #[test]
    fn test_default_prompts() {
        let shell = Shell::default();
        assert_eq!(shell.prompt(false), "> ");
        assert_eq!(shell.prompt(true), ": ");
    }

    #[test]
    fn test_set_prompt_and_reset() {
        let mut shell = Shell::default();
        shell.set_prompt(Some("tcl> "), Some("   : "));
        assert_eq!(shell.prompt(false), "tcl> ");
        assert_eq!(shell.prompt(true), "   : ");

        shell.set_prompt(None, None);
        assert_eq!(shell.prompt(false), DEFAULT_PROMPT_MAIN);
        assert_eq!(shell.prompt(true), DEFAULT_PROMPT_CONTINUATION);
    }

    #[test]
    fn test_prompts_from_config() {
        let mut config = Config::default();
        config.prompt.main = "molt% ".to_string();
        let shell = Shell::new(&config);
        assert_eq!(shell.prompt(false), "molt% ");
    }

    #[test]
    fn test_eval_unit() {
        let mut shell = Shell::default();
        assert_eq!(shell.eval_unit("set x 10"), Ok("10".to_string()));
        assert_eq!(shell.eval_unit("expr {$x * 2}"), Ok("20".to_string()));
        assert!(shell.eval_unit("nope").is_err());
    }

    #[test]
    fn test_is_complete() {
        let shell = Shell::default();
        assert!(shell.is_complete("puts hi"));
        assert!(!shell.is_complete("if {1} {"));
    }

    #[test]
    fn test_exit_default_code() {
        let mut shell = Shell::default();
        assert!(!shell.exit_requested());
        assert!(shell.eval_unit("exit").is_ok());
        assert!(shell.exit_requested());
        assert_eq!(shell.return_code(), 0);
    }

    #[test]
    fn test_exit_with_code() {
        let mut shell = Shell::default();
        assert!(shell.eval_unit("exit 7").is_ok());
        assert!(shell.exit_requested());
        assert_eq!(shell.return_code(), 7);
    }

    #[test]
    fn test_exit_errors() {
        let mut shell = Shell::default();
        assert_eq!(
            shell.eval_unit("exit 1 2"),
            Err("wrong # args: should be \"exit ?returnCode?\"".to_string())
        );
        assert_eq!(
            shell.eval_unit("exit abc"),
            Err("expected integer but got \"abc\"".to_string())
        );
        assert!(!shell.exit_requested());
    }

    #[test]
    fn test_exit_code_out_of_range() {
        let mut shell = Shell::default();
        assert_eq!(
            shell.eval_unit("exit 99999999999"),
            Err("expected integer but got \"99999999999\"".to_string())
        );
        assert!(!shell.exit_requested());
        assert_eq!(shell.return_code(), 0);
    }

    #[test]
    fn test_add_command_with_completion() {
        let mut shell = Shell::default();
        shell.add_command(
            "mycommand",
            Some(&["-activate", "-deactivate", "-value", "-name", "-help"]),
            cmd_hello,
        );

        assert_eq!(shell.eval_unit("mycommand"), Ok("hello".to_string()));
        assert_eq!(
            shell.session().complete("mycommand -a"),
            vec!["mycommand -activate"]
        );
    }

    #[test]
    fn test_add_command_without_completion() {
        let mut shell = Shell::default();
        shell.add_command("plain", None, cmd_hello);
        assert!(!shell.registry().borrow().contains("plain"));
    }

    #[test]
    fn test_script_registration_command() {
        let mut shell = Shell::default();
        assert_eq!(
            shell.eval_unit("moltsh::add_completion deploy --force --dry-run"),
            Ok("1".to_string())
        );
        assert_eq!(
            shell.session().complete("deploy --d"),
            vec!["deploy --dry-run"]
        );

        // Registration replaces the previous set
        shell
            .eval_unit("moltsh::add_completion deploy --verbose")
            .unwrap();
        assert!(shell.session().complete("deploy --d").is_empty());
    }

    #[test]
    fn test_script_registration_usage_error() {
        let mut shell = Shell::default();
        let err = shell.eval_unit("moltsh::add_completion deploy").unwrap_err();
        assert!(err.starts_with("wrong # args"));
        assert!(!shell.registry().borrow().contains("deploy"));
    }

    #[test]
    fn test_custom_registration_command_name() {
        let mut config = Config::default();
        config.completion.provide_command = false;
        let mut shell = Shell::new(&config);
        assert!(shell.eval_unit("moltsh::add_completion a b").is_err());

        shell.provide_completion_command(Some("complete_args"));
        assert!(shell.eval_unit("complete_args a b").is_ok());
    }

    #[test]
    fn test_config_completion_tables() {
        let mut config = Config::default();
        config
            .completion
            .commands
            .insert("string".to_string(), vec!["custom".to_string()]);
        let shell = Shell::new(&config);
        assert_eq!(shell.session().complete("string cu"), vec!["string custom"]);
        assert!(shell.session().complete("string ma").is_empty());
    }

    #[test]
    fn test_run_file_stops_on_exit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.tcl");
        std::fs::write(&path, "set a 1\nexit 3\nset a 2\n").unwrap();

        let mut shell = Shell::default();
        let outcome = shell.run_file(&path, false).unwrap();
        assert_eq!(outcome, ScriptOutcome::Exited);
        assert_eq!(shell.return_code(), 3);
        assert_eq!(shell.eval_unit("set a"), Ok("1".to_string()));
    }

    #[test]
    fn test_run_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = Shell::default();
        assert!(shell.run_file(&dir.path().join("missing.tcl"), false).is_err());
    }
}
