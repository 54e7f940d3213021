use nu_ansi_term::Color;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config as EditorConfig, Editor};

use crate::config::{Config, HistoryConfig};
use crate::error::Result;
use crate::script::ChunkBuffer;
use crate::shell::{EvalOutcome, Shell};

use super::helper::ShellHelper;

/// REPL engine for interactive command execution
pub struct ReplEngine {
    /// Line editor for command input
    editor: Editor<ShellHelper, DefaultHistory>,

    /// Shell session evaluating the input
    shell: Shell,

    /// Lines waiting to form a complete command
    chunk: ChunkBuffer,

    /// History persistence settings
    history: HistoryConfig,

    /// Color error messages
    color_enabled: bool,
}

impl ReplEngine {
    /// Create a new REPL engine around a shell session
    ///
    /// # Arguments
    /// * `shell` - Shell session to drive
    /// * `config` - History and display settings
    ///
    /// # Returns
    /// * `Result<Self>` - New REPL engine or error
    pub fn new(shell: Shell, config: &Config) -> Result<Self> {
        let editor_config = EditorConfig::builder()
            .max_history_size(config.history.max_size)?
            .completion_type(CompletionType::Circular)
            .auto_add_history(false)
            .build();

        let helper = ShellHelper::new(
            shell.session(),
            config.display.hints,
            config.display.color_output,
        );
        let mut editor = Editor::<ShellHelper, DefaultHistory>::with_config(editor_config)?;
        editor.set_helper(Some(helper));

        // Load history if persistent
        if config.history.persist {
            if let Err(e) = editor.load_history(&config.history.file_path) {
                tracing::debug!(
                    path = %config.history.file_path.display(),
                    error = %e,
                    "history not loaded"
                );
            }
        }

        Ok(Self {
            editor,
            shell,
            chunk: ChunkBuffer::new(),
            history: config.history.clone(),
            color_enabled: config.display.color_output,
        })
    }

    /// Run the interactive loop until end of input or `exit`
    ///
    /// Lines are accumulated until they form a complete command, which is
    /// then evaluated; non-empty results go to stdout and errors to stderr.
    /// Ctrl-C discards the pending lines.
    ///
    /// # Returns
    /// * `Result<()>` - Success, or an editor error
    pub fn run(&mut self) -> Result<()> {
        while !self.shell.exit_requested() {
            let prompt = self.shell.prompt(self.chunk.is_continuation()).to_string();

            let line = match self.editor.readline(&prompt) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => {
                    self.chunk.clear();
                    continue;
                }
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            };

            if !line.trim().is_empty() {
                self.editor.add_history_entry(line.as_str())?;
            }

            match submit_line(&mut self.shell, &mut self.chunk, &line) {
                Some(Ok(result)) if !result.is_empty() => println!("{result}"),
                Some(Err(message)) if !message.is_empty() => self.print_error(&message),
                _ => {}
            }
        }

        self.save_history()
    }

    /// Save history to the configured file, if persistence is enabled
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    pub fn save_history(&mut self) -> Result<()> {
        if self.history.persist {
            self.editor.save_history(&self.history.file_path)?;
            tracing::debug!(path = %self.history.file_path.display(), "history saved");
        }
        Ok(())
    }

    /// Give the shell session back
    pub fn into_shell(self) -> Shell {
        self.shell
    }

    fn print_error(&self, message: &str) {
        if self.color_enabled {
            eprintln!("{}", Color::Red.paint(message));
        } else {
            eprintln!("{message}");
        }
    }
}

/// Add a line to the pending chunk and evaluate it once complete
///
/// # Returns
/// * `Option<EvalOutcome>` - `None` while the chunk is still incomplete
pub(super) fn submit_line(
    shell: &mut Shell,
    chunk: &mut ChunkBuffer,
    line: &str,
) -> Option<EvalOutcome> {
    chunk.push_line(line);
    if !shell.is_complete(chunk.as_str()) {
        return None;
    }
    Some(shell.eval_unit(&chunk.take()))
}
