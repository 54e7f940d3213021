use std::borrow::Cow;

use nu_ansi_term::Style;
use rustyline::Helper as RustyHelper;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::validate::Validator;

use super::completion::CompletionSession;

/// Helper for rustyline providing completion and history hints
pub struct ShellHelper {
    /// Completion session bound to the shell's interpreter
    session: CompletionSession,

    /// Suggests the rest of a matching history entry
    hinter: HistoryHinter,

    /// Show history hints
    hints_enabled: bool,

    /// Dim hints with ANSI styling
    color_enabled: bool,
}

impl ShellHelper {
    /// Create a new helper
    ///
    /// # Arguments
    /// * `session` - Completion session
    /// * `hints_enabled` - Show history hints
    /// * `color_enabled` - Dim hints with ANSI styling
    ///
    /// # Returns
    /// * `Self` - New helper
    pub fn new(session: CompletionSession, hints_enabled: bool, color_enabled: bool) -> Self {
        Self {
            session,
            hinter: HistoryHinter::new(),
            hints_enabled,
            color_enabled,
        }
    }
}

impl RustyHelper for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    /// Complete the text before the cursor
    ///
    /// Every candidate replaces the whole text before the cursor, so the
    /// returned start is always 0. The listing shows the bare word.
    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let Some(completion) = self.session.complete_detailed(&line[..pos]) else {
            return Ok((0, Vec::new()));
        };

        let pairs = completion
            .candidates
            .iter()
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: format!("{}{}", completion.prefix, candidate),
            })
            .collect();

        Ok((0, pairs))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &rustyline::Context<'_>) -> Option<String> {
        if !self.hints_enabled {
            return None;
        }
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for ShellHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        if self.color_enabled {
            Cow::Owned(Style::new().dimmed().paint(hint).to_string())
        } else {
            Cow::Borrowed(hint)
        }
    }
}

// Multi-line input is accumulated by the engine, not the editor
impl Validator for ShellHelper {}
