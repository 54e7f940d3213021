//! Buffer scanner for completion
//!
//! Reconstructs the typing context from the text before the cursor alone.
//! No state is carried between calls: the buffer is scanned backwards for
//! the innermost unmatched `[` or `{`, and the fragment after it is split
//! into the command word and the word under the cursor.
//!
//! The scan works on bytes. Every marker it looks for is ASCII, so each
//! offset it produces falls on a UTF-8 character boundary.

use super::context::ScanResult;

/// Classifies the end of an input buffer into a [`ScanResult`].
pub struct ContextScanner;

impl ContextScanner {
    /// Scan `buffer` (cursor at its end).
    ///
    /// # Arguments
    /// * `buffer` - Text before the cursor
    ///
    /// # Returns
    /// * `Option<ScanResult>` - The completion context, or `None` when there
    ///   is nothing to complete (empty input, a bare opener, or a lone `$`)
    pub fn scan(buffer: &str) -> Option<ScanResult> {
        let bytes = buffer.as_bytes();
        if bytes.is_empty() {
            return None;
        }

        let fragment = fragment_start(bytes);
        let cmd_start = fragment
            + bytes[fragment..]
                .iter()
                .take_while(|b| b.is_ascii_whitespace())
                .count();
        let cmd_len = bytes[cmd_start..]
            .iter()
            .take_while(|b| !b.is_ascii_whitespace())
            .count();
        if cmd_len == 0 {
            return None;
        }
        let command = &buffer[cmd_start..cmd_start + cmd_len];

        let base_start = token_start(bytes, cmd_start);
        let token = &buffer[base_start..];

        if base_start == cmd_start && !command.starts_with('$') {
            return Some(ScanResult::command(command, cmd_start));
        }

        if let Some(name) = token.strip_prefix('$') {
            if name.is_empty() {
                return None;
            }
            return Some(ScanResult::variable(command, name, base_start + 1));
        }

        Some(ScanResult::argument(
            strip_namespace(command),
            token,
            base_start,
        ))
    }
}

/// Offset just past the innermost unmatched opener, or 0 if every `[`/`{`
/// is closed.
fn fragment_start(bytes: &[u8]) -> usize {
    let mut depth = 0i32;
    for (pos, byte) in bytes.iter().enumerate().rev() {
        match byte {
            b']' | b'}' => depth += 1,
            b'[' | b'{' => depth -= 1,
            _ => {}
        }
        if depth < 0 {
            return pos + 1;
        }
    }
    0
}

/// Start of the trailing run of non-whitespace, never before `floor`.
fn token_start(bytes: &[u8], floor: usize) -> usize {
    let mut pos = bytes.len();
    while pos > floor && !bytes[pos - 1].is_ascii_whitespace() {
        pos -= 1;
    }
    pos
}

/// Drop a leading global namespace qualifier (`::string` -> `string`).
fn strip_namespace(command: &str) -> &str {
    match command.strip_prefix("::") {
        Some(rest) if !rest.is_empty() => rest,
        _ => command,
    }
}

#[cfg(test)]
mod tests {
    use super::super::context::CompletionKind;
    use super::*;

    fn scan(buffer: &str) -> ScanResult {
        ContextScanner::scan(buffer).unwrap_or_else(|| panic!("no context for {buffer:?}"))
    }

    #[test]
    fn test_command_context() {
        let result = scan("se");
        assert_eq!(result.kind, CompletionKind::Command);
        assert_eq!(result.base, "se");
        assert_eq!(result.replace_from, 0);
    }

    #[test]
    fn test_command_context_after_leading_whitespace() {
        let result = scan("   pu");
        assert_eq!(result.kind, CompletionKind::Command);
        assert_eq!(result.base, "pu");
        assert_eq!(result.replace_from, 3);
    }

    #[test]
    fn test_variable_context() {
        let result = scan("puts $my");
        assert_eq!(result.kind, CompletionKind::Variable);
        assert_eq!(result.base, "my");
        assert_eq!(result.replace_from, 6);
    }

    #[test]
    fn test_variable_as_first_token() {
        let result = scan("$x");
        assert_eq!(result.kind, CompletionKind::Variable);
        assert_eq!(result.base, "x");
        assert_eq!(result.replace_from, 1);
    }

    #[test]
    fn test_bare_dollar_yields_nothing() {
        assert!(ContextScanner::scan("$").is_none());
        assert!(ContextScanner::scan("puts $").is_none());
    }

    #[test]
    fn test_argument_context() {
        let result = scan("string ma");
        assert_eq!(result.kind, CompletionKind::Argument);
        assert_eq!(result.command, "string");
        assert_eq!(result.base, "ma");
        assert_eq!(result.replace_from, 7);
    }

    #[test]
    fn test_argument_context_with_trailing_space() {
        let result = scan("puts ");
        assert_eq!(result.kind, CompletionKind::Argument);
        assert_eq!(result.command, "puts");
        assert_eq!(result.base, "");
        assert_eq!(result.replace_from, 5);
    }

    #[test]
    fn test_nested_bracket_scanning() {
        let result = scan("expr {[format %");
        assert_eq!(result.kind, CompletionKind::Argument);
        assert_eq!(result.command, "format");
        assert_eq!(result.base, "%");
        assert_eq!(result.replace_from, 14);
    }

    #[test]
    fn test_closed_groups_are_skipped() {
        let result = scan("set x [list a] b");
        assert_eq!(result.kind, CompletionKind::Argument);
        assert_eq!(result.command, "set");
        assert_eq!(result.base, "b");
    }

    #[test]
    fn test_command_inside_open_brace() {
        let result = scan("if {$x} {pu");
        assert_eq!(result.kind, CompletionKind::Command);
        assert_eq!(result.base, "pu");
        assert_eq!(result.replace_from, 9);
    }

    #[test]
    fn test_variable_inside_bracket() {
        let result = scan("puts [llength $li");
        assert_eq!(result.kind, CompletionKind::Variable);
        assert_eq!(result.command, "llength");
        assert_eq!(result.base, "li");
        assert_eq!(result.replace_from, 15);
    }

    #[test]
    fn test_newline_counts_as_whitespace() {
        let result = scan("proc f {} {\n  pu");
        assert_eq!(result.kind, CompletionKind::Command);
        assert_eq!(result.base, "pu");
    }

    #[test]
    fn test_namespace_stripping() {
        let result = scan("::string ma");
        assert_eq!(result.kind, CompletionKind::Argument);
        assert_eq!(result.command, "string");
        assert_eq!(result.base, "ma");
    }

    #[test]
    fn test_bare_qualifier_kept() {
        let result = scan(":: x");
        assert_eq!(result.kind, CompletionKind::Argument);
        assert_eq!(result.command, "::");
    }

    #[test]
    fn test_no_context() {
        assert!(ContextScanner::scan("").is_none());
        assert!(ContextScanner::scan("[").is_none());
        assert!(ContextScanner::scan("{").is_none());
        assert!(ContextScanner::scan("   ").is_none());
        assert!(ContextScanner::scan("set x [").is_none());
        assert!(ContextScanner::scan("set x [  ").is_none());
    }

    #[test]
    fn test_unbalanced_closers_degrade() {
        let result = scan("]] puts -no");
        assert_eq!(result.kind, CompletionKind::Argument);
        assert_eq!(result.command, "]]");
        assert_eq!(result.base, "-no");
    }

    #[test]
    fn test_multibyte_text() {
        let result = scan("puts \u{fc}ber");
        assert_eq!(result.kind, CompletionKind::Argument);
        assert_eq!(result.base, "\u{fc}ber");
        assert_eq!(result.replace_from, 5);
    }
}
