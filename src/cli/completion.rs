//! Shell completion generation for moltsh
//!
//! Generates completion scripts for the `moltsh` binary's own command line
//! (bash, zsh, fish, PowerShell, elvish).

use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io::Write;

use crate::cli::CliArgs;
use crate::error::{ConfigError, Result};

/// Generate shell completion script
///
/// # Arguments
/// * `shell_name` - Shell type (bash, zsh, fish, powershell, elvish)
/// * `out` - Destination of the script
///
/// # Returns
/// * `Result<()>` - Success or error
pub fn generate_completion(shell_name: &str, out: &mut dyn Write) -> Result<()> {
    let shell = parse_shell(shell_name)?;
    let mut cmd = CliArgs::command();
    generate(shell, &mut cmd, "moltsh", out);
    Ok(())
}

/// Parse shell name string to Shell enum
fn parse_shell(shell_name: &str) -> Result<Shell> {
    match shell_name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "zsh" => Ok(Shell::Zsh),
        "fish" => Ok(Shell::Fish),
        "powershell" | "pwsh" => Ok(Shell::PowerShell),
        "elvish" => Ok(Shell::Elvish),
        _ => Err(ConfigError::Generic(format!(
            "Unsupported shell: {shell_name}. Supported shells: bash, zsh, fish, powershell, elvish"
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shell() {
        assert!(matches!(parse_shell("bash"), Ok(Shell::Bash)));
        assert!(matches!(parse_shell("zsh"), Ok(Shell::Zsh)));
        assert!(matches!(parse_shell("fish"), Ok(Shell::Fish)));
        assert!(matches!(parse_shell("pwsh"), Ok(Shell::PowerShell)));
        assert!(matches!(parse_shell("elvish"), Ok(Shell::Elvish)));
        assert!(parse_shell("invalid").is_err());
    }

    #[test]
    fn test_parse_shell_case_insensitive() {
        assert!(matches!(parse_shell("BASH"), Ok(Shell::Bash)));
        assert!(matches!(parse_shell("Zsh"), Ok(Shell::Zsh)));
        assert!(matches!(parse_shell("PowerShell"), Ok(Shell::PowerShell)));
    }

    #[test]
    fn test_generate_bash_script() {
        let mut buffer = Vec::new();
        generate_completion("bash", &mut buffer).unwrap();
        let script = String::from_utf8(buffer).unwrap();
        assert!(script.contains("moltsh"));
        assert!(script.contains("--no-interactive"));
    }

    #[test]
    fn test_generate_unknown_shell_writes_nothing() {
        let mut buffer = Vec::new();
        assert!(generate_completion("tcsh", &mut buffer).is_err());
        assert!(buffer.is_empty());
    }
}
