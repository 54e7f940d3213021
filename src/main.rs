//! moltsh - interactive Tcl shell
//!
//! An interactive shell on the Molt Tcl interpreter with line editing,
//! history, and context-sensitive tab completion.
//!
//! # Usage
//!
//! ```bash
//! # Interactive mode
//! moltsh
//!
//! # Run a script, then continue interactively
//! moltsh setup.tcl
//!
//! # Run a script and exit
//! moltsh --no-interactive build.tcl
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use moltsh::cli::CliInterface;
use moltsh::config::{Config, LoggingConfig};
use moltsh::error::Result;
use moltsh::repl::ReplEngine;
use moltsh::script::ScriptOutcome;
use moltsh::shell::Shell;

/// Environment variable overriding the configured log filter
const LOG_ENV_VAR: &str = "MOLTSH_LOG";

/// Application entry point
fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Main application logic
///
/// This function orchestrates the application startup:
/// 1. Parse command-line arguments and load configuration
/// 2. Initialize logging
/// 3. Handle subcommands
/// 4. Run the script file, if any
/// 5. Run the interactive loop unless disabled or `exit` was called
///
/// # Returns
/// * `Result<i32>` - Process exit code or error
fn run() -> Result<i32> {
    let cli = CliInterface::new()?;

    initialize_logging(&cli.config().logging);

    if cli.handle_subcommand()? {
        return Ok(0);
    }

    let mut shell = Shell::new(cli.config());

    let mut script_failed = false;
    if let Some(path) = cli.script_path() {
        let outcome = shell.run_file(path, cli.echo())?;
        script_failed = matches!(outcome, ScriptOutcome::Failed(_));
    }

    if cli.interactive() && !shell.exit_requested() {
        cli.print_banner();
        shell = run_interactive_mode(shell, cli.config())?;
    } else if script_failed && !shell.exit_requested() {
        return Ok(1);
    }

    Ok(shell.return_code())
}

/// Run the interactive REPL and hand the shell back when it ends
fn run_interactive_mode(shell: Shell, config: &Config) -> Result<Shell> {
    let mut repl = ReplEngine::new(shell, config)?;
    repl.run()?;
    Ok(repl.into_shell())
}

/// Initialize logging system
///
/// The configured level is the default directive; `MOLTSH_LOG` overrides it
/// with a full filter. Logs go to stderr.
///
/// # Arguments
/// * `config` - Logging configuration (already adjusted by CLI flags)
fn initialize_logging(config: &LoggingConfig) {
    let level = LevelFilter::from_level(config.level.to_tracing_level());
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();

    // Build subscriber with level filter
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // Configure timestamps
    if config.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
