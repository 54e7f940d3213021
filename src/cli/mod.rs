//! Command-line interface for moltsh
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and validation
//! - Mode selection (script file, interactive, or both)
//! - Subcommands (version, completion scripts, configuration)

pub mod completion;

use clap::{Parser, Subcommand, ValueHint};
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{Config, LogLevel};
use crate::error::Result;

/// Interactive Tcl shell built on the Molt interpreter
#[derive(Parser, Debug)]
#[command(
    name = "moltsh",
    version,
    about = "Interactive Tcl shell built on the Molt interpreter",
    long_about = "An interactive Tcl shell with line editing, history, and context-sensitive
tab completion of commands, variables, and command arguments. Runs script
files, optionally followed by an interactive session."
)]
pub struct CliArgs {
    /// Script file to run before the interactive session
    #[arg(value_name = "SCRIPT", value_hint = ValueHint::FilePath)]
    pub script: Option<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Quiet mode (errors only)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Very verbose mode (trace logging)
    #[arg(long = "vv")]
    pub very_verbose: bool,

    /// Do not load or save the history file
    #[arg(long = "no-history")]
    pub no_history: bool,

    /// Exit after running SCRIPT instead of starting the interactive session
    #[arg(short = 'n', long = "no-interactive")]
    pub no_interactive: bool,

    /// Echo each command of SCRIPT and print its result
    #[arg(long)]
    pub echo: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands for moltsh
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    Version,

    /// Generate shell completion script
    Completion {
        /// Shell type (bash, zsh, fish, powershell, elvish)
        #[arg(value_name = "SHELL")]
        shell: String,
    },

    /// Show configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,
}

impl CliInterface {
    /// Create a new CLI interface from the process arguments
    ///
    /// # Returns
    /// * `Result<Self>` - New CLI interface or error
    pub fn new() -> Result<Self> {
        Self::from_args(CliArgs::parse())
    }

    /// Create a CLI interface from already parsed arguments
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let config = Self::load_config(&args)?;
        Ok(Self { args, config })
    }

    /// Load configuration from file and merge with arguments
    ///
    /// # Arguments
    /// * `args` - Command-line arguments
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    fn load_config(args: &CliArgs) -> Result<Config> {
        let mut config = Config::load_from_file(args.config_file.as_deref())?;

        if let Err(e) = config.validate() {
            eprintln!("Warning: Configuration validation failed: {}", e);
            eprintln!("Using default configuration instead.");
            config = Config::default();
        }

        Self::apply_args_to_config(&mut config, args);

        Ok(config)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Script file to run, if any
    pub fn script_path(&self) -> Option<&Path> {
        self.args.script.as_deref()
    }

    /// Whether to start the interactive session
    pub fn interactive(&self) -> bool {
        !self.args.no_interactive
    }

    /// Whether to echo script commands and their results
    pub fn echo(&self) -> bool {
        self.args.echo
    }

    /// Apply CLI arguments to configuration
    ///
    /// # Arguments
    /// * `config` - Configuration to modify
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) {
        Self::apply_display_args(config, args);
        Self::apply_logging_args(config, args);
        Self::apply_history_args(config, args);
    }

    /// Apply display-related CLI arguments to configuration
    fn apply_display_args(config: &mut Config, args: &CliArgs) {
        if args.no_color {
            config.display.color_output = false;
        }
    }

    /// Apply logging-related CLI arguments to configuration
    fn apply_logging_args(config: &mut Config, args: &CliArgs) {
        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else if args.quiet {
            LogLevel::Error
        } else {
            config.logging.level
        };
    }

    /// Apply history-related CLI arguments to configuration
    fn apply_history_args(config: &mut Config, args: &CliArgs) {
        if args.no_history {
            config.history.persist = false;
        }
    }

    /// Handle subcommands
    ///
    /// # Returns
    /// * `Result<bool>` - True if subcommand was handled, false to continue
    pub fn handle_subcommand(&self) -> Result<bool> {
        match &self.args.command {
            Some(Commands::Version) => {
                self.show_version();
                Ok(true)
            }
            Some(Commands::Completion { shell }) => {
                completion::generate_completion(shell, &mut io::stdout().lock())?;
                Ok(true)
            }
            Some(Commands::Config { show, validate }) => {
                self.handle_config_command(*show, *validate)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Show version information
    fn show_version(&self) {
        println!("moltsh version {}", env!("CARGO_PKG_VERSION"));
        println!("Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    }

    /// Handle config subcommand
    ///
    /// # Arguments
    /// * `show` - Whether to show configuration
    /// * `validate` - Whether to validate configuration
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    fn handle_config_command(&self, show: bool, validate: bool) -> Result<()> {
        if validate {
            self.validate_config_file();
        }

        if show {
            self.show_config()?;
        }

        Ok(())
    }

    /// Validate configuration file
    fn validate_config_file(&self) {
        let path = self.get_config_path();
        println!("Validating configuration file: {}", path.display());

        if !path.exists() {
            println!("❌ Configuration file does not exist");
            return;
        }

        match Config::load_from_file(Some(path.as_path())) {
            Ok(config) => match config.validate() {
                Ok(_) => println!("✅ Configuration is valid"),
                Err(e) => println!("❌ Configuration validation failed: {}", e),
            },
            Err(e) => println!("❌ Failed to load configuration: {}", e),
        }
    }

    /// Show effective configuration
    fn show_config(&self) -> Result<()> {
        let path = self.get_config_path();
        println!("Configuration file: {}", path.display());
        println!();
        println!("=== Effective Configuration ===");
        println!();
        println!("{}", self.config.to_toml()?);

        Ok(())
    }

    /// Get configuration file path (from args or default)
    fn get_config_path(&self) -> PathBuf {
        self.args
            .config_file
            .clone()
            .unwrap_or_else(Config::default_path)
    }

    /// Print banner with version information
    pub fn print_banner(&self) {
        if !self.args.quiet {
            println!(
                "moltsh {} (Molt Tcl). Type \"exit\" or press Ctrl-D to quit.",
                env!("CARGO_PKG_VERSION")
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_cli(argv: &[&str]) -> CliInterface {
        let args = CliArgs::try_parse_from(argv).unwrap();
        let mut config = Config::default();
        CliInterface::apply_args_to_config(&mut config, &args);
        CliInterface { args, config }
    }

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(["moltsh"]).unwrap();
        assert!(args.script.is_none());
        assert!(args.command.is_none());
        assert!(!args.no_interactive);
    }

    #[test]
    fn test_cli_args_with_script() {
        let args = CliArgs::try_parse_from(["moltsh", "setup.tcl", "--echo", "-n"]).unwrap();
        assert_eq!(args.script, Some(PathBuf::from("setup.tcl")));
        assert!(args.echo);
        assert!(args.no_interactive);
    }

    #[test]
    fn test_cli_args_with_flags() {
        let args = CliArgs::try_parse_from(["moltsh", "--no-color", "--quiet"]).unwrap();
        assert!(args.no_color);
        assert!(args.quiet);
    }

    #[test]
    fn test_cli_subcommands() {
        let args = CliArgs::try_parse_from(["moltsh", "completion", "zsh"]).unwrap();
        assert!(matches!(args.command, Some(Commands::Completion { ref shell }) if shell == "zsh"));

        let args = CliArgs::try_parse_from(["moltsh", "config", "--show"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Commands::Config {
                show: true,
                validate: false
            })
        ));
    }

    #[test]
    fn test_logging_level_from_flags() {
        assert_eq!(create_test_cli(&["moltsh"]).config().logging.level, LogLevel::Warn);
        assert_eq!(
            create_test_cli(&["moltsh", "-v"]).config().logging.level,
            LogLevel::Debug
        );
        assert_eq!(
            create_test_cli(&["moltsh", "--vv", "-q"]).config().logging.level,
            LogLevel::Trace
        );
        assert_eq!(
            create_test_cli(&["moltsh", "-q"]).config().logging.level,
            LogLevel::Error
        );
    }

    #[test]
    fn test_display_and_history_flags() {
        let cli = create_test_cli(&["moltsh", "--no-color", "--no-history"]);
        assert!(!cli.config().display.color_output);
        assert!(!cli.config().history.persist);
    }

    #[test]
    fn test_mode_selection() {
        let cli = create_test_cli(&["moltsh", "run.tcl"]);
        assert_eq!(cli.script_path(), Some(Path::new("run.tcl")));
        assert!(cli.interactive());
        assert!(!cli.echo());

        let cli = create_test_cli(&["moltsh", "run.tcl", "--no-interactive"]);
        assert!(!cli.interactive());
    }

    #[test]
    fn test_from_args_with_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[prompt]\nmain = \"% \"\n").unwrap();

        let args = CliArgs::try_parse_from([
            "moltsh",
            "-c",
            path.to_str().unwrap(),
            "--no-history",
        ])
        .unwrap();
        let cli = CliInterface::from_args(args).unwrap();
        assert_eq!(cli.config().prompt.main, "% ");
        assert!(!cli.config().history.persist);
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[history]\nmax_size = 0\n").unwrap();

        let args = CliArgs::try_parse_from(["moltsh", "-c", path.to_str().unwrap()]).unwrap();
        let cli = CliInterface::from_args(args).unwrap();
        assert_eq!(cli.config().history.max_size, 100);
    }
}
