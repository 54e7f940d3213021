//! Configuration management for moltsh
//!
//! This module handles loading, parsing, and validating the configuration
//! file (TOML format). Every section and field is optional; anything left out
//! takes its default value.
//!
//! Configuration precedence (highest to lowest):
//! 1. Command-line arguments
//! 2. Configuration file
//! 3. Default values

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Prompt strings
    #[serde(default)]
    pub prompt: PromptConfig,

    /// History configuration
    #[serde(default)]
    pub history: HistoryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Display configuration
    #[serde(default)]
    pub display: DisplayConfig,

    /// Completion configuration
    #[serde(default)]
    pub completion: CompletionConfig,
}

/// Prompt strings for fresh and continued input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Prompt shown when a new command starts
    #[serde(default = "default_prompt_main")]
    pub main: String,

    /// Prompt shown while a command spans several lines
    #[serde(default = "default_prompt_continuation")]
    pub continuation: String,
}

/// Command history configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of history entries
    #[serde(default = "default_max_history_size")]
    pub max_size: usize,

    /// Path to history file
    #[serde(default = "default_history_file")]
    pub file_path: PathBuf,

    /// Enable history persistence
    #[serde(default = "default_persist_history")]
    pub persist: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Enable timestamps in logs
    #[serde(default = "default_log_timestamps")]
    pub timestamps: bool,
}

/// Log level options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Enable colored output (dimmed hints)
    #[serde(default = "default_color_output")]
    pub color_output: bool,

    /// Show history-based hints while typing
    #[serde(default = "default_hints")]
    pub hints: bool,
}

/// Completion configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Install the script command that registers argument candidates
    #[serde(default = "default_provide_command")]
    pub provide_command: bool,

    /// Name of that command
    #[serde(default = "default_command_name")]
    pub command_name: String,

    /// Extra argument candidates, registered after the built-in tables
    #[serde(default)]
    pub commands: BTreeMap<String, Vec<String>>,
}

// Default value functions
fn default_prompt_main() -> String {
    "> ".to_string()
}

fn default_prompt_continuation() -> String {
    ": ".to_string()
}

fn default_max_history_size() -> usize {
    100
}

fn default_history_file() -> PathBuf {
    home_dir().join(".moltsh_history")
}

fn default_persist_history() -> bool {
    true
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

fn default_log_timestamps() -> bool {
    false
}

fn default_color_output() -> bool {
    true
}

fn default_hints() -> bool {
    true
}

fn default_provide_command() -> bool {
    true
}

fn default_command_name() -> String {
    "moltsh::add_completion".to_string()
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            main: default_prompt_main(),
            continuation: default_prompt_continuation(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_size: default_max_history_size(),
            file_path: default_history_file(),
            persist: default_persist_history(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            timestamps: default_log_timestamps(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_output: default_color_output(),
            hints: default_hints(),
        }
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            provide_command: default_provide_command(),
            command_name: default_command_name(),
            commands: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file
    ///
    /// With an explicit `path` the file must exist. Without one, the default
    /// location is tried and a missing file yields the defaults.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file (TOML format)
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    pub fn load_from_file(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::default_path(), false),
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigError::FileNotFound(path.display().to_string()).into());
            }
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;
        config.history.file_path = expand_home(&config.history.file_path);
        Ok(config)
    }

    /// Get the default configuration file path
    ///
    /// # Returns
    /// * `PathBuf` - Path to default configuration file
    pub fn default_path() -> PathBuf {
        home_dir().join(".moltsh").join("config.toml")
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Generic(format!("Failed to serialize config: {e}")).into())
    }

    /// Validate the configuration
    ///
    /// # Returns
    /// * `Result<()>` - Ok if valid, error otherwise
    pub fn validate(&self) -> Result<()> {
        if self.history.max_size == 0 {
            return Err(invalid("history.max_size", "0"));
        }
        if self.completion.command_name.trim().is_empty() {
            return Err(invalid(
                "completion.command_name",
                &self.completion.command_name,
            ));
        }
        if self.prompt.main.is_empty() {
            return Err(invalid("prompt.main", ""));
        }
        if self.prompt.continuation.is_empty() {
            return Err(invalid("prompt.continuation", ""));
        }
        Ok(())
    }
}

fn invalid(field: &str, value: &str) -> crate::error::ShellError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
    .into()
}

/// Replace a leading `~` with the home directory
fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => home_dir().join(rest),
        Err(_) => path.to_path_buf(),
    }
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}
