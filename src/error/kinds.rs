use std::{fmt, io};

/// Crate-wide `Result` type using [`ShellError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, ShellError>;

/// Top-level error type for moltsh operations.
///
/// This type wraps more specific error kinds and provides a single
/// error type that can be used throughout the crate.
#[derive(Debug)]
pub enum ShellError {
    /// Configuration errors.
    Config(ConfigError),

    /// Script file errors.
    Script(ScriptError),

    /// I/O errors.
    Io(io::Error),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Error result of an interpreter evaluation.
///
/// Carries the interpreter's own error message verbatim, so it can be shown
/// to the user exactly as the interpreter reported it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpError {
    message: String,
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },

    /// Any other configuration problem.
    Generic(String),
}

/// Script file errors.
#[derive(Debug)]
pub enum ScriptError {
    /// Script file not found.
    FileNotFound(String),

    /// Script file could not be read.
    ReadFailed(String),
}

impl InterpError {
    /// Create an error from the interpreter's message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The interpreter's message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Config(e) => write!(f, "Configuration error: {e}"),
            ShellError::Script(e) => write!(f, "Script error: {e}"),
            ShellError::Io(e) => write!(f, "I/O error: {e}"),
            ShellError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for InterpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
            ConfigError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::FileNotFound(path) => write!(f, "failed to open file {path}"),
            ScriptError::ReadFailed(msg) => write!(f, "failed to read script: {msg}"),
        }
    }
}

impl std::error::Error for ShellError {}
impl std::error::Error for InterpError {}
impl std::error::Error for ConfigError {}
impl std::error::Error for ScriptError {}

/* ========================= Conversions to ShellError ========================= */

impl From<io::Error> for ShellError {
    fn from(err: io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<ConfigError> for ShellError {
    fn from(err: ConfigError) -> Self {
        ShellError::Config(err)
    }
}

impl From<ScriptError> for ShellError {
    fn from(err: ScriptError) -> Self {
        ShellError::Script(err)
    }
}

impl From<String> for ShellError {
    fn from(msg: String) -> Self {
        ShellError::Generic(msg)
    }
}

impl From<&str> for ShellError {
    fn from(msg: &str) -> Self {
        ShellError::Generic(msg.to_owned())
    }
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ShellError::Generic(format!("Readline error: {err}"))
    }
}
