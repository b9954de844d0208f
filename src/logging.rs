//! Logger setup.
//!
//! The tree itself only talks to the [`log`] facade (rotations and fixup cases
//! at `trace`, slot reuse at `debug`), so it is silent until something
//! installs a logger. This module installs a [`simplelog`] one.

use std::fmt::Display;
use std::fs::File;
use std::path::PathBuf;

use log::SetLoggerError;
use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};

/// Environment variable overriding [`LogConfig::term_level`].
pub const LEVEL_VAR: &str = "RBTREE_LOG";
/// Environment variable setting [`LogConfig::file`].
pub const FILE_VAR: &str = "RBTREE_LOG_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Level of messages written to the terminal.
    pub term_level: LevelFilter,
    /// Level of messages written to `file`.
    pub file_level: LevelFilter,
    /// Also log to this file (truncated on startup).
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            term_level: LevelFilter::Warn,
            file_level: LevelFilter::Debug,
            file: None,
        }
    }
}

impl LogConfig {
    /// Applies `RBTREE_LOG` (`off`, `error`, `warn`, `info`, `debug` or `trace`)
    /// and `RBTREE_LOG_FILE` on top of `self`.
    ///
    /// A level that doesn't parse is ignored.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(std::env::var(LEVEL_VAR).ok(), std::env::var_os(FILE_VAR).map(PathBuf::from))
    }

    fn with_overrides(mut self, level: Option<String>, file: Option<PathBuf>) -> Self {
        if let Some(level) = level.and_then(|l| l.trim().parse().ok()) {
            self.term_level = level;
        }
        if file.is_some() {
            self.file = file;
        }
        self
    }
}

#[derive(Debug)]
pub enum LogInitError {
    /// A global logger was already installed.
    AlreadyInitialized(SetLoggerError),
    /// The log file couldn't be created.
    LogFile(std::io::Error),
}

impl Display for LogInitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogInitError::AlreadyInitialized(_) => f.write_str("a logger has already been installed"),
            LogInitError::LogFile(e) => write!(f, "couldn't create the log file: {e}"),
        }
    }
}

impl std::error::Error for LogInitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogInitError::AlreadyInitialized(e) => Some(e),
            LogInitError::LogFile(e) => Some(e),
        }
    }
}

/// Installs a terminal logger, plus a file logger if `config.file` is set.
///
/// Can only succeed once per process.
pub fn initialize_logging(config: &LogConfig) -> Result<(), LogInitError> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(TermLogger::new(config.term_level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto));

    if let Some(path) = &config.file {
        let file = File::create(path).map_err(LogInitError::LogFile)?;
        loggers.push(WriteLogger::new(config.file_level, Config::default(), file));
    }

    CombinedLogger::init(loggers).map_err(LogInitError::AlreadyInitialized)
}
