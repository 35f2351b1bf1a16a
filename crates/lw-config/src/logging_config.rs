use crate::{DEFAULT_LOG_COLORED, DEFAULT_LOG_LEVEL, LogLevel};

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub colored: bool,
    /// Write to this file instead of stdout.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            colored: DEFAULT_LOG_COLORED,
            file: None,
        }
    }
}
