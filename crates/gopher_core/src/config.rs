//! Runtime configuration for the gopher core.
//!
//! # Responsibility
//! - Describe how logging should be initialized.
//! - Resolve settings from the process environment.
//!
//! # Invariants
//! - Blank environment values are treated as unset.

use crate::logging::default_log_level;
use std::path::PathBuf;

/// Environment variable overriding the log level.
pub const LOG_LEVEL_ENV: &str = "GOPHER_LOG_LEVEL";
/// Environment variable selecting a rolling log directory.
pub const LOG_DIR_ENV: &str = "GOPHER_LOG_DIR";

/// Logging settings consumed by `crate::logging::init_logging`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// One of `trace|debug|info|warn|error` (case-insensitive).
    pub level: String,
    /// Absolute directory for rolling log files; `None` logs to stderr.
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl LoggingConfig {
    /// Reads `GOPHER_LOG_LEVEL` / `GOPHER_LOG_DIR`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(level) = non_blank(lookup(LOG_LEVEL_ENV)) {
            config.level = level;
        }
        if let Some(dir) = non_blank(lookup(LOG_DIR_ENV)) {
            config.log_dir = Some(PathBuf::from(dir));
        }
        config
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(log_dir.into());
        self
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
