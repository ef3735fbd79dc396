//! Manager configuration
//!
//! Defaults are plain construction-time values, not process-global mutable
//! state: two managers with different configs never interfere except through
//! the filesystem itself.

use super::record_format::FileFormat;
use std::path::PathBuf;

/// Directory used when no log directory is configured
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Logger name stamped into persisted records when none is configured
pub const DEFAULT_LOGGER_NAME: &str = "log";

/// Configuration fixed at [`LogManager`](crate::LogManager) construction.
///
/// No I/O happens here; directories under `log_dir` are created lazily by
/// the first call that persists a record.
#[derive(Debug, Clone)]
pub struct ManagerConfig {
    /// Base directory for persisted log files
    pub log_dir: PathBuf,
    /// Format used when a call does not request one
    pub default_format: FileFormat,
    /// Name stamped into each persisted record
    pub logger_name: String,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            default_format: FileFormat::default(),
            logger_name: DEFAULT_LOGGER_NAME.to_string(),
        }
    }
}

impl ManagerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base directory for persisted log files
    #[must_use]
    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = log_dir.into();
        self
    }

    /// Set the format used when a call does not request one
    #[must_use]
    pub fn with_default_format(mut self, format: FileFormat) -> Self {
        self.default_format = format;
        self
    }

    /// Set the name stamped into each persisted record
    #[must_use]
    pub fn with_logger_name(mut self, name: impl Into<String>) -> Self {
        self.logger_name = name.into();
        self
    }
}
