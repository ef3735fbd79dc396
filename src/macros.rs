//! Logging macros for ergonomic message formatting.
//!
//! Each macro formats its arguments like `format!` and invokes the blocking
//! call surface with default options, returning that call's `Result` so the
//! caller decides how persistence failures are handled.
//!
//! # Examples
//!
//! ```no_run
//! use log_manager_system::prelude::*;
//! use log_manager_system::{error, info};
//!
//! # fn main() -> log_manager_system::Result<()> {
//! let log = LogManager::new();
//!
//! info!(log, "server listening on port {}", 8080)?;
//! error!(log, "request {} failed", "abc-123")?;
//! # Ok(())
//! # }
//! ```

/// Log a message at an explicit level over the blocking surface.
///
/// ```no_run
/// # use log_manager_system::prelude::*;
/// # let logger = LogManager::new();
/// use log_manager_system::log;
/// let _ = log!(logger, LogLevel::Info, "status code: {}", 200);
/// ```
#[macro_export]
macro_rules! log {
    ($manager:expr, $level:expr, $($arg:tt)+) => {
        $manager.log_sync($level, format!($($arg)+), $crate::LogOptions::default())
    };
}

/// Log a debug-level message (console only by default).
#[macro_export]
macro_rules! debug {
    ($manager:expr, $($arg:tt)+) => {
        $crate::log!($manager, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message (console only by default).
#[macro_export]
macro_rules! info {
    ($manager:expr, $($arg:tt)+) => {
        $crate::log!($manager, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message (persisted by default).
#[macro_export]
macro_rules! warning {
    ($manager:expr, $($arg:tt)+) => {
        $crate::log!($manager, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message (persisted by default).
#[macro_export]
macro_rules! error {
    ($manager:expr, $($arg:tt)+) => {
        $crate::log!($manager, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message (persisted by default).
#[macro_export]
macro_rules! critical {
    ($manager:expr, $($arg:tt)+) => {
        $crate::log!($manager, $crate::LogLevel::Critical, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{FileFormat, LogManager, ManagerConfig};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_macros_format_and_gate() {
        let dir = tempdir().expect("Failed to create temp dir");
        let logger = LogManager::with_config(
            ManagerConfig::new()
                .with_log_dir(dir.path())
                .with_default_format(FileFormat::Json),
        )
        .with_colors(false);

        debug!(logger, "skipped {}", 1).unwrap();
        error!(logger, "request {} failed with {}", "abc", 500).unwrap();

        assert!(!dir.path().join("json/debug.json").exists());
        let content = fs::read_to_string(dir.path().join("json/error.json")).unwrap();
        assert!(content.contains("request abc failed with 500"));
    }
}
