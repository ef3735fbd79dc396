//! Log manager implementation
//!
//! One policy pipeline serves both call surfaces: [`LogManager::prepare`]
//! renders the console line, applies the persistence gate, encodes the
//! record, and resolves the target. The suspending methods await the file
//! append; the blocking methods perform it inline. Nothing else differs
//! between the two, so their on-disk outcomes cannot diverge.

use super::{
    clock::{Clock, SystemClock},
    config::ManagerConfig,
    error::Result,
    log_level::LogLevel,
    log_record::LogRecord,
    record_format::FileFormat,
};
use crate::appenders::{ConsoleAppender, FileRouter};
use std::path::PathBuf;
use std::sync::Arc;

/// Per-call options, the typed form of `save_file` / `file_format` keywords.
///
/// Defaults mean: persist only when the level persists by default, in the
/// manager's default format.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOptions {
    /// Persist this record even if the level is console-only by default
    pub save_file: bool,
    /// Format override for this record; `None` uses the manager default
    pub file_format: Option<FileFormat>,
}

impl LogOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for `save_file = true`
    #[must_use]
    pub fn persist() -> Self {
        Self {
            save_file: true,
            file_format: None,
        }
    }

    #[must_use]
    pub fn with_save_file(mut self, save_file: bool) -> Self {
        self.save_file = save_file;
        self
    }

    #[must_use]
    pub fn with_file_format(mut self, format: FileFormat) -> Self {
        self.file_format = Some(format);
        self
    }
}

/// An encoded record waiting on its file append, produced by the shared
/// pipeline and consumed by whichever surface made the call
struct PendingWrite {
    path: PathBuf,
    line: String,
}

/// Leveled logger with console rendering and per-level file persistence.
///
/// Instances are independent: each owns its configuration and target state,
/// and two managers share nothing but the filesystem.
///
/// ```no_run
/// use log_manager_system::prelude::*;
///
/// # fn main() -> log_manager_system::Result<()> {
/// let log = LogManager::new();
/// log.info_sync("console only", LogOptions::default())?;
/// log.info_sync("forced to logs/json/info.json", LogOptions::persist())?;
/// log.error_sync(
///     "persisted by default, as CSV for this call",
///     LogOptions::default().with_file_format(FileFormat::Csv),
/// )?;
/// # Ok(())
/// # }
/// ```
pub struct LogManager {
    config: ManagerConfig,
    console: ConsoleAppender,
    router: FileRouter,
    clock: Arc<dyn Clock>,
}

impl LogManager {
    /// Create a manager with the process defaults (`logs/`, JSON-lines)
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ManagerConfig::default())
    }

    /// Create a manager from an explicit configuration.
    ///
    /// Performs no I/O; the log directory is created by the first call that
    /// persists a record, so a bad `log_dir` fails that call, not this one.
    #[must_use]
    pub fn with_config(config: ManagerConfig) -> Self {
        let router = FileRouter::new(config.log_dir.clone());
        Self {
            config,
            console: ConsoleAppender::new(),
            router,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the time source, for deterministic tests
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Disable console color styling
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.console = ConsoleAppender::with_colors(use_colors);
        self
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// The shared pipeline: one clock snapshot, console rendering (always),
    /// the persistence gate, and encoding/routing for gated-in records.
    fn prepare(
        &self,
        level: LogLevel,
        message: String,
        options: LogOptions,
    ) -> Result<Option<PendingWrite>> {
        let record = LogRecord::new(
            level,
            message,
            self.config.logger_name.clone(),
            self.clock.now(),
        );

        self.console.render(&record);

        if !(options.save_file || level.persists_by_default()) {
            return Ok(None);
        }

        let format = options.file_format.unwrap_or(self.config.default_format);
        let line = format.encode(&record)?;
        let path = self.router.ensure_target(format, level)?;
        Ok(Some(PendingWrite { path, line }))
    }

    /// Log a message, suspending around the file append when one is due.
    ///
    /// Returns after the console line was attempted and, if the record
    /// persists, after its bytes reached the file. Persistence errors
    /// propagate; console errors never do.
    pub async fn log(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        options: LogOptions,
    ) -> Result<()> {
        match self.prepare(level, message.into(), options)? {
            Some(write) => self.router.append(&write.path, &write.line).await,
            None => Ok(()),
        }
    }

    /// Blocking twin of [`log`](Self::log) with identical semantics
    pub fn log_sync(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        options: LogOptions,
    ) -> Result<()> {
        match self.prepare(level, message.into(), options)? {
            Some(write) => self.router.append_sync(&write.path, &write.line),
            None => Ok(()),
        }
    }

    pub async fn debug(&self, message: impl Into<String>, options: LogOptions) -> Result<()> {
        self.log(LogLevel::Debug, message, options).await
    }

    pub async fn info(&self, message: impl Into<String>, options: LogOptions) -> Result<()> {
        self.log(LogLevel::Info, message, options).await
    }

    pub async fn warning(&self, message: impl Into<String>, options: LogOptions) -> Result<()> {
        self.log(LogLevel::Warning, message, options).await
    }

    pub async fn error(&self, message: impl Into<String>, options: LogOptions) -> Result<()> {
        self.log(LogLevel::Error, message, options).await
    }

    pub async fn critical(&self, message: impl Into<String>, options: LogOptions) -> Result<()> {
        self.log(LogLevel::Critical, message, options).await
    }

    pub fn debug_sync(&self, message: impl Into<String>, options: LogOptions) -> Result<()> {
        self.log_sync(LogLevel::Debug, message, options)
    }

    pub fn info_sync(&self, message: impl Into<String>, options: LogOptions) -> Result<()> {
        self.log_sync(LogLevel::Info, message, options)
    }

    pub fn warning_sync(&self, message: impl Into<String>, options: LogOptions) -> Result<()> {
        self.log_sync(LogLevel::Warning, message, options)
    }

    pub fn error_sync(&self, message: impl Into<String>, options: LogOptions) -> Result<()> {
        self.log_sync(LogLevel::Error, message, options)
    }

    pub fn critical_sync(&self, message: impl Into<String>, options: LogOptions) -> Result<()> {
        self.log_sync(LogLevel::Critical, message, options)
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use chrono::{Local, TimeZone};
    use std::fs;
    use tempfile::tempdir;

    fn fixed_clock() -> Arc<FixedClock> {
        let instant = Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime");
        Arc::new(FixedClock(instant))
    }

    fn manager(log_dir: &std::path::Path) -> LogManager {
        LogManager::with_config(ManagerConfig::new().with_log_dir(log_dir))
            .with_clock(fixed_clock())
            .with_colors(false)
    }

    #[test]
    fn test_construction_is_lazy() {
        let dir = tempdir().expect("Failed to create temp dir");
        let log_dir = dir.path().join("never_created");
        let _manager = manager(&log_dir);
        assert!(!log_dir.exists());
    }

    #[test]
    fn test_console_only_levels_write_no_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let log_dir = dir.path().join("t1");
        let manager = manager(&log_dir);

        manager.debug_sync("quiet", LogOptions::default()).unwrap();
        manager.info_sync("quiet", LogOptions::default()).unwrap();

        assert!(!log_dir.exists());
    }

    #[test]
    fn test_default_persist_levels_write_default_format() {
        let dir = tempdir().expect("Failed to create temp dir");
        let manager = manager(dir.path());

        manager.warning_sync("heads up", LogOptions::default()).unwrap();

        let content = fs::read_to_string(dir.path().join("json/warning.json"))
            .expect("warning file should exist");
        let parsed: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(parsed["level"], "WARNING");
        assert_eq!(parsed["message"], "heads up");
        assert_eq!(parsed["timestamp"], "2025-01-08T10:30:45");
    }

    #[test]
    fn test_save_file_overrides_console_only_default() {
        let dir = tempdir().expect("Failed to create temp dir");
        let manager = manager(dir.path());

        manager.debug_sync("keep me", LogOptions::persist()).unwrap();

        let content = fs::read_to_string(dir.path().join("json/debug.json"))
            .expect("debug file should exist");
        assert!(content.contains("keep me"));
    }

    #[test]
    fn test_per_call_format_override() {
        let dir = tempdir().expect("Failed to create temp dir");
        let manager = manager(dir.path());

        manager
            .error_sync("boom", LogOptions::default().with_file_format(FileFormat::Csv))
            .unwrap();

        assert!(!dir.path().join("json/error.json").exists());
        let content =
            fs::read_to_string(dir.path().join("csv/error.csv")).expect("csv file should exist");
        assert_eq!(
            content,
            "timestamp,level,message\r\n2025-01-08 10:30:45,ERROR,boom\r\n"
        );
    }

    #[test]
    fn test_csv_default_format_manager() {
        let dir = tempdir().expect("Failed to create temp dir");
        let manager = LogManager::with_config(
            ManagerConfig::new()
                .with_log_dir(dir.path())
                .with_default_format(FileFormat::Csv),
        )
        .with_clock(fixed_clock())
        .with_colors(false);

        manager.critical_sync("meltdown", LogOptions::default()).unwrap();

        assert!(dir.path().join("csv/critical.csv").exists());
        assert!(!dir.path().join("json").exists());
    }

    #[tokio::test]
    async fn test_async_surface_matches_sync_outcome() {
        let dir = tempdir().expect("Failed to create temp dir");
        let manager = manager(dir.path());

        manager.warning("first", LogOptions::default()).await.unwrap();
        manager.warning_sync("second", LogOptions::default()).unwrap();

        let content = fs::read_to_string(dir.path().join("json/warning.json")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        // Same shape from both surfaces, message aside
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(first["timestamp"], second["timestamp"]);
        assert_eq!(first["level"], second["level"]);
        assert_eq!(first["logger_name"], second["logger_name"]);
        assert_eq!(first["process_id"], second["process_id"]);
    }

    #[test]
    fn test_logger_name_flows_into_records() {
        let dir = tempdir().expect("Failed to create temp dir");
        let manager = LogManager::with_config(
            ManagerConfig::new()
                .with_log_dir(dir.path())
                .with_logger_name("worker"),
        )
        .with_clock(fixed_clock())
        .with_colors(false);

        manager.error_sync("named", LogOptions::default()).unwrap();

        let content = fs::read_to_string(dir.path().join("json/error.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(parsed["logger_name"], "worker");
    }
}
