//! File routing and append-only persistence
//!
//! One target file exists per `(format, level)` pair under the base
//! directory. Targets are initialized lazily and exactly once per process:
//! missing directories are created, and a fresh CSV file gets its header
//! before any record can be appended to it. Appends open the file per write
//! and flush before returning, so a completed call is durable on disk.

use crate::core::{FileFormat, LogLevel, LoggerError, Result};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

pub struct FileRouter {
    base_dir: PathBuf,
    targets: Mutex<HashMap<(FileFormat, LogLevel), TargetState>>,
}

/// Lazily-initialized per-target state
struct TargetState {
    path: PathBuf,
    ready: bool,
}

impl FileRouter {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            targets: Mutex::new(HashMap::new()),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Deterministic target path: `<base_dir>/<format>/<level>.<ext>`
    pub fn resolve(&self, format: FileFormat, level: LogLevel) -> PathBuf {
        self.base_dir
            .join(format.dir_name())
            .join(format!("{}.{}", level.file_stem(), format.extension()))
    }

    /// Resolve a target and perform its one-time initialization.
    ///
    /// The mutex serializes first-time writers in this process; the
    /// create-new open keeps a pre-existing file from receiving a second
    /// header. A failed initialization leaves the target uninitialized, so
    /// a later call retries rather than appending to a half-made target.
    pub fn ensure_target(&self, format: FileFormat, level: LogLevel) -> Result<PathBuf> {
        let mut targets = self.targets.lock();
        let state = targets
            .entry((format, level))
            .or_insert_with(|| TargetState {
                path: self.resolve(format, level),
                ready: false,
            });

        if state.ready {
            return Ok(state.path.clone());
        }

        if let Some(parent) = state.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| LoggerError::directory_creation(parent, e))?;
        }

        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&state.path)
        {
            Ok(mut file) => {
                if let Some(header) = format.header_line() {
                    file.write_all(header.as_bytes())
                        .map_err(|e| LoggerError::file_write(&state.path, e))?;
                    file.flush()
                        .map_err(|e| LoggerError::file_write(&state.path, e))?;
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {}
            Err(e) => return Err(LoggerError::file_write(&state.path, e)),
        }

        state.ready = true;
        Ok(state.path.clone())
    }

    /// Append one encoded line, blocking the caller
    pub fn append_sync(&self, path: &Path, line: &str) -> Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(|e| LoggerError::file_write(path, e))?;

        // Whole line in a single write keeps appends atomic at record
        // granularity.
        file.write_all(line.as_bytes())
            .map_err(|e| LoggerError::file_write(path, e))?;
        file.flush().map_err(|e| LoggerError::file_write(path, e))?;
        Ok(())
    }

    /// Append one encoded line without blocking the caller's thread
    pub async fn append(&self, path: &Path, line: &str) -> Result<()> {
        let mut file = tokio::fs::OpenOptions::new()
            .append(true)
            .open(path)
            .await
            .map_err(|e| LoggerError::file_write(path, e))?;

        file.write_all(line.as_bytes())
            .await
            .map_err(|e| LoggerError::file_write(path, e))?;
        file.flush()
            .await
            .map_err(|e| LoggerError::file_write(path, e))?;
        Ok(())
    }
}
