//! # Log Manager System
//!
//! A leveled logging facility with styled console output and selective
//! per-level file persistence in CSV or JSON-lines format.
//!
//! ## Features
//!
//! - **Five Severities**: DEBUG through CRITICAL, with per-level colors
//!   and a persist-by-default policy (WARNING and above reach a file)
//! - **Two Call Surfaces**: every level has a suspending and a blocking
//!   method sharing one policy pipeline
//! - **Two File Formats**: CSV rows under a one-time header, or
//!   self-describing JSON-lines records
//! - **Lazy Layout**: `<log_dir>/<format>/<level>.<ext>` is created on the
//!   first persisted write, race-safely
//!
//! ## Example
//!
//! ```no_run
//! use log_manager_system::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> log_manager_system::Result<()> {
//!     let log = LogManager::new();
//!
//!     // Console only: DEBUG and INFO do not persist by default
//!     log.debug("probe", LogOptions::default()).await?;
//!
//!     // WARNING and above land in logs/json/<level>.json
//!     log.warning("low disk space", LogOptions::default()).await?;
//!
//!     // Per-call overrides
//!     log.info("kept", LogOptions::persist()).await?;
//!     log.error("boom", LogOptions::default().with_file_format(FileFormat::Csv))
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileRouter};
    pub use crate::core::{
        Clock, FileFormat, FixedClock, LogLevel, LogManager, LogOptions, LogRecord, LoggerError,
        ManagerConfig, Result, SystemClock, CSV_HEADER, DEFAULT_LOGGER_NAME, DEFAULT_LOG_DIR,
    };
}

pub use crate::appenders::{ConsoleAppender, FileRouter};
pub use crate::core::{
    Clock, FileFormat, FixedClock, LogLevel, LogManager, LogOptions, LogRecord, LoggerError,
    ManagerConfig, Result, SystemClock, CSV_HEADER, DEFAULT_LOGGER_NAME, DEFAULT_LOG_DIR,
};
