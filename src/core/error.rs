//! Error types for the logging facility

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Unrecognized file format name
    #[error("invalid file format: '{0}' (expected 'json' or 'csv')")]
    InvalidFormat(String),

    /// Lazy log directory creation was denied or blocked
    #[error("failed to create log directory '{path}': {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error while initializing or appending to a log file
    #[error("failed to write log file '{path}': {source}")]
    FileWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Record could not be encoded in the requested format
    #[error("failed to serialize record as {format}: {message}")]
    SerializationFailed { format: String, message: String },
}

impl LoggerError {
    /// Create a directory creation error for a path
    pub fn directory_creation(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoggerError::DirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a file write error for a path
    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoggerError::FileWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a serialization error for a format
    pub fn serialization(format: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::SerializationFailed {
            format: format.into(),
            message: message.into(),
        }
    }
}
