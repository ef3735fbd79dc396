//! Log record structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use serde::Serialize;

/// One record per log call, immutable after construction.
///
/// The timestamp is the single clock snapshot taken when the call was made;
/// the projections below render it for the console line, the CSV row, and
/// the JSON-lines record respectively.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub message: String,
    pub logger_name: String,
    pub process_id: u32,
}

impl LogRecord {
    pub fn new(
        level: LogLevel,
        message: String,
        logger_name: String,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            timestamp,
            level,
            message,
            logger_name,
            process_id: std::process::id(),
        }
    }

    /// Console form: `08/05/26 14:30:12`
    pub fn display_timestamp(&self) -> String {
        self.timestamp.format("%m/%d/%y %H:%M:%S").to_string()
    }

    /// CSV row form: `2026-08-05 14:30:12`
    pub fn file_timestamp(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    /// JSON-lines form, ISO 8601 at seconds precision: `2026-08-05T14:30:12`
    pub fn iso_timestamp(&self) -> String {
        self.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
    }

    #[test]
    fn test_timestamp_projections() {
        let record = LogRecord::new(
            LogLevel::Info,
            "hello".to_string(),
            "log".to_string(),
            fixed_datetime(),
        );

        assert_eq!(record.display_timestamp(), "01/08/25 10:30:45");
        assert_eq!(record.file_timestamp(), "2025-01-08 10:30:45");
        assert_eq!(record.iso_timestamp(), "2025-01-08T10:30:45");
    }

    #[test]
    fn test_record_captures_process_id() {
        let record = LogRecord::new(
            LogLevel::Error,
            "boom".to_string(),
            "log".to_string(),
            fixed_datetime(),
        );
        assert_eq!(record.process_id, std::process::id());
    }
}
