//! Persisted record formats
//!
//! Two on-disk formats share one record model:
//! - Csv: `timestamp,level,message` rows under a one-time header
//! - Json: one self-describing JSON object per line, no header

use super::error::{LoggerError, Result};
use super::log_record::LogRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CSV column header, written exactly once per file
pub const CSV_HEADER: &str = "timestamp,level,message";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    /// JSON-lines: each line is an independently parseable object
    #[default]
    Json,

    /// Row-oriented CSV with RFC 4180 quoting for the message field
    Csv,
}

/// Serialize-only shape of one JSON-lines record; field order is the
/// on-disk key order.
#[derive(Serialize)]
struct JsonRecord<'a> {
    timestamp: String,
    level: &'static str,
    message: &'a str,
    logger_name: &'a str,
    process_id: u32,
}

impl FileFormat {
    /// Subdirectory under the log directory holding files of this format
    pub fn dir_name(&self) -> &'static str {
        match self {
            FileFormat::Json => "json",
            FileFormat::Csv => "csv",
        }
    }

    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Json => "json",
            FileFormat::Csv => "csv",
        }
    }

    /// Initialization line written when a file of this format is first
    /// created, if the format has one
    pub fn header_line(&self) -> Option<String> {
        match self {
            FileFormat::Json => None,
            FileFormat::Csv => Some(format!("{}\r\n", CSV_HEADER)),
        }
    }

    /// Encode a record as exactly one terminated line
    pub fn encode(&self, record: &LogRecord) -> Result<String> {
        match self {
            FileFormat::Json => self.encode_json(record),
            FileFormat::Csv => Ok(self.encode_csv(record)),
        }
    }

    fn encode_json(&self, record: &LogRecord) -> Result<String> {
        let json_record = JsonRecord {
            timestamp: record.iso_timestamp(),
            level: record.level.to_str(),
            message: &record.message,
            logger_name: &record.logger_name,
            process_id: record.process_id,
        };

        let line = serde_json::to_string(&json_record)
            .map_err(|e| LoggerError::serialization("json", e.to_string()))?;
        Ok(format!("{}\n", line))
    }

    fn encode_csv(&self, record: &LogRecord) -> String {
        // Timestamp and level labels never contain delimiters; only the
        // message needs quoting.
        format!(
            "{},{},{}\r\n",
            record.file_timestamp(),
            record.level.to_str(),
            escape_csv_field(&record.message)
        )
    }
}

/// Quote a CSV field per RFC 4180: fields containing the delimiter, a quote,
/// or a line break are wrapped in quotes with embedded quotes doubled.
fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

impl FromStr for FileFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(FileFormat::Json),
            "csv" => Ok(FileFormat::Csv),
            other => Err(LoggerError::InvalidFormat(other.to_string())),
        }
    }
}
