//! Console appender implementation
//!
//! Console output is best-effort: a failed write must never fail the log
//! call or block file persistence, which is the durable path.

use crate::core::{LogLevel, LogRecord};
use colored::Colorize;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

pub struct ConsoleAppender {
    use_colors: bool,
    render_failed: AtomicBool,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            render_failed: AtomicBool::new(false),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            render_failed: AtomicBool::new(false),
        }
    }

    /// Render one aligned, colorized line for a record.
    ///
    /// Error and Critical lines go to stderr, everything else to stdout.
    /// A write failure is reported once on stderr and otherwise swallowed.
    pub fn render(&self, record: &LogRecord) {
        let line = self.format_line(record);

        let result = match record.level {
            LogLevel::Error | LogLevel::Critical => writeln!(std::io::stderr().lock(), "{}", line),
            _ => writeln!(std::io::stdout().lock(), "{}", line),
        };

        if result.is_err() && !self.render_failed.swap(true, Ordering::Relaxed) {
            eprintln!("[LOGGER WARNING] console rendering failed; file output unaffected");
        }
    }

    fn format_line(&self, record: &LogRecord) -> String {
        let label = format!("{:<width$}", record.level.to_str(), width = LogLevel::LABEL_WIDTH);

        let label = if self.use_colors {
            let colored_label = label.color(record.level.color_code());
            match record.level {
                LogLevel::Critical => colored_label.bold().to_string(),
                _ => colored_label.to_string(),
            }
        } else {
            label
        };

        format!(
            "[{}] | {} | {}",
            record.display_timestamp(),
            label,
            record.message
        )
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}
