//! Plain-text record layout

use crate::LogRecord;

/// Timestamp format of [`Layout::Timestamped`], millisecond precision
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Line layout shared by the text sinks
///
/// `Plain` renders `<file>:<line> <LEVELNAME>: <message>`; `Timestamped`
/// prefixes that with `[<local time>] `.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    #[default]
    Plain,
    Timestamped,
}

impl Layout {
    /// Render a record without a trailing newline
    pub fn format(&self, record: &LogRecord) -> String {
        let body = format!(
            "{}:{} {}: {}",
            record.filename(),
            record.line(),
            record.level().name(),
            record.message()
        );
        match self {
            Layout::Plain => body,
            Layout::Timestamped => format!(
                "[{}] {}",
                record.created().format(TIMESTAMP_FORMAT),
                body
            ),
        }
    }
}

#[cfg(test)]
#[path = "layout/layout_tests.rs"]
mod layout_tests;
