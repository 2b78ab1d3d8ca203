//! Immutable log records

use crate::HostLevel;
use chrono::{DateTime, Local};

/// A single log event as dispatched to handlers
///
/// Records are never mutated after construction; handlers only read them.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    logger: String,
    level: HostLevel,
    pathname: String,
    line: u32,
    function: Option<String>,
    message: String,
    created: DateTime<Local>,
}

impl LogRecord {
    /// Create a record stamped with the current local time
    pub fn new(
        logger: impl Into<String>,
        level: HostLevel,
        pathname: impl Into<String>,
        line: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            logger: logger.into(),
            level,
            pathname: pathname.into(),
            line,
            function: None,
            message: message.into(),
            created: Local::now(),
        }
    }

    /// Attach the emitting function name
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    /// Override the creation time
    pub fn with_created(mut self, created: DateTime<Local>) -> Self {
        self.created = created;
        self
    }

    /// Name of the logger the record was created for
    pub fn logger(&self) -> &str {
        &self.logger
    }

    /// Facility level of the record
    pub fn level(&self) -> HostLevel {
        self.level
    }

    /// Source path as given by the caller
    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Final path component of [`pathname`](Self::pathname)
    pub fn filename(&self) -> &str {
        self.pathname
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.pathname)
    }

    /// Source line number
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Function name, when known
    pub fn function(&self) -> Option<&str> {
        self.function.as_deref()
    }

    /// The message text
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Local time the record was created
    pub fn created(&self) -> DateTime<Local> {
        self.created
    }
}
