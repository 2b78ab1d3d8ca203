//! In-memory sink

use crate::{Handler, Layout, LogRecord};
use parking_lot::Mutex;
use std::sync::Arc;
use traylog_core::LogResult;

/// Keeps formatted lines in memory
///
/// Clones share the same buffer, so a caller can hand one clone to the
/// facility and read the lines through another.
#[derive(Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
    layout: Layout,
}

impl MemorySink {
    /// Create an empty sink with the plain layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sink with the given layout
    pub fn with_layout(layout: Layout) -> Self {
        Self {
            lines: Arc::default(),
            layout,
        }
    }

    /// Snapshot of the lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Number of lines written so far
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Discard all captured lines
    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Handler for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    fn emit(&mut self, record: &LogRecord) -> LogResult<()> {
        let line = self.layout.format(record);
        self.lines.lock().push(line);
        Ok(())
    }
}
