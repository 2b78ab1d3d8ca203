//! Console sink

use crate::{Handler, Layout, LogRecord};
use std::io::Write;
use traylog_core::LogResult;

/// Writes one line per record to stderr or another writer
pub struct ConsoleSink {
    writer: Box<dyn Write + Send>,
    layout: Layout,
}

impl ConsoleSink {
    /// Console sink on stderr with the plain layout
    pub fn stderr() -> Self {
        Self::with_writer(std::io::stderr())
    }

    /// Console sink writing to any writer
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Box::new(writer),
            layout: Layout::Plain,
        }
    }

    /// Use a different layout
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stderr()
    }
}

impl Handler for ConsoleSink {
    fn name(&self) -> &str {
        "console"
    }

    fn emit(&mut self, record: &LogRecord) -> LogResult<()> {
        let mut line = self.layout.format(record);
        line.push('\n');
        self.writer.write_all(line.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> LogResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}
