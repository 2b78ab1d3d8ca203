//! Handler trait implemented by every sink

use crate::LogRecord;
use traylog_core::LogResult;

/// A destination for dispatched records
///
/// Handlers run while the facility's dispatch lock is held, so `emit` must
/// not log through the same facility.
pub trait Handler: Send {
    /// Short kind name such as `console` or `syslog`
    fn name(&self) -> &str;

    /// Write one record; a record must reach the destination in a single write
    fn emit(&mut self, record: &LogRecord) -> LogResult<()>;

    fn flush(&mut self) -> LogResult<()> {
        Ok(())
    }
}
