//! Receiver contract for log events coming from the external runtime

use crate::{Location, LogResult, Severity};

/// A receiver of unit-tagged log events
///
/// The external runtime holds exactly one active receiver and calls it from
/// any of its worker threads, so implementations must be thread-safe.
pub trait UnitLogger: Send + Sync {
    /// Emit a single event
    ///
    /// Sink failures are returned to the caller; nothing is retried.
    fn log(
        &self,
        level: Severity,
        unit: &str,
        location: &Location<'_>,
        message: &str,
    ) -> LogResult<()>;

    /// Effective threshold for `unit`
    fn level_for_unit(&self, unit: &str) -> Severity;

    /// Set the threshold for `unit`
    fn set_level_for_unit(&self, unit: &str, level: Severity);

    /// Set the root threshold
    fn set_level(&self, level: Severity) {
        self.set_level_for_unit("", level);
    }

    /// Check whether `level` passes the threshold of `unit`
    fn is_enabled(&self, level: Severity, unit: &str) -> bool {
        level >= self.level_for_unit(unit)
    }
}
