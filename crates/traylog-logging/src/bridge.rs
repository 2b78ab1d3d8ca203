//! Bridge from runtime log events into the facility

use crate::mapping::{from_host, to_host};
use std::sync::Arc;
use traylog_core::{DEFAULT_NAMESPACE, Location, LogResult, Severity, UnitLogger};
use traylog_facility::{Facility, LogRecord};

/// Receiver that re-emits runtime events through a [`Facility`]
///
/// Unit `""` maps to the namespace logger (`icecube`), unit `I3Tray` to
/// `icecube.I3Tray`. The bridge translates levels and builds records; the
/// facility does all threshold checks and hierarchy resolution.
pub struct LogBridge {
    facility: Arc<Facility>,
    namespace: String,
}

impl LogBridge {
    /// Create a bridge under the default namespace
    pub fn new(facility: Arc<Facility>) -> Self {
        Self::with_namespace(facility, DEFAULT_NAMESPACE)
    }

    /// Create a bridge nesting unit loggers under `namespace`
    pub fn with_namespace(facility: Arc<Facility>, namespace: impl Into<String>) -> Self {
        Self {
            facility,
            namespace: namespace.into(),
        }
    }

    /// The facility records are handed to
    pub fn facility(&self) -> &Arc<Facility> {
        &self.facility
    }

    /// Logger namespace of this bridge
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Facility logger name for a unit
    pub fn logger_name(&self, unit: &str) -> String {
        match (self.namespace.is_empty(), unit.is_empty()) {
            (_, true) => self.namespace.clone(),
            (true, false) => unit.to_string(),
            (false, false) => format!("{}.{}", self.namespace, unit),
        }
    }
}

impl UnitLogger for LogBridge {
    fn log(
        &self,
        level: Severity,
        unit: &str,
        location: &Location<'_>,
        message: &str,
    ) -> LogResult<()> {
        let logger = self.facility.logger(&self.logger_name(unit));
        let mut record = LogRecord::new(
            logger.name(),
            to_host(level),
            location.file,
            location.line,
            message,
        );
        if !location.function.is_empty() {
            record = record.with_function(location.function);
        }
        logger.handle(&record)
    }

    /// Falls back to `Fatal` when the facility holds a level with no
    /// runtime counterpart, so an inconsistent state suppresses output.
    fn level_for_unit(&self, unit: &str) -> Severity {
        let logger = self.facility.logger(&self.logger_name(unit));
        from_host(logger.effective_level()).unwrap_or(Severity::Fatal)
    }

    fn set_level_for_unit(&self, unit: &str, level: Severity) {
        self.facility
            .set_level(&self.logger_name(unit), to_host(level));
    }
}
