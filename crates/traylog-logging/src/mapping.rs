//! Severity translation between the external runtime and the facility

use traylog_core::Severity;
use traylog_facility::HostLevel;

/// Map a runtime severity to its facility level
pub fn to_host(level: Severity) -> HostLevel {
    match level {
        Severity::Trace => HostLevel::TRACE,
        Severity::Debug => HostLevel::DEBUG,
        Severity::Info => HostLevel::INFO,
        Severity::Warn => HostLevel::WARNING,
        Severity::Error => HostLevel::ERROR,
        Severity::Fatal => HostLevel::CRITICAL,
    }
}

/// Map a facility level back, if it is one of the six named levels
pub fn from_host(level: HostLevel) -> Option<Severity> {
    match level {
        HostLevel::TRACE => Some(Severity::Trace),
        HostLevel::DEBUG => Some(Severity::Debug),
        HostLevel::INFO => Some(Severity::Info),
        HostLevel::WARNING => Some(Severity::Warn),
        HostLevel::ERROR => Some(Severity::Error),
        HostLevel::CRITICAL => Some(Severity::Fatal),
        _ => None,
    }
}

#[cfg(test)]
#[path = "mapping/mapping_tests.rs"]
mod mapping_tests;
