//! traylog-core - Core types shared by every traylog crate
//!
//! This crate provides:
//! - [`Severity`], the external runtime's six-level log severity
//! - [`Location`] for call-site information attached to a log event
//! - [`UnitLogger`], the receiver contract the external runtime logs through
//! - [`UnitLevels`] for self-contained per-unit thresholds
//! - [`LogError`] for error handling
//! - [`LoggingConfig`] for logging configuration

mod config;
mod error;
mod levels;
mod logger;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub use config::{LoggingConfig, SinkConfig};
pub use error::{LogError, LogResult};
pub use levels::UnitLevels;
pub use logger::UnitLogger;

/// Logger namespace under which unit loggers are created
pub const DEFAULT_NAMESPACE: &str = "icecube";

/// Log severities of the external runtime
///
/// The discriminants are the codes used across the C ABI.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Trace = 0,
    Debug = 1,
    Info = 2,
    #[serde(alias = "warning")]
    Warn = 3,
    Error = 4,
    #[serde(alias = "critical")]
    Fatal = 5,
}

impl Severity {
    /// All severities in ascending order
    pub const ALL: [Severity; 6] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Convert a C ABI level code, rejecting anything outside the six levels
    pub fn from_u8(value: u8) -> LogResult<Self> {
        match value {
            0 => Ok(Severity::Trace),
            1 => Ok(Severity::Debug),
            2 => Ok(Severity::Info),
            3 => Ok(Severity::Warn),
            4 => Ok(Severity::Error),
            5 => Ok(Severity::Fatal),
            other => Err(LogError::InvalidLevel(other.to_string())),
        }
    }

    /// Upper-case name used in plain-text output
    pub fn name(self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = LogError;

    fn try_from(value: u8) -> Result<Self, LogError> {
        Severity::from_u8(value)
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Severity::Trace),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            "fatal" | "critical" => Ok(Severity::Fatal),
            _ => Err(LogError::InvalidLevel(s.to_string())),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Source location of a log call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'a> {
    pub file: &'a str,
    pub line: u32,
    pub function: &'a str,
}

impl<'a> Location<'a> {
    /// Create a source location
    pub const fn new(file: &'a str, line: u32, function: &'a str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// Location used when the caller supplied none
    pub const fn unknown() -> Location<'static> {
        Location {
            file: "(unknown file)",
            line: 0,
            function: "(unknown function)",
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Location, LogError, LogResult, LoggingConfig, Severity, SinkConfig, UnitLevels,
        UnitLogger,
    };
}

#[cfg(test)]
mod lib_tests;
