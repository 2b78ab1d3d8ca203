//! # traylog
//!
//! Routes the unit-tagged log output of an external runtime into a
//! hierarchical logging facility, with per-unit thresholds and a single
//! console, rotating-file or syslog sink.
//!
//! ## Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! traylog = "0.6"
//! ```
//!
//! ## Routing runtime logging
//!
//! ```ignore
//! use traylog::prelude::*;
//!
//! // Everything to a 10 MB rotating file with three backups
//! Setup::global().rotating_files("tray.log", 10 * 1024 * 1024, 3)?;
//!
//! // `icecube.I3Reader` and everything below it at DEBUG
//! ReceiverSlot::global().receiver().set_level_for_unit("I3Reader", Severity::Debug);
//!
//! // Rust code logs into the same units
//! init_logging();
//! tracing::info!(frames = 12, "stream opened");
//! log_warn!(unit = "I3Reader", "short frame {}", 7);
//! ```
//!
//! ## From configuration
//!
//! ```ignore
//! let config = LoggingConfig::from_toml_str(r#"
//!     level = "warn"
//!     [units]
//!     I3Tray = "debug"
//!     [sink]
//!     kind = "syslog"
//! "#)?;
//! Setup::global().apply(&config)?;
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`traylog_core`] - Severities, the receiver trait, errors and configuration
//! - [`traylog_facility`] - Named loggers, thresholds, handlers and sinks
//! - [`traylog_logging`] - The bridge, receiver slot, setup variants and tracing layer
//! - [`traylog_ffi`] - C ABI entry points for the external runtime

// Re-export core types
pub use traylog_core::{
    DEFAULT_NAMESPACE, Location, LogError, LogResult, LoggingConfig, Severity, SinkConfig,
    UnitLevels, UnitLogger,
};

// Re-export the facility
pub use traylog_facility::{
    ConsoleSink, Facility, Handler, HostLevel, Layout, LogRecord, Logger, MemorySink,
    RotatingFileSink, SyslogSink, SyslogTarget,
};

// Re-export the bridge
pub use traylog_logging::{
    LogBridge, NullLogger, PrintfLogger, ReceiverRegistration, ReceiverSlot, Setup,
    UnitLoggingLayer, from_host, init_logging, to_host, unit_for_target,
};

// Re-export macros
pub use traylog_logging::{log_debug, log_error, log_fatal, log_info, log_trace, log_warn};

pub use tracing;

/// C ABI functions the external runtime links against.
///
/// Add `pub use traylog::ffi_exports::*;` to a `cdylib` crate to expose them
/// from the shared library.
pub mod ffi_exports {
    pub use traylog_ffi::{
        traylog_level_for_unit, traylog_log, traylog_set_level, traylog_set_level_for_unit,
        traylog_setup_console, traylog_setup_rotating_files, traylog_setup_syslog,
    };
}

/// Prelude module for convenient imports.
///
/// Use `use traylog::prelude::*;` to import commonly used types.
///
/// This includes:
/// - Core types: `Severity`, `Location`, `UnitLogger`, `LoggingConfig`
/// - Setup: `Setup`, `ReceiverSlot`, `Facility`
/// - Rust-side logging: `init_logging`, `log_trace!` .. `log_fatal!`
pub mod prelude {
    pub use crate::{
        Facility, Location, LogError, LogResult, LoggingConfig, ReceiverSlot, Setup, Severity,
        SinkConfig, UnitLogger, init_logging,
    };

    pub use crate::{log_debug, log_error, log_fatal, log_info, log_trace, log_warn};
}
