//! traylog-ffi - C ABI exports for the external runtime
//!
//! This crate provides the FFI boundary layer the runtime logs through.
//!
//! # FFI Functions
//!
//! The following functions are exported with C linkage:
//!
//! - `traylog_log` - Deliver one event to the active receiver
//! - `traylog_level_for_unit` - Effective threshold of a unit
//! - `traylog_set_level_for_unit` - Set the threshold of a unit
//! - `traylog_set_level` - Set the root threshold
//! - `traylog_setup_console` - Route everything to stderr
//! - `traylog_setup_rotating_files` - Route everything to a rotating file
//! - `traylog_setup_syslog` - Route everything to syslog
//!
//! Status-returning functions answer `0` on success and the error code of
//! [`LogError`] otherwise; severity codes are those of [`Severity`].

mod exports;
mod panic_guard;

pub use exports::{
    INVALID_LEVEL, traylog_level_for_unit, traylog_log, traylog_set_level,
    traylog_set_level_for_unit, traylog_setup_console, traylog_setup_rotating_files,
    traylog_setup_syslog,
};
pub use panic_guard::catch_panic;

pub use traylog_core::{LogError, LogResult, Severity};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        INVALID_LEVEL, traylog_level_for_unit, traylog_log, traylog_set_level,
        traylog_set_level_for_unit, traylog_setup_console, traylog_setup_rotating_files,
        traylog_setup_syslog,
    };
    pub use traylog_core::prelude::*;
    pub use traylog_logging::prelude::*;
}
