//! traylog-logging - Bridge from unit-tagged runtime logging into the facility
//!
//! This crate provides:
//! - [`LogBridge`], the receiver that re-emits runtime events as facility records
//! - [`ReceiverSlot`] holding the single active receiver, with revocable
//!   [`ReceiverRegistration`]s
//! - [`Setup`] variants that route everything to one console, rotating-file
//!   or syslog sink
//! - [`PrintfLogger`] and [`NullLogger`] for use without a facility
//! - [`UnitLoggingLayer`] so Rust `tracing` events reach the same receiver
//! - `log_trace!` .. `log_fatal!` macros

mod bridge;
mod layer;
mod macros;
mod mapping;
mod receiver;
mod setup;
mod simple;

pub use bridge::LogBridge;
pub use layer::{UnitLoggingLayer, init_logging, unit_for_target};
pub use macros::{emit, emit_args};
pub use mapping::{from_host, to_host};
pub use receiver::{ReceiverRegistration, ReceiverSlot};
pub use setup::Setup;
pub use simple::{NullLogger, PrintfLogger};
pub use traylog_core::{Location, Severity, UnitLogger};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        LogBridge, Location, NullLogger, PrintfLogger, ReceiverRegistration, ReceiverSlot,
        Setup, Severity, UnitLogger, UnitLoggingLayer, init_logging,
    };
    pub use crate::{log_debug, log_error, log_fatal, log_info, log_trace, log_warn};
}
