//! traylog-facility - Process-wide logging facility
//!
//! This crate provides:
//! - [`Facility`] holding named-logger thresholds and the handler list
//! - [`HostLevel`], the facility's numeric levels
//! - [`LogRecord`], an immutable log event
//! - [`Handler`] and the built-in sinks: [`ConsoleSink`], [`RotatingFileSink`],
//!   [`SyslogSink`], [`MemorySink`]
//! - [`Layout`] for the plain-text line format
//!
//! Logger names form a hierarchy by dots: a logger without its own level
//! inherits from `a.b`, then `a`, then the root.

mod console;
mod facility;
mod handler;
mod layout;
mod level;
mod memory;
mod record;
mod rotating;
mod syslog;

pub use console::ConsoleSink;
pub use facility::{Facility, HandlerList, Logger, ROOT_LOGGER};
pub use handler::Handler;
pub use layout::Layout;
pub use level::HostLevel;
pub use memory::MemorySink;
pub use record::LogRecord;
pub use rotating::RotatingFileSink;
pub use syslog::{SyslogSink, SyslogTarget};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ConsoleSink, Facility, Handler, HostLevel, Layout, LogRecord, Logger, MemorySink,
        RotatingFileSink, SyslogSink, SyslogTarget,
    };
}
