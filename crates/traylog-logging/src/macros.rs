//! Unit-tagged logging macros for Rust code running inside the runtime

use crate::receiver::ReceiverSlot;
use std::fmt;
use traylog_core::{Location, Severity};

/// Deliver a message to the global receiver if `unit` accepts `level`
///
/// Delivery failures are reported on stderr; a log call never fails its
/// caller.
pub fn emit(level: Severity, unit: &str, location: &Location<'_>, message: &str) {
    emit_args(level, unit, location, format_args!("{message}"));
}

/// Like [`emit`], but only formats the message once the threshold passes
pub fn emit_args(level: Severity, unit: &str, location: &Location<'_>, args: fmt::Arguments<'_>) {
    let receiver = ReceiverSlot::global().receiver();
    if !receiver.is_enabled(level, unit) {
        return;
    }
    if let Err(e) = receiver.log(level, unit, location, &fmt::format(args)) {
        eprintln!("traylog: failed to deliver event for {unit}: {e}");
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($level:expr, unit = $unit:expr, $($arg:tt)+) => {
        $crate::emit_args(
            $level,
            $unit,
            &$crate::Location::new(::std::file!(), ::std::line!(), ::std::module_path!()),
            ::std::format_args!($($arg)+),
        )
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::__log!(
            $level,
            unit = &$crate::unit_for_target(::std::module_path!()),
            $($arg)+
        )
    };
}

/// Log at `Trace`; the unit defaults to the calling module path
///
/// ```ignore
/// log_trace!("frame {}", n);
/// log_trace!(unit = "I3Reader", "frame {}", n);
/// ```
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)+) => { $crate::__log!($crate::Severity::Trace, $($arg)+) };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => { $crate::__log!($crate::Severity::Debug, $($arg)+) };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => { $crate::__log!($crate::Severity::Info, $($arg)+) };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)+) => { $crate::__log!($crate::Severity::Warn, $($arg)+) };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => { $crate::__log!($crate::Severity::Error, $($arg)+) };
}

/// Log at `Fatal`, then panic with the same message
#[macro_export]
macro_rules! log_fatal {
    (unit = $unit:expr, $($arg:tt)+) => {{
        let message = ::std::format!($($arg)+);
        $crate::emit(
            $crate::Severity::Fatal,
            $unit,
            &$crate::Location::new(::std::file!(), ::std::line!(), ::std::module_path!()),
            &message,
        );
        ::std::panic!("{}", message)
    }};
    ($($arg:tt)+) => {
        $crate::log_fatal!(
            unit = &$crate::unit_for_target(::std::module_path!()),
            $($arg)+
        )
    };
}
