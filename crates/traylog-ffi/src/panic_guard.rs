//! Panic handling for FFI boundaries
//!
//! A panic must never unwind into the external runtime, so every exported
//! function runs its body through [`catch_panic`].

use std::any::Any;
use std::panic;
use traylog_core::{LogError, LogResult};

/// Run `f`, turning a panic into [`LogError::Internal`]
///
/// The panic is reported on stderr rather than through `tracing`, since the
/// panicking code may be the very receiver `tracing` would deliver to.
///
/// # Example
///
/// ```ignore
/// #[unsafe(no_mangle)]
/// pub extern "C" fn traylog_set_level(level: u8) -> u32 {
///     status(catch_panic(|| set_level_impl(level)))
/// }
/// ```
pub fn catch_panic<F, R>(f: F) -> LogResult<R>
where
    F: FnOnce() -> LogResult<R> + panic::UnwindSafe,
{
    panic::catch_unwind(f).unwrap_or_else(|payload| {
        let message = panic_to_string(payload.as_ref());
        eprintln!("traylog: FFI panic caught: {}", message);
        Err(LogError::Internal(message))
    })
}

/// Convert a panic payload to a human-readable string
fn panic_to_string(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panicked: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panicked: {}", s)
    } else {
        "panicked with unknown payload".to_string()
    }
}
