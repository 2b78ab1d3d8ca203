//! C ABI exported functions
//!
//! These functions are the entry points the external runtime calls. Every
//! entry point returns `0` on success and [`LogError::error_code`] otherwise.

use crate::panic_guard::catch_panic;
use std::borrow::Cow;
use std::ffi::{CStr, c_char};
use std::panic::AssertUnwindSafe;
use traylog_core::{Location, LogError, LogResult, Severity};
use traylog_logging::{ReceiverSlot, Setup};

/// Returned by [`traylog_level_for_unit`] when the unit name is unusable
pub const INVALID_LEVEL: u8 = u8::MAX;

/// Deliver one log event to the active receiver
///
/// # Parameters
/// - `level`: Severity code (0=Trace, 1=Debug, 2=Info, 3=Warn, 4=Error, 5=Fatal)
/// - `unit`: Unit name (null-terminated, null for the root unit)
/// - `file`, `line`, `func`: Call site; null strings become placeholders
/// - `message`: Message bytes, not null-terminated
/// - `message_len`: Length of `message`
///
/// # Safety
/// - `unit`, `file` and `func` must each be null or a valid C string
/// - `message` must be valid for `message_len` bytes if not null
#[unsafe(no_mangle)]
pub unsafe extern "C" fn traylog_log(
    level: u8,
    unit: *const c_char,
    file: *const c_char,
    line: u32,
    func: *const c_char,
    message: *const u8,
    message_len: usize,
) -> u32 {
    status(catch_panic(AssertUnwindSafe(|| unsafe {
        log_impl(level, unit, file, line, func, message, message_len)
    })))
}

unsafe fn log_impl(
    level: u8,
    unit: *const c_char,
    file: *const c_char,
    line: u32,
    func: *const c_char,
    message: *const u8,
    message_len: usize,
) -> LogResult<()> {
    let level = Severity::from_u8(level)?;
    let unit = unsafe { str_arg(unit, "unit") }?.unwrap_or_default();

    let receiver = ReceiverSlot::global().receiver();
    if !receiver.is_enabled(level, unit) {
        return Ok(());
    }

    let unknown = Location::unknown();
    let location = Location::new(
        unsafe { str_arg(file, "file") }?.unwrap_or(unknown.file),
        line,
        unsafe { str_arg(func, "func") }?.unwrap_or(unknown.function),
    );

    let message = if message.is_null() || message_len == 0 {
        Cow::Borrowed("")
    } else {
        // SAFETY: caller guarantees message is valid for message_len bytes
        let bytes = unsafe { std::slice::from_raw_parts(message, message_len) };
        String::from_utf8_lossy(bytes)
    };

    receiver.log(level, unit, &location, &message)
}

/// Effective threshold of a unit
///
/// # Returns
/// Severity code, or [`INVALID_LEVEL`] (255) if `unit` is not valid UTF-8
///
/// # Safety
/// - `unit` must be null or a valid C string
#[unsafe(no_mangle)]
pub unsafe extern "C" fn traylog_level_for_unit(unit: *const c_char) -> u8 {
    let level = catch_panic(AssertUnwindSafe(|| {
        let unit = unsafe { str_arg(unit, "unit") }?.unwrap_or_default();
        Ok(ReceiverSlot::global().receiver().level_for_unit(unit))
    }));
    match level {
        Ok(level) => level as u8,
        Err(_) => INVALID_LEVEL,
    }
}

/// Set the threshold of a unit
///
/// An invalid level code leaves the current threshold untouched.
///
/// # Safety
/// - `unit` must be null or a valid C string
#[unsafe(no_mangle)]
pub unsafe extern "C" fn traylog_set_level_for_unit(unit: *const c_char, level: u8) -> u32 {
    status(catch_panic(AssertUnwindSafe(|| {
        let level = Severity::from_u8(level)?;
        let unit = unsafe { str_arg(unit, "unit") }?.unwrap_or_default();
        ReceiverSlot::global()
            .receiver()
            .set_level_for_unit(unit, level);
        Ok(())
    })))
}

/// Set the root threshold
#[unsafe(no_mangle)]
pub extern "C" fn traylog_set_level(level: u8) -> u32 {
    status(catch_panic(|| {
        let level = Severity::from_u8(level)?;
        ReceiverSlot::global().receiver().set_level(level);
        Ok(())
    }))
}

/// Route all logging to stderr
#[unsafe(no_mangle)]
pub extern "C" fn traylog_setup_console() -> u32 {
    status(catch_panic(|| Setup::global().console().map(drop)))
}

/// Route all logging to a rotating file
///
/// # Parameters
/// - `path`: File path (null-terminated, must not be null)
/// - `max_bytes`: Size that triggers rollover, `0` for never
/// - `backup_count`: Number of backups kept, `0` for never
///
/// # Safety
/// - `path` must be null or a valid C string
#[unsafe(no_mangle)]
pub unsafe extern "C" fn traylog_setup_rotating_files(
    path: *const c_char,
    max_bytes: u64,
    backup_count: u32,
) -> u32 {
    status(catch_panic(AssertUnwindSafe(|| {
        let path = unsafe { str_arg(path, "path") }?
            .filter(|p| !p.is_empty())
            .ok_or_else(|| LogError::InvalidArgument("path is null or empty".to_string()))?;
        Setup::global()
            .rotating_files(path, max_bytes, backup_count)
            .map(drop)
    })))
}

/// Route all logging to syslog on `localhost:514`
#[unsafe(no_mangle)]
pub extern "C" fn traylog_setup_syslog() -> u32 {
    status(catch_panic(|| Setup::global().syslog().map(drop)))
}

fn status(result: LogResult<()>) -> u32 {
    match result {
        Ok(()) => 0,
        Err(e) => e.error_code(),
    }
}

/// Borrow a C string argument, `None` when null
///
/// # Safety
/// `ptr` must be null or a valid null-terminated C string that outlives `'a`
unsafe fn str_arg<'a>(ptr: *const c_char, name: &str) -> LogResult<Option<&'a str>> {
    if ptr.is_null() {
        return Ok(None);
    }
    // SAFETY: caller guarantees ptr is a valid null-terminated C string
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map(Some)
        .map_err(|_| LogError::InvalidArgument(format!("{name} is not valid UTF-8")))
}
