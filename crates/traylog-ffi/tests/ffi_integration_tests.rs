//! FFI Integration Tests
//!
//! These tests drive the complete path the external runtime takes:
//! C ABI call, global receiver, bridge, facility and sink.

#![allow(non_snake_case)]

use parking_lot::Mutex;
use std::ffi::{CString, c_char};
use std::ptr;
use test_case::test_case;
use traylog_facility::{Facility, HostLevel, MemorySink};
use traylog_ffi::prelude::*;

// Serializes tests that touch the global receiver and facility
static GLOBAL_STATE_LOCK: Mutex<()> = Mutex::new(());

fn install_memory_sink() -> MemorySink {
    let sink = MemorySink::new();
    Setup::global()
        .install(Box::new(sink.clone()))
        .expect("install memory sink");
    assert_eq!(traylog_set_level(2), 0);
    sink
}

fn log(level: u8, unit: &std::ffi::CStr, message: &str) -> u32 {
    unsafe {
        traylog_log(
            level,
            unit.as_ptr(),
            c"/build/icetray/private/I3Tray.cxx".as_ptr(),
            5,
            c"I3Tray::Execute".as_ptr(),
            message.as_ptr(),
            message.len(),
        )
    }
}

#[test]
fn traylog_log___bridge_installed___formats_line_in_sink() {
    let _guard = GLOBAL_STATE_LOCK.lock();
    let sink = install_memory_sink();

    assert_eq!(log(2, c"IntegrationFormat", "hello"), 0);

    assert_eq!(sink.lines(), vec!["I3Tray.cxx:5 INFO: hello".to_string()]);
}

#[test]
fn traylog_log___each_level___maps_to_host_level_name() {
    let _guard = GLOBAL_STATE_LOCK.lock();
    let sink = install_memory_sink();
    unsafe {
        assert_eq!(traylog_set_level_for_unit(c"IntegrationNames".as_ptr(), 0), 0);
    }

    for level in 0..=5 {
        assert_eq!(log(level, c"IntegrationNames", "x"), 0);
    }

    assert_eq!(
        sink.lines(),
        vec![
            "I3Tray.cxx:5 TRACE: x".to_string(),
            "I3Tray.cxx:5 DEBUG: x".to_string(),
            "I3Tray.cxx:5 INFO: x".to_string(),
            "I3Tray.cxx:5 WARNING: x".to_string(),
            "I3Tray.cxx:5 ERROR: x".to_string(),
            "I3Tray.cxx:5 CRITICAL: x".to_string(),
        ]
    );
}

#[test]
fn traylog_set_level_for_unit___child_units_inherit() {
    let _guard = GLOBAL_STATE_LOCK.lock();
    let sink = install_memory_sink();
    unsafe {
        assert_eq!(traylog_set_level_for_unit(c"IntegrationParent".as_ptr(), 1), 0);
    }

    assert_eq!(log(1, c"IntegrationParent.child", "inherited"), 0);
    assert_eq!(log(1, c"IntegrationOther", "suppressed"), 0);

    assert_eq!(sink.lines(), vec!["I3Tray.cxx:5 DEBUG: inherited".to_string()]);
    unsafe {
        assert_eq!(traylog_level_for_unit(c"IntegrationParent.child".as_ptr()), 1);
    }
}

#[test]
fn traylog_set_level_for_unit___stored_on_namespaced_logger() {
    let _guard = GLOBAL_STATE_LOCK.lock();
    install_memory_sink();

    unsafe {
        assert_eq!(traylog_set_level_for_unit(c"IntegrationStored".as_ptr(), 4), 0);
    }

    assert_eq!(
        Facility::global().level("icecube.IntegrationStored"),
        Some(HostLevel::ERROR)
    );
}

#[test]
fn traylog_set_level___root_threshold___applies_to_units_without_own_level() {
    let _guard = GLOBAL_STATE_LOCK.lock();
    let sink = install_memory_sink();

    assert_eq!(traylog_set_level(4), 0);
    assert_eq!(log(3, c"IntegrationRoot", "hidden"), 0);
    assert_eq!(log(4, c"IntegrationRoot", "shown"), 0);

    assert_eq!(sink.lines(), vec!["I3Tray.cxx:5 ERROR: shown".to_string()]);
    assert_eq!(traylog_set_level(2), 0);
}

#[test_case(6)]
#[test_case(7)]
#[test_case(100)]
#[test_case(255)]
fn traylog_set_level_for_unit___invalid_code___returns_1_and_keeps_level(code: u8) {
    let _guard = GLOBAL_STATE_LOCK.lock();
    install_memory_sink();
    unsafe {
        assert_eq!(traylog_set_level_for_unit(c"IntegrationInvalid".as_ptr(), 3), 0);

        assert_eq!(traylog_set_level_for_unit(c"IntegrationInvalid".as_ptr(), code), 1);

        assert_eq!(traylog_level_for_unit(c"IntegrationInvalid".as_ptr()), 3);
    }
}

#[test]
fn traylog_log___invalid_utf8_message___replaced_not_rejected() {
    let _guard = GLOBAL_STATE_LOCK.lock();
    let sink = install_memory_sink();
    let message = b"bad \xff byte";

    let code = unsafe {
        traylog_log(
            3,
            c"IntegrationLossy".as_ptr(),
            c"I3Tray.cxx".as_ptr(),
            5,
            ptr::null(),
            message.as_ptr(),
            message.len(),
        )
    };

    assert_eq!(code, 0);
    assert_eq!(
        sink.lines(),
        vec!["I3Tray.cxx:5 WARNING: bad \u{fffd} byte".to_string()]
    );
}

#[test]
fn traylog_log___null_file___uses_placeholder_location() {
    let _guard = GLOBAL_STATE_LOCK.lock();
    let sink = install_memory_sink();
    let message = "somewhere";

    let code = unsafe {
        traylog_log(
            4,
            ptr::null(),
            ptr::null(),
            0,
            ptr::null(),
            message.as_ptr(),
            message.len(),
        )
    };

    assert_eq!(code, 0);
    assert_eq!(
        sink.lines(),
        vec!["(unknown file):0 ERROR: somewhere".to_string()]
    );
}

#[test]
fn traylog_setup___second_variant___replaces_first_sink() {
    let _guard = GLOBAL_STATE_LOCK.lock();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = CString::new(dir.path().join("tray.log").to_string_lossy().into_owned())
        .expect("path without NUL");

    assert_eq!(traylog_setup_console(), 0);
    let path_ptr: *const c_char = path.as_ptr();
    assert_eq!(unsafe { traylog_setup_rotating_files(path_ptr, 1024, 2) }, 0);

    assert_eq!(
        Facility::global().handler_names(),
        vec!["rotating_file".to_string()]
    );
}

#[test]
fn traylog_setup_rotating_files___rolls_over_at_max_bytes() {
    let _guard = GLOBAL_STATE_LOCK.lock();
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("tray.log");
    let path = CString::new(file.to_string_lossy().into_owned()).expect("path without NUL");

    assert_eq!(unsafe { traylog_setup_rotating_files(path.as_ptr(), 200, 1) }, 0);
    assert_eq!(traylog_set_level(2), 0);
    for i in 0..20 {
        assert_eq!(log(2, c"IntegrationRotate", &format!("record {i}")), 0);
    }

    let backup = dir.path().join("tray.log.1");
    assert!(backup.exists());
    assert!(!dir.path().join("tray.log.2").exists());
    assert!(std::fs::metadata(&file).expect("metadata").len() < 200);
}
