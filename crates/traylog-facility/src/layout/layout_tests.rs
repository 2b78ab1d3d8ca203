#![allow(non_snake_case)]

use super::*;
use crate::HostLevel;
use chrono::{Local, TimeZone};

fn record() -> LogRecord {
    let created = Local
        .with_ymd_and_hms(2012, 3, 14, 15, 9, 26)
        .single()
        .unwrap();
    LogRecord::new(
        "icecube.I3Tray",
        HostLevel::WARNING,
        "/src/private/icetray/I3Tray.cxx",
        412,
        "no frames left",
    )
    .with_created(created)
}

#[test]
fn Layout___plain___renders_file_line_level_message() {
    let line = Layout::Plain.format(&record());

    assert_eq!(line, "I3Tray.cxx:412 WARNING: no frames left");
}

#[test]
fn Layout___timestamped___prefixes_bracketed_time() {
    let line = Layout::Timestamped.format(&record());

    assert_eq!(
        line,
        "[2012-03-14 15:09:26,000] I3Tray.cxx:412 WARNING: no frames left"
    );
}

#[test]
fn Layout___default___is_plain() {
    assert_eq!(Layout::default(), Layout::Plain);
}

#[test]
fn Layout___unnamed_level___renders_numeric_name() {
    let record = LogRecord::new("x", HostLevel::new(25), "f.rs", 3, "m");

    assert_eq!(Layout::Plain.format(&record), "f.rs:3 Level 25: m");
}
