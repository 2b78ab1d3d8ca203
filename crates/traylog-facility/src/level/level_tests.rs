#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case(HostLevel::TRACE, "TRACE")]
#[test_case(HostLevel::DEBUG, "DEBUG")]
#[test_case(HostLevel::INFO, "INFO")]
#[test_case(HostLevel::WARNING, "WARNING")]
#[test_case(HostLevel::ERROR, "ERROR")]
#[test_case(HostLevel::CRITICAL, "CRITICAL")]
fn HostLevel___name___named_levels(level: HostLevel, expected: &str) {
    assert_eq!(level.name(), expected);
}

#[test]
fn HostLevel___name___unnamed_level_uses_number() {
    assert_eq!(HostLevel::new(25).to_string(), "Level 25");
}

#[test]
fn HostLevel___ordering___follows_numeric_value() {
    assert!(HostLevel::NOTSET < HostLevel::TRACE);
    assert!(HostLevel::TRACE < HostLevel::DEBUG);
    assert!(HostLevel::WARNING < HostLevel::new(35));
    assert!(HostLevel::new(35) < HostLevel::ERROR);
}

#[test]
fn HostLevel___from_u8___keeps_value() {
    let level = HostLevel::from(40);

    assert_eq!(level, HostLevel::ERROR);
    assert_eq!(level.value(), 40);
}
