#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case(Severity::Trace, HostLevel::TRACE)]
#[test_case(Severity::Debug, HostLevel::DEBUG)]
#[test_case(Severity::Info, HostLevel::INFO)]
#[test_case(Severity::Warn, HostLevel::WARNING)]
#[test_case(Severity::Error, HostLevel::ERROR)]
#[test_case(Severity::Fatal, HostLevel::CRITICAL)]
fn to_host___maps_each_severity(severity: Severity, expected: HostLevel) {
    assert_eq!(to_host(severity), expected);
}

#[test]
fn to_host___from_host___roundtrip_for_every_severity() {
    for severity in Severity::ALL {
        assert_eq!(from_host(to_host(severity)), Some(severity));
    }
}

#[test]
fn to_host___preserves_order() {
    for pair in Severity::ALL.windows(2) {
        assert!(to_host(pair[0]) < to_host(pair[1]));
    }
}

#[test_case(HostLevel::NOTSET)]
#[test_case(HostLevel::new(25))]
#[test_case(HostLevel::new(255))]
fn from_host___unnamed_level_has_no_severity(level: HostLevel) {
    assert_eq!(from_host(level), None);
}
