#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// Severity tests

#[test]
fn Severity___ordering___is_trace_to_fatal() {
    for pair in Severity::ALL.windows(2) {
        assert!(pair[0] < pair[1], "{} should be below {}", pair[0], pair[1]);
    }
}

#[test_case(0, Severity::Trace)]
#[test_case(1, Severity::Debug)]
#[test_case(2, Severity::Info)]
#[test_case(3, Severity::Warn)]
#[test_case(4, Severity::Error)]
#[test_case(5, Severity::Fatal)]
fn Severity___from_u8___maps_code(code: u8, expected: Severity) {
    assert_eq!(Severity::from_u8(code).unwrap(), expected);
    assert_eq!(expected as u8, code);
}

#[test_case(6)]
#[test_case(42)]
#[test_case(255)]
fn Severity___from_u8___out_of_range_is_invalid_level(code: u8) {
    let result = Severity::try_from(code);

    assert!(matches!(result, Err(LogError::InvalidLevel(_))));
}

#[test]
fn Severity___try_from___accepts_valid_code() {
    let severity: Result<Severity, LogError> = 4u8.try_into();

    assert_eq!(severity.unwrap(), Severity::Error);
}

#[test]
fn DEFAULT_NAMESPACE___is_icecube() {
    assert_eq!(DEFAULT_NAMESPACE, "icecube");
}

#[test_case("trace", Severity::Trace)]
#[test_case("DEBUG", Severity::Debug)]
#[test_case(" Info ", Severity::Info)]
#[test_case("warning", Severity::Warn)]
#[test_case("Error", Severity::Error)]
#[test_case("critical", Severity::Fatal)]
fn Severity___from_str___accepts_names(text: &str, expected: Severity) {
    assert_eq!(text.parse::<Severity>().unwrap(), expected);
}

#[test]
fn Severity___from_str___unknown_name_is_invalid_level() {
    let result = "verbose".parse::<Severity>();

    assert!(matches!(result, Err(LogError::InvalidLevel(v)) if v == "verbose"));
}

#[test]
fn Severity___display___uses_upper_case_name() {
    assert_eq!(Severity::Warn.to_string(), "WARN");
    assert_eq!(Severity::Fatal.to_string(), "FATAL");
}

// Location tests

#[test]
fn Location___unknown___has_line_zero() {
    let location = Location::unknown();

    assert_eq!(location.line, 0);
}

#[test]
fn Location___new___keeps_fields() {
    let location = Location::new("I3Tray.cxx", 120, "Execute");

    assert_eq!(location.file, "I3Tray.cxx");
    assert_eq!(location.line, 120);
    assert_eq!(location.function, "Execute");
}
