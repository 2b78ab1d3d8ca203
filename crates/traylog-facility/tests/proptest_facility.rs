//! Property-based tests for level resolution
//!
//! Tests that explicit levels are read back exactly and that descendants
//! without their own level inherit from the nearest configured ancestor.

use proptest::prelude::*;
use traylog_facility::{Facility, HostLevel, LogRecord, MemorySink};

// Strategy: dotted logger names with 1 to 4 segments
fn arb_logger_name() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z][a-zA-Z0-9_]{0,7}", 1..5).prop_map(|parts| parts.join("."))
}

fn arb_level() -> impl Strategy<Value = HostLevel> {
    (1u8..=u8::MAX).prop_map(HostLevel::new)
}

proptest! {
    /// Property: an explicit level is returned as the effective level
    #[test]
    fn proptest_set_level_roundtrip(name in arb_logger_name(), level in arb_level()) {
        let facility = Facility::new();

        facility.set_level(&name, level);

        prop_assert_eq!(facility.effective_level(&name), level);
    }

    /// Property: descendants inherit the level of their configured ancestor
    #[test]
    fn proptest_descendant_inherits(
        name in arb_logger_name(),
        suffix in arb_logger_name(),
        level in arb_level()
    ) {
        let facility = Facility::new();
        facility.set_level(&name, level);

        let child = format!("{}.{}", name, suffix);

        prop_assert_eq!(facility.effective_level(&child), level);
    }

    /// Property: a record is dispatched iff its level reaches the threshold
    #[test]
    fn proptest_dispatch_matches_threshold(
        name in arb_logger_name(),
        threshold in arb_level(),
        level in arb_level()
    ) {
        let facility = Facility::new();
        let sink = MemorySink::new();
        facility.add_handler(Box::new(sink.clone()));
        facility.set_level(&name, threshold);

        facility
            .handle(&LogRecord::new(name.clone(), level, "p.rs", 1, "m"))
            .expect("memory sink never fails");

        prop_assert_eq!(sink.len(), usize::from(level >= threshold));
    }
}
