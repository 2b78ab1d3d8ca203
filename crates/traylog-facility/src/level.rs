//! Numeric facility levels

use std::borrow::Cow;

/// A facility log level
///
/// Any value is representable; only the named constants have names and a
/// counterpart on the external runtime's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HostLevel(u8);

impl HostLevel {
    /// Unset; the logger inherits its threshold from its ancestors
    pub const NOTSET: HostLevel = HostLevel(0);
    pub const TRACE: HostLevel = HostLevel(5);
    pub const DEBUG: HostLevel = HostLevel(10);
    pub const INFO: HostLevel = HostLevel(20);
    pub const WARNING: HostLevel = HostLevel(30);
    pub const ERROR: HostLevel = HostLevel(40);
    pub const CRITICAL: HostLevel = HostLevel(50);

    /// Level with an arbitrary numeric value
    pub const fn new(value: u8) -> Self {
        HostLevel(value)
    }

    /// Numeric value of the level
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Level name as shown in formatted output
    pub fn name(self) -> Cow<'static, str> {
        match self {
            HostLevel::NOTSET => Cow::Borrowed("NOTSET"),
            HostLevel::TRACE => Cow::Borrowed("TRACE"),
            HostLevel::DEBUG => Cow::Borrowed("DEBUG"),
            HostLevel::INFO => Cow::Borrowed("INFO"),
            HostLevel::WARNING => Cow::Borrowed("WARNING"),
            HostLevel::ERROR => Cow::Borrowed("ERROR"),
            HostLevel::CRITICAL => Cow::Borrowed("CRITICAL"),
            HostLevel(other) => Cow::Owned(format!("Level {}", other)),
        }
    }
}

impl From<u8> for HostLevel {
    fn from(value: u8) -> Self {
        HostLevel(value)
    }
}

impl std::fmt::Display for HostLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
#[path = "level/level_tests.rs"]
mod level_tests;
