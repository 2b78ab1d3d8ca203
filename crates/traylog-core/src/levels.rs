//! Flat per-unit severity thresholds

use crate::Severity;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Per-unit thresholds with a fallback default
///
/// Units are opaque keys here; there is no dotted-name inheritance. Loggers
/// that need hierarchy go through the host facility instead. The empty unit
/// is the root and always reads and writes the default.
pub struct UnitLevels {
    levels: RwLock<HashMap<String, Severity>>,
    default_level: RwLock<Severity>,
}

impl UnitLevels {
    /// Create an empty registry with the given default
    pub fn new(default_level: Severity) -> Self {
        Self {
            levels: RwLock::new(HashMap::new()),
            default_level: RwLock::new(default_level),
        }
    }

    /// Threshold for `unit`, or the default when the unit has no entry
    pub fn get(&self, unit: &str) -> Severity {
        self.levels
            .read()
            .get(unit)
            .copied()
            .unwrap_or_else(|| *self.default_level.read())
    }

    /// Set the threshold of one unit
    pub fn set(&self, unit: &str, level: Severity) {
        if unit.is_empty() {
            self.set_default(level);
        } else {
            self.levels.write().insert(unit.to_string(), level);
        }
    }

    /// Threshold for units without an explicit one
    pub fn default_level(&self) -> Severity {
        *self.default_level.read()
    }

    /// Change the default threshold
    pub fn set_default(&self, level: Severity) {
        *self.default_level.write() = level;
    }

    /// Number of units with an explicit threshold
    pub fn len(&self) -> usize {
        self.levels.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.read().is_empty()
    }
}

impl Default for UnitLevels {
    fn default() -> Self {
        Self::new(Severity::Info)
    }
}
