//! The logging facility: named-logger thresholds and handler dispatch

use crate::{Handler, HostLevel, LogRecord};
use dashmap::DashMap;
use once_cell::sync::OnceCell;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use traylog_core::LogResult;

/// Name of the root logger
pub const ROOT_LOGGER: &str = "";

/// Global facility instance
static GLOBAL_FACILITY: OnceCell<Arc<Facility>> = OnceCell::new();

/// Process-wide logging state
///
/// Logger thresholds live in a concurrent map that is populated lazily as
/// loggers are looked up. The handler list sits behind a single dispatch
/// lock: record dispatch and handler-list mutation both take it, so a
/// record is never written to a half-replaced handler list.
pub struct Facility {
    levels: DashMap<String, HostLevel>,
    root_level: AtomicU8,
    handlers: Mutex<Vec<Box<dyn Handler>>>,
}

impl Facility {
    /// Create a facility whose root threshold is `INFO`
    pub fn new() -> Self {
        Self::with_default_level(HostLevel::INFO)
    }

    /// Create a facility whose root threshold is `level`
    pub fn with_default_level(level: HostLevel) -> Self {
        Self {
            levels: DashMap::new(),
            root_level: AtomicU8::new(level.value()),
            handlers: Mutex::new(Vec::new()),
        }
    }

    /// Get the global facility instance
    pub fn global() -> Arc<Facility> {
        GLOBAL_FACILITY
            .get_or_init(|| Arc::new(Facility::new()))
            .clone()
    }

    /// Look up a logger, registering its name on first use
    pub fn logger(&self, name: &str) -> Logger<'_> {
        if name != ROOT_LOGGER && !self.levels.contains_key(name) {
            self.levels
                .entry(name.to_string())
                .or_insert(HostLevel::NOTSET);
        }
        Logger {
            facility: self,
            name: name.to_string(),
        }
    }

    /// Names of every logger registered so far, sorted
    pub fn logger_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.levels.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// Set the explicit level of a logger; `NOTSET` makes it inherit again
    pub fn set_level(&self, name: &str, level: HostLevel) {
        if name == ROOT_LOGGER {
            self.root_level.store(level.value(), Ordering::SeqCst);
        } else {
            self.levels.insert(name.to_string(), level);
        }
    }

    /// Explicit level of a logger, if one was set
    pub fn level(&self, name: &str) -> Option<HostLevel> {
        if name == ROOT_LOGGER {
            return Some(self.root_level());
        }
        self.levels
            .get(name)
            .map(|level| *level)
            .filter(|level| *level != HostLevel::NOTSET)
    }

    /// Threshold of the root logger
    pub fn root_level(&self) -> HostLevel {
        HostLevel::new(self.root_level.load(Ordering::SeqCst))
    }

    /// Threshold in force for a logger
    ///
    /// Walks `a.b.c`, `a.b`, `a` for the first explicit level and falls back
    /// to the root level.
    pub fn effective_level(&self, name: &str) -> HostLevel {
        let mut current = name;
        while !current.is_empty() {
            if let Some(level) = self.level(current) {
                return level;
            }
            current = match current.rfind('.') {
                Some(idx) => &current[..idx],
                None => ROOT_LOGGER,
            };
        }
        self.root_level()
    }

    /// Check if a record at `level` from logger `name` would be dispatched
    pub fn is_enabled_for(&self, name: &str, level: HostLevel) -> bool {
        level >= self.effective_level(name)
    }

    /// Dispatch a record to every handler
    ///
    /// Records below their logger's effective threshold are dropped. Every
    /// handler is attempted; the first handler error is returned.
    pub fn handle(&self, record: &LogRecord) -> LogResult<()> {
        if !self.is_enabled_for(record.logger(), record.level()) {
            return Ok(());
        }

        let mut handlers = self.handlers.lock();
        let mut first_error = None;
        for handler in handlers.iter_mut() {
            if let Err(err) = handler.emit(record) {
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Append a handler
    pub fn add_handler(&self, handler: Box<dyn Handler>) {
        self.handlers.lock().push(handler);
    }

    /// Remove every handler, returning how many were removed
    pub fn clear_handlers(&self) -> usize {
        let mut handlers = self.handlers.lock();
        let removed = handlers.len();
        handlers.clear();
        removed
    }

    /// Number of installed handlers
    pub fn handler_count(&self) -> usize {
        self.handlers.lock().len()
    }

    /// Names of the installed handlers, in dispatch order
    pub fn handler_names(&self) -> Vec<String> {
        self.handlers
            .lock()
            .iter()
            .map(|h| h.name().to_string())
            .collect()
    }

    /// Flush every handler, returning the first error
    pub fn flush(&self) -> LogResult<()> {
        let mut handlers = self.handlers.lock();
        let mut first_error = None;
        for handler in handlers.iter_mut() {
            if let Err(err) = handler.flush() {
                first_error.get_or_insert(err);
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Take the dispatch lock for a multi-step handler-list change
    ///
    /// No record is dispatched while the returned guard is alive.
    pub fn lock_handlers(&self) -> HandlerList<'_> {
        HandlerList {
            guard: self.handlers.lock(),
        }
    }
}

impl Default for Facility {
    fn default() -> Self {
        Self::new()
    }
}

/// A named logger of a [`Facility`]
pub struct Logger<'a> {
    facility: &'a Facility,
    name: String,
}

impl Logger<'_> {
    /// Full dotted name of this logger
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Explicit threshold, if one is set
    pub fn level(&self) -> Option<HostLevel> {
        self.facility.level(&self.name)
    }

    /// Set the explicit threshold; `NOTSET` clears it
    pub fn set_level(&self, level: HostLevel) {
        self.facility.set_level(&self.name, level);
    }

    /// Threshold after walking the ancestors
    pub fn effective_level(&self) -> HostLevel {
        self.facility.effective_level(&self.name)
    }

    /// Whether a record at `level` would be dispatched
    pub fn is_enabled_for(&self, level: HostLevel) -> bool {
        self.facility.is_enabled_for(&self.name, level)
    }

    /// Dispatch a record through the owning facility
    pub fn handle(&self, record: &LogRecord) -> LogResult<()> {
        self.facility.handle(record)
    }
}

/// Handler list held under the dispatch lock
pub struct HandlerList<'a> {
    guard: MutexGuard<'a, Vec<Box<dyn Handler>>>,
}

impl HandlerList<'_> {
    /// Remove every handler
    pub fn clear(&mut self) {
        self.guard.clear();
    }

    /// Append a handler
    pub fn push(&mut self, handler: Box<dyn Handler>) {
        self.guard.push(handler);
    }

    /// Replace the whole list with a single handler
    pub fn replace_with(&mut self, handler: Box<dyn Handler>) {
        self.guard.clear();
        self.guard.push(handler);
    }

    /// Number of handlers in the list
    pub fn len(&self) -> usize {
        self.guard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard.is_empty()
    }

    /// Names of the handlers, in dispatch order
    pub fn names(&self) -> Vec<String> {
        self.guard.iter().map(|h| h.name().to_string()).collect()
    }
}
