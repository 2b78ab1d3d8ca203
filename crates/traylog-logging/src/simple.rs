//! Self-contained loggers that do not go through the facility

use parking_lot::Mutex;
use std::io::{IsTerminal, Write};
use traylog_core::{Location, LogResult, Severity, UnitLevels, UnitLogger};

const BOLD: &str = "\x1b[1m";
const BOLD_RED: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";

/// Prints `LEVEL (unit): message (file:line in function)` lines
///
/// This is the receiver used before any bridge is installed. Thresholds are
/// kept per unit with no inheritance; the default is `Info`.
pub struct PrintfLogger {
    levels: UnitLevels,
    writer: Mutex<Box<dyn Write + Send>>,
    colored: bool,
}

impl PrintfLogger {
    /// Logger on stdout, highlighted when stdout is a terminal
    pub fn stdout() -> Self {
        let colored = std::io::stdout().is_terminal();
        Self::with_writer(std::io::stdout(), colored)
    }

    /// Logger on any writer; `colored` enables ANSI highlighting
    pub fn with_writer(writer: impl Write + Send + 'static, colored: bool) -> Self {
        Self {
            levels: UnitLevels::default(),
            writer: Mutex::new(Box::new(writer)),
            colored,
        }
    }

    /// Render one line without the trailing newline
    pub fn format(
        &self,
        level: Severity,
        unit: &str,
        location: &Location<'_>,
        message: &str,
    ) -> String {
        let (prolog, file_prolog, epilog) = match (self.colored, level) {
            (false, _) => ("", "", ""),
            (true, Severity::Error | Severity::Fatal) => (BOLD_RED, BOLD, RESET),
            (true, _) => (BOLD, BOLD, RESET),
        };
        format!(
            "{prolog}{level} ({unit}):{epilog} {message} ({file_prolog}{file}:{line}{epilog} in {file_prolog}{function}{epilog})",
            level = level.name(),
            file = location.file,
            line = location.line,
            function = location.function,
        )
    }
}

impl UnitLogger for PrintfLogger {
    fn log(
        &self,
        level: Severity,
        unit: &str,
        location: &Location<'_>,
        message: &str,
    ) -> LogResult<()> {
        if level < self.levels.get(unit) {
            return Ok(());
        }
        let mut line = self.format(level, unit, location, message);
        line.push('\n');
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn level_for_unit(&self, unit: &str) -> Severity {
        self.levels.get(unit)
    }

    fn set_level_for_unit(&self, unit: &str, level: Severity) {
        self.levels.set(unit, level);
    }
}

/// Discards every event while still tracking thresholds
#[derive(Default)]
pub struct NullLogger {
    levels: UnitLevels,
}

impl NullLogger {
    /// Create a logger that discards everything
    pub fn new() -> Self {
        Self::default()
    }
}

impl UnitLogger for NullLogger {
    fn log(
        &self,
        _level: Severity,
        _unit: &str,
        _location: &Location<'_>,
        _message: &str,
    ) -> LogResult<()> {
        Ok(())
    }

    fn level_for_unit(&self, unit: &str) -> Severity {
        self.levels.get(unit)
    }

    fn set_level_for_unit(&self, unit: &str, level: Severity) {
        self.levels.set(unit, level);
    }
}
