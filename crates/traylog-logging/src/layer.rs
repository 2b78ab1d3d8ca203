//! Tracing layer that forwards Rust-side events to the installed receiver

use crate::receiver::ReceiverSlot;
use std::fmt::Write as _;
use tracing::field::{Field, Visit};
use tracing::subscriber::Interest;
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use traylog_core::{Location, Severity};

/// Tracing layer that delivers events to the active receiver
///
/// The target `a::b` becomes unit `a.b`, so Rust modules share the unit
/// hierarchy with the external runtime's units.
pub struct UnitLoggingLayer {
    slot: &'static ReceiverSlot,
}

impl UnitLoggingLayer {
    /// Create a layer using the global receiver slot
    pub fn new() -> Self {
        Self {
            slot: ReceiverSlot::global(),
        }
    }

    /// Create a layer with a specific receiver slot
    pub fn with_slot(slot: &'static ReceiverSlot) -> Self {
        Self { slot }
    }

    fn convert_level(level: &Level) -> Severity {
        match *level {
            Level::TRACE => Severity::Trace,
            Level::DEBUG => Severity::Debug,
            Level::INFO => Severity::Info,
            Level::WARN => Severity::Warn,
            Level::ERROR => Severity::Error,
        }
    }
}

impl Default for UnitLoggingLayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Unit name for a tracing target or module path
pub fn unit_for_target(target: &str) -> String {
    target.replace("::", ".")
}

impl<S> Layer<S> for UnitLoggingLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    // Thresholds change at runtime, so callsite interest must not be cached.
    fn register_callsite(&self, _metadata: &'static Metadata<'static>) -> Interest {
        Interest::sometimes()
    }

    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        let level = Self::convert_level(metadata.level());
        self.slot
            .receiver()
            .is_enabled(level, &unit_for_target(metadata.target()))
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Self::convert_level(metadata.level());
        let unit = unit_for_target(metadata.target());

        let receiver = self.slot.receiver();
        if !receiver.is_enabled(level, &unit) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let location = Location::new(
            metadata.file().unwrap_or_default(),
            metadata.line().unwrap_or_default(),
            metadata.module_path().unwrap_or_default(),
        );
        if let Err(e) = receiver.log(level, &unit, &location, &visitor.finish()) {
            eprintln!("traylog: failed to deliver event for {unit}: {e}");
        }
    }
}

/// Collects the message and any structured fields of an event
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }

    fn push_field(&mut self, field: &Field, value: std::fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={}", field.name(), value);
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.push_field(field, format_args!("{:?}", value));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.push_field(field, format_args!("{}", value));
        }
    }
}

/// Install [`UnitLoggingLayer`] as the global tracing subscriber
///
/// Does nothing if a global subscriber is already set.
pub fn init_logging() {
    use tracing_subscriber::prelude::*;

    let subscriber = tracing_subscriber::registry().with(UnitLoggingLayer::new());
    let _ = tracing::subscriber::set_global_default(subscriber);
}
