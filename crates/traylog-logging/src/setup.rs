//! Sink setup: install the bridge and replace the facility's handlers

use crate::bridge::LogBridge;
use crate::receiver::{ReceiverRegistration, ReceiverSlot};
use std::path::Path;
use std::sync::Arc;
use traylog_core::{DEFAULT_NAMESPACE, LogResult, LoggingConfig, SinkConfig, UnitLogger};
use traylog_facility::{ConsoleSink, Facility, Handler, RotatingFileSink, SyslogSink, SyslogTarget};

/// Entry points that route runtime logging to exactly one sink
///
/// Every variant builds its sink first, so a sink that fails to open leaves
/// the current configuration untouched. It then installs a [`LogBridge`] as
/// the receiver and, holding the facility's dispatch lock, clears the
/// handler list and installs the new sink. Calling a second variant
/// discards the first one's sink.
pub struct Setup<'a> {
    facility: Arc<Facility>,
    slot: &'a ReceiverSlot,
    namespace: String,
}

impl Setup<'static> {
    /// Setup against the global facility and receiver slot
    pub fn global() -> Self {
        Self::new(Facility::global(), ReceiverSlot::global())
    }
}

impl<'a> Setup<'a> {
    /// Create a setup over the given facility and receiver slot
    pub fn new(facility: Arc<Facility>, slot: &'a ReceiverSlot) -> Self {
        Self {
            facility,
            slot,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }

    /// Nest unit loggers under a different namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// The facility sinks are installed into
    pub fn facility(&self) -> &Arc<Facility> {
        &self.facility
    }

    /// Plain lines on stderr
    pub fn console(&self) -> LogResult<ReceiverRegistration<'a>> {
        self.install(Box::new(ConsoleSink::stderr()))
    }

    /// Timestamped lines in a size-capped rotating file
    pub fn rotating_files(
        &self,
        path: impl AsRef<Path>,
        max_bytes: u64,
        backup_count: u32,
    ) -> LogResult<ReceiverRegistration<'a>> {
        let sink = RotatingFileSink::open(path, max_bytes, backup_count)?;
        self.install(Box::new(sink))
    }

    /// Timestamped datagrams to syslog on `localhost:514`
    pub fn syslog(&self) -> LogResult<ReceiverRegistration<'a>> {
        self.syslog_to(&SyslogTarget::default())
    }

    /// Timestamped datagrams to the given syslog target
    pub fn syslog_to(&self, target: &SyslogTarget) -> LogResult<ReceiverRegistration<'a>> {
        let sink = SyslogSink::connect(target)?;
        self.install(Box::new(sink))
    }

    /// Install an arbitrary sink
    pub fn install(&self, sink: Box<dyn Handler>) -> LogResult<ReceiverRegistration<'a>> {
        let (registration, _) = self.install_with_namespace(&self.namespace, sink);
        Ok(registration)
    }

    /// Install the configured sink, then apply the configured thresholds
    pub fn apply(&self, config: &LoggingConfig) -> LogResult<ReceiverRegistration<'a>> {
        config.validate()?;
        let sink: Box<dyn Handler> = match &config.sink {
            SinkConfig::Console => Box::new(ConsoleSink::stderr()),
            SinkConfig::RotatingFile {
                path,
                max_bytes,
                backup_count,
            } => Box::new(RotatingFileSink::open(path, *max_bytes, *backup_count)?),
            SinkConfig::Syslog { address, socket } => {
                Box::new(SyslogSink::connect(&syslog_target(address, socket))?)
            }
        };

        let (registration, bridge) = self.install_with_namespace(&config.namespace, sink);
        bridge.set_level(config.level);
        for (unit, level) in &config.units {
            bridge.set_level_for_unit(unit, *level);
        }
        Ok(registration)
    }

    fn install_with_namespace(
        &self,
        namespace: &str,
        sink: Box<dyn Handler>,
    ) -> (ReceiverRegistration<'a>, Arc<LogBridge>) {
        let bridge = Arc::new(LogBridge::with_namespace(self.facility.clone(), namespace));
        let registration = self.slot.install(bridge.clone());

        let sink_name = sink.name().to_string();
        let replaced = {
            let mut handlers = self.facility.lock_handlers();
            let replaced = handlers.len();
            handlers.replace_with(sink);
            replaced
        };
        tracing::debug!(sink = %sink_name, replaced, namespace, "installed log sink");

        (registration, bridge)
    }
}

#[cfg(unix)]
fn syslog_target(address: &Option<String>, socket: &Option<std::path::PathBuf>) -> SyslogTarget {
    match (address, socket) {
        (_, Some(path)) => SyslogTarget::Unix(path.clone()),
        (Some(address), None) => SyslogTarget::Udp(address.clone()),
        (None, None) => SyslogTarget::default(),
    }
}

#[cfg(not(unix))]
fn syslog_target(address: &Option<String>, _socket: &Option<std::path::PathBuf>) -> SyslogTarget {
    match address {
        Some(address) => SyslogTarget::Udp(address.clone()),
        None => SyslogTarget::default(),
    }
}
