//! Logging configuration types

use crate::{DEFAULT_NAMESPACE, LogError, LogResult, Severity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Logging configuration applied at setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Logger namespace that unit names are nested under
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Root threshold
    #[serde(default = "default_level")]
    pub level: Severity,

    /// Per-unit thresholds, applied after the root threshold
    #[serde(default)]
    pub units: BTreeMap<String, Severity>,

    /// The single sink to install
    #[serde(default)]
    pub sink: SinkConfig,
}

/// Sink selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SinkConfig {
    /// Plain lines on stderr
    #[default]
    Console,

    /// Size-capped rotating file
    RotatingFile {
        path: PathBuf,
        /// Rollover threshold in bytes; 0 disables rollover
        #[serde(default)]
        max_bytes: u64,
        /// Number of backups kept; 0 disables rollover
        #[serde(default)]
        backup_count: u32,
    },

    /// Syslog over UDP or a Unix datagram socket
    Syslog {
        /// `host:port` for UDP; defaults to `localhost:514`
        #[serde(default)]
        address: Option<String>,
        /// Unix datagram socket path such as `/dev/log`
        #[serde(default)]
        socket: Option<PathBuf>,
    },
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_level() -> Severity {
    Severity::Info
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            level: default_level(),
            units: BTreeMap::new(),
            sink: SinkConfig::default(),
        }
    }
}

impl LoggingConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> LogResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_slice(bytes)?;
        config.validate()?;
        Ok(config)
    }

    /// Create configuration from a TOML document
    pub fn from_toml_str(source: &str) -> LogResult<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants serde cannot express
    pub fn validate(&self) -> LogResult<()> {
        match &self.sink {
            SinkConfig::RotatingFile { path, .. } if path.as_os_str().is_empty() => Err(
                LogError::Config("rotating_file sink requires a non-empty path".to_string()),
            ),
            SinkConfig::Syslog {
                address: Some(_),
                socket: Some(_),
            } => Err(LogError::Config(
                "syslog sink takes either an address or a socket, not both".to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// Set the threshold of one unit
    pub fn with_unit(mut self, unit: impl Into<String>, level: Severity) -> Self {
        self.units.insert(unit.into(), level);
        self
    }
}
