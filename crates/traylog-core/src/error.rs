//! Error types for traylog

use thiserror::Error;

/// Result type alias for logging operations
pub type LogResult<T> = Result<T, LogError>;

/// Error type for logging operations
#[derive(Error, Debug)]
pub enum LogError {
    /// A severity outside the six recognized levels
    #[error("invalid log level: {0}")]
    InvalidLevel(String),

    /// A sink failed to write, open, or connect
    #[error("sink I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be parsed or is inconsistent
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed input received over the C ABI
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl LogError {
    /// Returns an error code suitable for FFI
    pub fn error_code(&self) -> u32 {
        match self {
            LogError::InvalidLevel(_) => 1,
            LogError::Io(_) => 2,
            LogError::Config(_) => 3,
            LogError::InvalidArgument(_) => 4,
            LogError::Internal(_) => 5,
        }
    }
}

impl From<serde_json::Error> for LogError {
    fn from(err: serde_json::Error) -> Self {
        LogError::Config(err.to_string())
    }
}

impl From<toml::de::Error> for LogError {
    fn from(err: toml::de::Error) -> Self {
        LogError::Config(err.to_string())
    }
}
