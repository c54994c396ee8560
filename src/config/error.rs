//! Error taxonomy for configuration loading and persistence.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::codec::Format;

/// Errors surfaced by the configuration subsystem.
///
/// Callers decide what a failure means (fall back, keep stale config, exit).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file does not exist.
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The process may not read the config file.
    #[error("permission denied reading {}", path.display())]
    PermissionDenied { path: PathBuf },

    /// Any other I/O failure while reading.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file suffix does not map to a known codec.
    #[error("unsupported config format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// Bytes are not valid for the declared format.
    #[error("malformed {format} content: {message}")]
    Decode { format: Format, message: String },

    /// Content parsed but does not match the settings schema.
    #[error("{format} content does not match schema: {message}")]
    Schema { format: Format, message: String },

    /// The instance could not be represented in the target format.
    /// Returned by the in-memory codec calls; saving to disk reports the
    /// same failure as [`ConfigError::Write`].
    #[error("failed to encode config as {format}: {message}")]
    Encode { format: Format, message: String },

    /// Failure while saving: directory creation, file write, or encoding.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Operation invoked without a config instance.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ConfigError {
    /// Map an I/O error from reading `path` onto the taxonomy.
    pub(crate) fn from_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => ConfigError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => ConfigError::PermissionDenied { path },
            _ => ConfigError::Read { path, source },
        }
    }

    /// True when the config file was simply absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::NotFound { .. })
    }
}

/// Result alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
