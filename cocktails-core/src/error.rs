//! src/error.rs
//! ============================================================================
//! # `AppError`: Unified Error Type for the Cocktail Browser
//!
//! Every fallible library operation returns `Result<T, AppError>`. Most of
//! these errors never reach the user: page fetch failures and favorites
//! storage failures are logged and absorbed by their owning component.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Unified error type for catalog, storage, and configuration operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transport-level HTTP failure (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("Catalog request for page {page} failed with status {status}")]
    Status { page: u32, status: u16 },

    /// Response body or persisted data could not be decoded.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// Config file I/O error with path.
    #[error("Failed to access config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Favorites storage read/write failure.
    #[error("Favorites storage error on {path:?}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Terminal setup or teardown failure.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Any other error, with description.
    #[error("Unexpected error: {0}")]
    Other(String),
}

impl AppError {
    /// Create a storage failure error
    pub fn storage<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }

    /// Create a config I/O failure error
    pub fn config_io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }

    /// Short label used by the status bar.
    pub fn short_label(&self) -> String {
        match self {
            Self::Http(e) if e.is_timeout() => "request timed out".to_string(),
            Self::Http(_) => "network error".to_string(),
            Self::Status { status, .. } => format!("server returned {status}"),
            Self::Serde(_) => "malformed response".to_string(),
            other => other.to_string(),
        }
    }
}
