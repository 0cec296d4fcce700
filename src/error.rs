//! Error types for the option-chain-alerts library.
//!
//! The alert pipeline itself never fails: degenerate numeric input produces zeroed
//! Greeks and an empty chain produces no alerts. The variants here cover the
//! surfaces around it, namely configuration loading and snapshot retrieval.

use thiserror::Error;

/// Errors raised outside the pure alert computation.
#[derive(Error, Debug)]
pub enum Error {
    /// A configuration value violates its documented range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration file could not be read.
    #[error("failed to read config file '{path}': {source}")]
    ConfigRead {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// The configuration document is not valid JSON for [`crate::config::TradingConfig`].
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A snapshot source could not deliver a chain for the symbol.
    #[error("snapshot unavailable for {symbol}: {message}")]
    SnapshotUnavailable {
        /// The requested symbol.
        symbol: String,
        /// Reason reported by the source.
        message: String,
    },

    /// The requested data does not exist.
    #[error("no data available: {0}")]
    NoDataAvailable(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an [`Error::InvalidConfig`].
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Creates an [`Error::SnapshotUnavailable`].
    pub fn snapshot_unavailable(symbol: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::SnapshotUnavailable {
            symbol: symbol.into(),
            message: msg.into(),
        }
    }

    /// Creates an [`Error::NoDataAvailable`].
    pub fn no_data(msg: impl Into<String>) -> Self {
        Self::NoDataAvailable(msg.into())
    }
}
