//! Error types for the meter
//!
//! Provides error handling for:
//! - Fetch failures (transport, status, decode, contract)
//! - Contract violations found while rendering
//! - Configuration loading

use serde::Serialize;
use std::path::PathBuf;

/// Main meter error type
#[derive(Debug, thiserror::Error)]
pub enum MeterError {
    /// Exchange with the evaluation service failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Failure of one request/response exchange
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Connection, TLS or IO failure
    #[error("transport failure: {0}")]
    Transport(String),

    /// No response within the configured timeout
    #[error("request timed out after {secs}s")]
    Timeout { secs: u64 },

    /// Non-success HTTP status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Body is not JSON
    #[error("undecodable response: {0}")]
    Decode(String),

    /// Body is JSON but does not match the agreed shape
    #[error("contract violation: {0}")]
    Contract(String),

    /// Base URL does not use a secure transport
    #[error("insecure transport refused: {0}")]
    InsecureTransport(String),
}

impl FetchError {
    /// Short text shown to the user in place of an assessment
    #[must_use]
    pub fn notice(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => "The strength checker did not answer in time.",
            Self::Contract(_) | Self::Decode(_) => {
                "The strength checker returned an unreadable result."
            }
            _ => "Unable to check this password right now.",
        }
    }
}

/// Assessment values outside the service contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ContractViolation {
    /// Score outside 0-100
    #[error("score {0} outside 0..=100")]
    ScoreOutOfRange(i64),

    /// Level outside 1-5
    #[error("strength level {0} outside 1..=5")]
    UnknownStrengthLevel(i64),
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML for the config shape
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Value rejected by validation
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    /// Create validation error
    #[inline]
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Result alias for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;
