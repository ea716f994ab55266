//! Client configuration
//!
//! Layered: defaults, then an optional TOML file, then `METER_*` environment
//! variables. The binary applies command-line flags last.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Default evaluation service location
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Default qualifier appended to the "not breached" banner
pub const DEFAULT_BREACH_QUALIFIER: &str = "as of last check";

/// Meter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeterConfig {
    /// Base URL of the evaluation service
    pub base_url: String,
    /// Bearer token sent with every request
    pub api_token: Option<String>,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Permit plain `http` to non-loopback hosts
    pub allow_insecure_http: bool,
    /// Freshness qualifier shown on the "not breached" banner
    pub breach_qualifier: String,
}

impl MeterConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a TOML file; missing keys keep their defaults
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded meter config");
        Ok(config)
    }

    /// Overlay `METER_*` variables resolved through `lookup`
    ///
    /// Unparseable numeric or boolean values are ignored with a warning.
    #[must_use]
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("METER_BASE_URL") {
            self.base_url = url;
        }
        if let Some(token) = lookup("METER_API_TOKEN") {
            self.api_token = Some(token).filter(|t| !t.is_empty());
        }
        if let Some(raw) = lookup("METER_TIMEOUT_SECS") {
            match raw.parse() {
                Ok(secs) => self.request_timeout_secs = secs,
                Err(_) => tracing::warn!(value = %raw, "ignoring METER_TIMEOUT_SECS"),
            }
        }
        if let Some(raw) = lookup("METER_ALLOW_INSECURE_HTTP") {
            match parse_flag(&raw) {
                Some(flag) => self.allow_insecure_http = flag,
                None => tracing::warn!(value = %raw, "ignoring METER_ALLOW_INSECURE_HTTP"),
            }
        }
        if let Some(qualifier) = lookup("METER_BREACH_QUALIFIER") {
            self.breach_qualifier = qualifier;
        }
        self
    }

    /// With base URL
    #[inline]
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// With bearer token
    #[inline]
    #[must_use]
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// With request timeout
    #[inline]
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// With insecure http permission
    #[inline]
    #[must_use]
    pub fn with_insecure_http(mut self, allow: bool) -> Self {
        self.allow_insecure_http = allow;
        self
    }

    /// With breach freshness qualifier
    #[inline]
    #[must_use]
    pub fn with_breach_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.breach_qualifier = qualifier.into();
        self
    }

    /// Base URL without trailing slash
    #[must_use]
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Check values before use
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.normalized_base_url().is_empty() {
            return Err(ConfigError::invalid("base_url", "must not be empty"));
        }
        let url = Url::parse(self.normalized_base_url())
            .map_err(|e| ConfigError::invalid("base_url", e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::invalid(
                "base_url",
                format!("unsupported scheme {:?}", url.scheme()),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::invalid("request_timeout_secs", "must be positive"));
        }
        Ok(())
    }
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: None,
            request_timeout_secs: 10,
            allow_insecure_http: false,
            breach_qualifier: DEFAULT_BREACH_QUALIFIER.to_string(),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
