//! HTTP client for the evaluation service.

use std::time::Duration;

use async_trait::async_trait;
use meter_core::{
    AssessmentRequestBody, CommonPasswords, ConfigError, ErrorEnvelope, FetchError, FetchResult,
    MeterConfig, MeterError, Password, PasswordAssessment, TipsPayload,
};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::{Host, Url};

use crate::service::AssessmentService;

/// Evaluation endpoint path.
pub const CHECK_PASSWORD_PATH: &str = "/api/check-password";

/// Tips endpoint path.
pub const TIPS_PATH: &str = "/api/password-tips";

/// Common passwords endpoint path.
pub const COMMON_PASSWORDS_PATH: &str = "/api/common-passwords";

/// User agent for service requests.
pub const USER_AGENT_VALUE: &str = concat!("meter-client/", env!("CARGO_PKG_VERSION"));

/// Longest error body echoed into a `FetchError::Status` message.
const MAX_ERROR_BODY: usize = 200;

/// Evaluation service reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpAssessmentService {
    /// HTTP client.
    client: reqwest::Client,

    /// Base URL without trailing slash.
    base_url: String,

    /// Bearer token, if configured.
    api_token: Option<String>,

    /// Timeout reported in `FetchError::Timeout`.
    timeout_secs: u64,
}

impl HttpAssessmentService {
    /// Create a client from configuration.
    ///
    /// Refuses plain `http` to non-loopback hosts unless
    /// `allow_insecure_http` is set.
    pub fn new(config: &MeterConfig) -> Result<Self, MeterError> {
        config.validate()?;
        check_transport(config)?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .default_headers(default_headers)
            .build()
            .map_err(|e| FetchError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.normalized_base_url().to_string(),
            api_token: config.api_token.clone(),
            timeout_secs: config.request_timeout_secs,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a prepared request and decode a successful JSON body.
    async fn exchange<T: DeserializeOwned>(
        &self,
        mut request: reqwest::RequestBuilder,
        url: &str,
    ) -> FetchResult<T> {
        if let Some(token) = &self.api_token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let result = self.exchange_once(request).await;
        if let Err(e) = &result {
            warn!(url = %url, error = %e, "service request failed");
        }
        result
    }

    async fn exchange_once<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> FetchResult<T> {
        let response = request.send().await.map_err(|e| self.map_transport(&e))?;
        let status = response.status();
        let body = response.bytes().await.map_err(|e| self.map_transport(&e))?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }

        decode_body(&body)
    }

    fn map_transport(&self, err: &reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                secs: self.timeout_secs,
            }
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl AssessmentService for HttpAssessmentService {
    async fn fetch_assessment(&self, password: &Password) -> FetchResult<PasswordAssessment> {
        let url = self.url(CHECK_PASSWORD_PATH);
        debug!(url = %url, "requesting assessment");

        let request = self
            .client
            .post(&url)
            .json(&AssessmentRequestBody::new(password));
        self.exchange(request, &url).await
    }

    async fn fetch_tips(&self) -> FetchResult<TipsPayload> {
        let url = self.url(TIPS_PATH);
        debug!(url = %url, "requesting tips");

        self.exchange(self.client.get(&url), &url).await
    }

    async fn fetch_common_passwords(&self) -> FetchResult<CommonPasswords> {
        let url = self.url(COMMON_PASSWORDS_PATH);
        debug!(url = %url, "requesting common passwords");

        self.exchange(self.client.get(&url), &url).await
    }
}

/// Decode a JSON body, separating "not JSON" from "JSON of the wrong shape".
fn decode_body<T: DeserializeOwned>(body: &[u8]) -> FetchResult<T> {
    serde_json::from_slice(body).map_err(|e| match e.classify() {
        serde_json::error::Category::Data => FetchError::Contract(e.to_string()),
        _ => FetchError::Decode(e.to_string()),
    })
}

/// Message for a non-success status: the `{"error": ...}` envelope if present,
/// else a truncated body, else the canonical reason.
fn error_message(status: reqwest::StatusCode, body: &[u8]) -> String {
    if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(body) {
        return envelope.error;
    }
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        return status.canonical_reason().unwrap_or("unknown status").to_string();
    }
    text.chars().take(MAX_ERROR_BODY).collect()
}

fn check_transport(config: &MeterConfig) -> Result<(), MeterError> {
    let url = Url::parse(config.normalized_base_url())
        .map_err(|e| ConfigError::invalid("base_url", e.to_string()))?;

    match url.scheme() {
        "https" => Ok(()),
        "http" if is_loopback(&url) => Ok(()),
        "http" if config.allow_insecure_http => {
            warn!(url = %url, "plain http allowed by configuration");
            Ok(())
        }
        _ => Err(FetchError::InsecureTransport(url.to_string()).into()),
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(ip)) => ip.is_loopback(),
        Some(Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}
