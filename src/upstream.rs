//! Upstream Module
//!
//! HTTP client for the app store metadata API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::UpstreamError;

/// Request timeout for upstream calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// == Upstream Trait ==
/// Source of raw lookup payloads.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Fetches `endpoint` with the given query parameters.
    async fn fetch(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value, UpstreamError>;
}

// == RapidAPI Client ==
/// Upstream client for the RapidAPI `app-stores` service.
#[derive(Debug, Clone)]
pub struct RapidApiClient {
    api_key: String,
    api_host: String,
    base_url: String,
    client: Client,
}

impl RapidApiClient {
    /// Creates a client that talks to `https://{api_host}`.
    pub fn new(api_key: impl Into<String>, api_host: impl Into<String>) -> Result<Self, UpstreamError> {
        let api_host = api_host.into();
        let base_url = format!("https://{}", api_host);
        Self::with_base_url(api_key, api_host, base_url)
    }

    /// Creates a client from the gateway configuration.
    pub fn from_config(config: &Config) -> Result<Self, UpstreamError> {
        Self::new(config.api_key.clone(), config.api_host.clone())
    }

    /// Creates a client against an explicit base URL.
    ///
    /// The host header still carries `api_host`.
    pub fn with_base_url(
        api_key: impl Into<String>,
        api_host: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        Ok(Self {
            api_key: api_key.into(),
            api_host: api_host.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Upstream for RapidApiClient {
    async fn fetch(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value, UpstreamError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, "Fetching from upstream");

        let response = self
            .client
            .get(&url)
            .query(params)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.api_host)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<Value>().await.ok();
            let message = body
                .as_ref()
                .and_then(|b| b.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| {
                    format!(
                        "Request failed with status code {}",
                        status.as_u16()
                    )
                });

            warn!(endpoint, status = status.as_u16(), "Upstream returned an error");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}
