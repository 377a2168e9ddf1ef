//! Default reqwest-backed request executor
//!
//! A thin client: base-URL joining, default headers, JSON body parsing, and
//! error-status mapping. No retries, no rate limiting, no authentication —
//! those belong to the surrounding system, and failures here propagate to
//! the caller unchanged.

use super::executor::{RequestExecutor, RequestOptions};
use crate::error::{Error, Result};
use crate::types::{JsonValue, Method, StringMap};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Configuration for [`ApiClient`]
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL all request paths are joined onto
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: StringMap,
    /// User agent string
    pub user_agent: String,
}

impl ApiClientConfig {
    /// Create a config with defaults for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
            default_headers: StringMap::new(),
            user_agent: format!("nimbus-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Create a new config builder
    pub fn builder(base_url: impl Into<String>) -> ApiClientConfigBuilder {
        ApiClientConfigBuilder {
            config: Self::new(base_url),
        }
    }
}

/// Builder for [`ApiClientConfig`]
pub struct ApiClientConfigBuilder {
    config: ApiClientConfig,
}

impl ApiClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ApiClientConfig {
        self.config
    }
}

/// Reqwest-backed [`RequestExecutor`]
pub struct ApiClient {
    client: Client,
    config: ApiClientConfig,
}

impl ApiClient {
    /// Create a client for the given base URL with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(ApiClientConfig::new(base_url))
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ApiClientConfig) -> Result<Self> {
        Url::parse(&config.base_url)?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(Error::Http)?;

        Ok(Self { client, config })
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    async fn execute(
        &self,
        method: reqwest::Method,
        path: &str,
        wire_params: Option<&StringMap>,
        options: &RequestOptions,
    ) -> Result<JsonValue> {
        let url = self.build_url(path);
        let mut req = self.client.request(method.clone(), &url);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }
        for (key, value) in &options.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if !options.query.is_empty() {
            req = req.query(&options.query);
        }
        if let Some(params) = wire_params {
            if !params.is_empty() {
                req = req.query(params);
            }
        }

        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        debug!(%method, url, "request succeeded");
        let body = response.json().await?;
        Ok(body)
    }

    /// Build full URL from path
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[async_trait]
impl RequestExecutor for ApiClient {
    async fn get(&self, path: &str, options: &RequestOptions) -> Result<JsonValue> {
        self.execute(reqwest::Method::GET, path, None, options).await
    }

    async fn request_with_paging(
        &self,
        method: Method,
        path: &str,
        wire_params: &StringMap,
        options: &RequestOptions,
    ) -> Result<JsonValue> {
        self.execute(method.into(), path, Some(wire_params), options)
            .await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
