//! reqwest-backed GitHub transport
//!
//! Resolves request URIs against the API root, negotiates the body
//! variant through the Accept header, applies credentials, and decodes
//! responses. Error statuses become [`Error::HttpStatus`]; nothing is
//! retried.

use super::rate_limit::{RateLimiter, RateLimiterConfig};
use super::response::{GitHubResponse, RateLimitInfo};
use super::transport::Transport;
use crate::auth::Credentials;
use crate::error::{Error, Result};
use crate::request::Request;
use crate::types::{ACCEPT_JSON, DEFAULT_API_URL};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the GitHub client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root all relative URIs are resolved against
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Client-side rate limiter configuration
    pub rate_limit: Option<RateLimiterConfig>,
    /// Default headers for all requests
    pub default_headers: BTreeMap<String, String>,
    /// User agent string
    pub user_agent: String,
    /// Credentials applied to every request
    pub credentials: Credentials,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(30),
            rate_limit: None,
            default_headers: BTreeMap::new(),
            user_agent: format!("github-service/{}", env!("CARGO_PKG_VERSION")),
            credentials: Credentials::None,
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the API root
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set rate limiter
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Disable rate limiting
    pub fn no_rate_limit(mut self) -> Self {
        self.config.rate_limit = None;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set credentials
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.config.credentials = credentials;
        self
    }

    /// Authenticate with a token
    pub fn token(self, token: impl Into<String>) -> Self {
        self.credentials(Credentials::token(token))
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// GitHub API client
pub struct GitHubClient {
    client: Client,
    config: ClientConfig,
    rate_limiter: Option<RateLimiter>,
    last_rate_limit: Mutex<Option<RateLimitInfo>>,
}

impl GitHubClient {
    /// Create a client for the public API with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Ok(Self {
            client,
            config,
            rate_limiter,
            last_rate_limit: Mutex::new(None),
        })
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Check if rate limiting is enabled
    pub fn has_rate_limiter(&self) -> bool {
        self.rate_limiter.is_some()
    }

    /// Quota reported by the most recent response
    pub fn last_rate_limit(&self) -> Option<RateLimitInfo> {
        self.last_rate_limit.lock().ok().and_then(|guard| *guard)
    }

    /// Requests left in the current quota window, if known
    pub fn remaining_requests(&self) -> Option<u32> {
        self.last_rate_limit().map(|info| info.remaining)
    }

    /// Send a request with the given method
    pub async fn send(&self, method: Method, request: &Request) -> Result<GitHubResponse> {
        let url = self.build_url(&request.generate_uri()?);

        if let Some(ref limiter) = self.rate_limiter {
            limiter.wait().await;
        }

        let mut req = self.client.request(method.clone(), &url);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }
        for (key, value) in &request.headers {
            req = req.header(key.as_str(), value.as_str());
        }
        req = req.header(ACCEPT, request.accept.as_deref().unwrap_or(ACCEPT_JSON));

        if let Some(ref body) = request.body {
            req = req.json(body);
        }

        req = self.config.credentials.apply(req);

        debug!("{} {}", method, url);
        let response = req.send().await?;

        let status = response.status();
        let headers = response.headers().clone();
        if let Some(info) = RateLimitInfo::from_headers(&headers) {
            if let Some(ref limiter) = self.rate_limiter {
                limiter.observe(&info);
            }
            if let Ok(mut last) = self.last_rate_limit.lock() {
                *last = Some(info);
            }
        }

        let is_json = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("json"));
        let text = response.text().await?;

        if !status.is_success() {
            let message = error_message(&text).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .map_or_else(|| text.clone(), str::to_string)
            });
            warn!("{} {} failed with {}: {}", method, url, status.as_u16(), message);
            return Err(Error::http_status(status.as_u16(), message));
        }

        let body = if text.trim().is_empty() {
            Value::Null
        } else if is_json {
            serde_json::from_str(&text)?
        } else {
            // raw media types return the file content itself
            Value::String(text)
        };

        Ok(GitHubResponse::from_parts(&headers, body))
    }

    /// Build full URL from a request URI
    fn build_url(&self, uri: &str) -> String {
        if uri.starts_with("http://") || uri.starts_with("https://") {
            return uri.to_string();
        }

        let base = self.config.base_url.trim_end_matches('/');
        let path = uri.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[async_trait]
impl Transport for GitHubClient {
    async fn get(&self, request: &Request) -> Result<GitHubResponse> {
        self.send(Method::GET, request).await
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("config", &self.config)
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

/// Extract the `message` field GitHub includes in error bodies
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("message")?.as_str().map(str::to_string)
}
