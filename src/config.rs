//! Configuration loading
//!
//! Settings are read from YAML, optionally overridden from the
//! environment, and turned into a [`ClientConfig`] and
//! [`RequestDefaults`].
//!
//! ```yaml
//! api_url: https://github.example.com/api/v3
//! token: ghp_...
//! timeout_secs: 20
//! rate_limit:
//!   requests_per_second: 5
//!   burst_size: 10
//! accept: full
//! page_size: 50
//! ```

use crate::auth::Credentials;
use crate::error::{Error, Result};
use crate::http::{ClientConfig, RateLimiterConfig};
use crate::service::RequestDefaults;
use crate::types::{AcceptMediaType, DEFAULT_API_URL, PAGE_FIRST, PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

/// Environment variable holding an access token
pub const ENV_TOKEN: &str = "GITHUB_TOKEN";

/// Environment variable holding the API root
pub const ENV_API_URL: &str = "GITHUB_API_URL";

/// Client and request settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// API root
    pub api_url: String,
    /// Access token (takes precedence over username/password)
    pub token: Option<String>,
    /// Basic auth username
    pub username: Option<String>,
    /// Basic auth password
    pub password: Option<String>,
    /// User agent override
    pub user_agent: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Client-side rate limit
    pub rate_limit: Option<RateLimiterConfig>,
    /// Body variant requested by default
    pub accept: Option<AcceptMediaType>,
    /// First page requested by paged requests
    pub start_page: u32,
    /// Elements per page
    pub page_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            username: None,
            password: None,
            user_agent: None,
            timeout_secs: 30,
            rate_limit: None,
            accept: None,
            start_page: PAGE_FIRST,
            page_size: PAGE_SIZE,
        }
    }
}

impl Settings {
    /// Parse settings from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Self = serde_yaml::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Io(io::Error::new(
                e.kind(),
                format!("settings file '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Apply `GITHUB_TOKEN` and `GITHUB_API_URL` when set
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(ENV_TOKEN).ok(),
            std::env::var(ENV_API_URL).ok(),
        )
    }

    /// Apply a token and API root when present and non-empty
    #[must_use]
    pub fn with_overrides(mut self, token: Option<String>, api_url: Option<String>) -> Self {
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.token = Some(token);
        }
        if let Some(api_url) = api_url.filter(|u| !u.is_empty()) {
            self.api_url = api_url;
        }
        self
    }

    /// Check values that cannot be expressed in the types
    pub fn validate(&self) -> Result<()> {
        if self.api_url.is_empty() {
            return Err(Error::config("api_url cannot be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        self.request_defaults().validate()?;
        if self.password.is_some() && self.username.is_none() {
            return Err(Error::config("password is set but username is missing"));
        }
        Ok(())
    }

    /// Credentials described by these settings
    pub fn credentials(&self) -> Credentials {
        match (&self.token, &self.username) {
            (Some(token), _) => Credentials::token(token.clone()),
            (None, Some(username)) => {
                Credentials::basic(username.clone(), self.password.clone().unwrap_or_default())
            }
            (None, None) => Credentials::None,
        }
    }

    /// Client configuration described by these settings
    pub fn client_config(&self) -> ClientConfig {
        let mut builder = ClientConfig::builder()
            .base_url(self.api_url.clone())
            .timeout(Duration::from_secs(self.timeout_secs))
            .credentials(self.credentials());

        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        if let Some(rate_limit) = &self.rate_limit {
            builder = builder.rate_limit(rate_limit.clone());
        }
        builder.build()
    }

    /// Request defaults described by these settings
    pub fn request_defaults(&self) -> RequestDefaults {
        RequestDefaults {
            accept: self.accept,
            start_page: self.start_page,
            page_size: self.page_size,
        }
    }
}
