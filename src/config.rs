//! Rosette Client Configuration

use secrecy::{ExposeSecret, SecretString};

use crate::defaults;
use crate::error::RosetteError;
use crate::retry::RetryPolicy;
use crate::types::HttpConfig;

/// Connection-level settings fixed when a client is built.
#[derive(Debug, Clone)]
pub struct RosetteConfig {
    /// API key sent as `X-RosetteAPI-Key`
    pub api_key: SecretString,
    /// Service root, always ending in `/`
    pub base_url: String,
    /// HTTP configuration (timeouts, proxy, user agent)
    pub http_config: HttpConfig,
    /// Rate-limit retry behavior
    pub retry_policy: RetryPolicy,
    /// Send `X-RosetteAPI-Devel: true`
    pub debug: bool,
    /// Check binding compatibility before the first analysis call
    pub check_version: bool,
}

impl Default for RosetteConfig {
    fn default() -> Self {
        Self {
            api_key: SecretString::from(String::new()),
            base_url: defaults::service::BASE_URL.to_string(),
            http_config: HttpConfig::default(),
            retry_policy: RetryPolicy::default(),
            debug: false,
            check_version: false,
        }
    }
}

impl RosetteConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = normalize_base_url(base_url);
        self
    }

    pub fn validate(&self) -> Result<(), RosetteError> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(RosetteError::ConfigurationError(
                "API key cannot be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(RosetteError::ConfigurationError(format!(
                "Base URL must start with http:// or https://: {}",
                self.base_url
            )));
        }

        Ok(())
    }
}

/// Append the trailing `/` endpoint paths are joined onto.
pub fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}
