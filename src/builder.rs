//! `RosetteClient` Builder
//!
//! Builder pattern implementation for creating Rosette clients.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;
use serde_json::Value;

use crate::client::RosetteClient;
use crate::config::{RosetteConfig, normalize_base_url};
use crate::defaults;
use crate::error::RosetteError;
use crate::execution::http::headers::validate_custom_header_name;
use crate::execution::http::transport::{HttpTransport, ReqwestTransport};
use crate::params::Options;
use crate::retry::RetryPolicy;

/// `RosetteClient` builder
#[derive(Clone, Default)]
pub struct RosetteClientBuilder {
    config: RosetteConfig,
    custom_headers: BTreeMap<String, String>,
    options: Options,
    url_parameters: BTreeMap<String, String>,
    http_client: Option<reqwest::Client>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl RosetteClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder seeded from `ROSETTE_API_KEY` and `ROSETTE_API_URL`.
    ///
    /// Unset variables leave the defaults in place; explicit setters called
    /// afterwards take precedence.
    pub fn from_env() -> Self {
        let mut builder = Self::new();
        if let Ok(api_key) = std::env::var(defaults::service::API_KEY_ENV) {
            builder = builder.api_key(api_key);
        }
        if let Ok(url) = std::env::var(defaults::service::API_URL_ENV)
            && !url.trim().is_empty()
        {
            builder = builder.base_url(url);
        }
        builder
    }

    /// Set the API key
    pub fn api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.config.api_key = SecretString::from(api_key.into());
        self
    }

    /// Set the base URL; a trailing `/` is added when missing
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.config.base_url = normalize_base_url(&base_url.into());
        self
    }

    /// Set request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.http_config.timeout = Some(timeout);
        self
    }

    /// Set connection timeout
    pub fn connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.config.http_config.connect_timeout = Some(connect_timeout);
        self
    }

    pub fn proxy<S: Into<String>>(mut self, proxy: S) -> Self {
        self.config.http_config.proxy = Some(proxy.into());
        self
    }

    /// Override the `User-Agent` header
    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.config.http_config.user_agent = Some(user_agent.into());
        self
    }

    /// Send `X-RosetteAPI-Devel: true` with every request
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.config.retry_policy.max_retries = max_retries;
        self
    }

    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.config.retry_policy.initial_delay = delay;
        self
    }

    /// Replace the whole retry policy
    pub fn with_retry(mut self, policy: RetryPolicy) -> Self {
        self.config.retry_policy = policy;
        self
    }

    /// Check binding compatibility before the first analysis call
    pub fn check_version(mut self, enabled: bool) -> Self {
        self.config.check_version = enabled;
        self
    }

    /// Add a custom header; the name is validated on build
    pub fn custom_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.custom_headers.insert(name.into(), value.into());
        self
    }

    pub fn option<K: Into<String>>(mut self, name: K, value: impl Into<Value>) -> Self {
        let name = name.into();
        match value.into() {
            Value::Null => {
                self.options.remove(&name);
            }
            value => {
                self.options.insert(name, value);
            }
        }
        self
    }

    pub fn url_parameter<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.url_parameters.insert(name.into(), value.into());
        self
    }

    /// Use a preconfigured reqwest client; timeouts and proxy settings of
    /// this builder are then ignored
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Route every request through a custom transport
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<RosetteClient, RosetteError> {
        self.config.validate()?;
        for name in self.custom_headers.keys() {
            validate_custom_header_name(name)?;
        }

        let transport: Arc<dyn HttpTransport> = match (self.transport, self.http_client) {
            (Some(transport), _) => transport,
            (None, Some(client)) => Arc::new(ReqwestTransport::new(client)),
            (None, None) => Arc::new(ReqwestTransport::from_config(&self.config.http_config)?),
        };

        tracing::debug!(
            base_url = %self.config.base_url,
            check_version = self.config.check_version,
            "rosette client built"
        );

        Ok(RosetteClient::from_parts(
            self.config,
            transport,
            self.custom_headers,
            self.options,
            self.url_parameters,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_api_key() {
        let err = RosetteClientBuilder::new().build().unwrap_err();
        assert_eq!(err.code(), "invalidConfiguration");
    }

    #[test]
    fn defaults_apply() {
        let client = RosetteClientBuilder::new().api_key("k").build().unwrap();
        assert_eq!(client.base_url(), "https://api.rosette.com/rest/v1/");
        assert_eq!(client.max_retries(), 5);
        assert!(!client.debug());
        assert!(!client.config().check_version);
    }

    #[test]
    fn base_url_is_normalized() {
        let client = RosetteClientBuilder::new()
            .api_key("k")
            .base_url("http://localhost:8181/rest/v1")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8181/rest/v1/");
    }

    #[test]
    fn invalid_custom_header_fails_build() {
        let err = RosetteClientBuilder::new()
            .api_key("k")
            .custom_header("X-App", "x")
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Validation);
        assert_eq!(err.code(), "badRequestFormat");
    }

    #[test]
    fn session_state_is_carried_into_client() {
        let client = RosetteClientBuilder::new()
            .api_key("k")
            .custom_header("X-RosetteAPI-App", "rust-app")
            .option("negation", "BOTH")
            .option("dropped", Value::Null)
            .url_parameter("output", "rosette")
            .debug(true)
            .max_retries(2)
            .retry_delay(Duration::from_millis(20))
            .build()
            .unwrap();
        assert_eq!(client.custom_headers()["X-RosetteAPI-App"], "rust-app");
        assert_eq!(client.options()["negation"], "BOTH");
        assert!(client.get_option("dropped").is_none());
        assert_eq!(client.url_parameters()["output"], "rosette");
        assert!(client.debug());
        assert_eq!(client.max_retries(), 2);
        assert_eq!(client.retry_delay(), Duration::from_millis(20));
    }
}
