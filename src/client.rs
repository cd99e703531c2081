//! Rosette Client
//!
//! [`RosetteClient`] owns the connection configuration and the mutable
//! session state (custom headers, options, URL parameters) and exposes one
//! async method per service operation.
//!
//! Every operation resolves to a single request cycle: the parameter object
//! is validated and encoded, headers are assembled for that request only,
//! and rate-limited responses are retried per the client's [`RetryPolicy`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::builder::RosetteClientBuilder;
use crate::config::RosetteConfig;
use crate::defaults;
use crate::endpoints::{Endpoint, MorphologyFacet};
use crate::error::RosetteError;
use crate::execution::executor::{HttpBody, HttpExecutionConfig, build_url, execute_request};
use crate::execution::http::headers::validate_custom_header_name;
use crate::execution::http::multipart::MultipartBody;
use crate::execution::http::transport::{HttpMethod, HttpTransport};
use crate::params::{
    AddressSimilarityParameters, DocumentParameters, NameDeduplicationParameters,
    NameSimilarityParameters, NameTranslationParameters, Options, Parameters,
    RecordSimilarityParameters, TransliterationParameters,
};
use crate::retry::RetryPolicy;

/// Client for the Rosette text analytics service.
pub struct RosetteClient {
    config: RosetteConfig,
    user_agent: String,
    transport: Arc<dyn HttpTransport>,
    custom_headers: BTreeMap<String, String>,
    options: Options,
    url_parameters: BTreeMap<String, String>,
    version_checked: AtomicBool,
}

impl fmt::Debug for RosetteClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RosetteClient")
            .field("config", &self.config)
            .field("custom_headers", &self.custom_headers)
            .field("options", &self.options)
            .field("url_parameters", &self.url_parameters)
            .finish_non_exhaustive()
    }
}

macro_rules! document_operations {
    ($($(#[$doc:meta])* $name:ident => $endpoint:expr;)*) => {
        $(
            $(#[$doc])*
            pub async fn $name(&self, params: &DocumentParameters) -> Result<Value, RosetteError> {
                self.call($endpoint, params).await
            }
        )*
    };
}

impl RosetteClient {
    /// Client against the public service with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self, RosetteError> {
        Self::builder().api_key(api_key).build()
    }

    pub fn builder() -> RosetteClientBuilder {
        RosetteClientBuilder::new()
    }

    pub(crate) fn from_parts(
        config: RosetteConfig,
        transport: Arc<dyn HttpTransport>,
        custom_headers: BTreeMap<String, String>,
        options: Options,
        url_parameters: BTreeMap<String, String>,
    ) -> Self {
        let user_agent = config.http_config.effective_user_agent();
        Self {
            config,
            user_agent,
            transport,
            custom_headers,
            options,
            url_parameters,
            version_checked: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &RosetteConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn debug(&self) -> bool {
        self.config.debug
    }

    /// Toggle the `X-RosetteAPI-Devel` header.
    pub fn set_debug(&mut self, debug: bool) {
        self.config.debug = debug;
    }

    pub fn max_retries(&self) -> u32 {
        self.config.retry_policy.max_retries
    }

    pub fn set_max_retries(&mut self, max_retries: u32) {
        self.config.retry_policy.max_retries = max_retries;
    }

    pub fn retry_delay(&self) -> Duration {
        self.config.retry_policy.initial_delay
    }

    pub fn set_retry_delay(&mut self, delay: Duration) {
        self.config.retry_policy.initial_delay = delay;
    }

    pub fn set_retry_policy(&mut self, policy: RetryPolicy) {
        self.config.retry_policy = policy;
    }

    /// Replace the request primitive.
    pub fn set_transport(&mut self, transport: Arc<dyn HttpTransport>) {
        self.transport = transport;
    }

    pub fn custom_headers(&self) -> &BTreeMap<String, String> {
        &self.custom_headers
    }

    /// Set or, with `None`, remove a custom header.
    ///
    /// The name must begin with `X-RosetteAPI-` (any case).
    pub fn set_custom_header(
        &mut self,
        name: impl Into<String>,
        value: Option<&str>,
    ) -> Result<(), RosetteError> {
        let name = name.into();
        validate_custom_header_name(&name)?;
        match value {
            Some(value) => {
                self.custom_headers.insert(name, value.to_string());
            }
            None => {
                self.custom_headers.remove(&name);
            }
        }
        Ok(())
    }

    pub fn clear_custom_headers(&mut self) {
        self.custom_headers.clear();
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn get_option(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }

    /// Set an option sent with every request; `null` removes it.
    pub fn set_option(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        match value.into() {
            Value::Null => {
                self.options.remove(&name);
            }
            value => {
                self.options.insert(name, value);
            }
        }
    }

    pub fn clear_options(&mut self) {
        self.options.clear();
    }

    pub fn url_parameters(&self) -> &BTreeMap<String, String> {
        &self.url_parameters
    }

    /// Add a query parameter appended to every request URL.
    pub fn set_url_parameter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.url_parameters.insert(name.into(), value.into());
    }

    pub fn remove_url_parameter(&mut self, name: &str) {
        self.url_parameters.remove(name);
    }

    pub fn clear_url_parameters(&mut self) {
        self.url_parameters.clear();
    }

    fn execution_config(&self) -> HttpExecutionConfig<'_> {
        HttpExecutionConfig {
            transport: self.transport.as_ref(),
            api_key: &self.config.api_key,
            user_agent: &self.user_agent,
            debug: self.config.debug,
            custom_headers: &self.custom_headers,
            retry_policy: &self.config.retry_policy,
        }
    }

    /// Confirm the service supports this binding version.
    ///
    /// Succeeds only when the service answers `versionChecked: true`; the
    /// result is remembered for the lifetime of the client.
    pub async fn check_version(&self) -> Result<(), RosetteError> {
        let mut query = BTreeMap::new();
        query.insert("clientVersion".to_string(), defaults::binding::VERSION.to_string());
        let url = build_url(&self.config.base_url, &Endpoint::Info.path(), &query)?;

        let result = execute_request(
            &self.execution_config(),
            HttpMethod::Post,
            &url,
            &HttpBody::Empty,
            "info",
        )
        .await?;

        if result.get("versionChecked") == Some(&Value::Bool(true)) {
            self.version_checked.store(true, Ordering::Release);
            Ok(())
        } else {
            Err(RosetteError::IncompatibleVersion {
                message: format!(
                    "The server version is not compatible with binding version {}",
                    defaults::binding::VERSION
                ),
            })
        }
    }

    async fn ensure_version(&self, endpoint: Endpoint) -> Result<(), RosetteError> {
        if self.config.check_version
            && endpoint.requires_version_check()
            && !self.version_checked.load(Ordering::Acquire)
        {
            self.check_version().await?;
        }
        Ok(())
    }

    async fn call<P: Parameters>(&self, endpoint: Endpoint, params: &P) -> Result<Value, RosetteError> {
        let json = params.to_json(&self.options)?;
        self.ensure_version(endpoint).await?;

        let body = match params.multipart_content() {
            Some(content) => HttpBody::Multipart(MultipartBody::new(&json, content)),
            None => HttpBody::Json(json),
        };
        let path = endpoint.path();
        let url = build_url(&self.config.base_url, &path, &self.url_parameters)?;
        debug!(endpoint = %path, multipart = matches!(body, HttpBody::Multipart(_)), "calling endpoint");

        execute_request(&self.execution_config(), endpoint.method(), &url, &body, &path).await
    }

    async fn call_without_body(&self, endpoint: Endpoint) -> Result<Value, RosetteError> {
        let path = endpoint.path();
        let url = build_url(&self.config.base_url, &path, &self.url_parameters)?;
        execute_request(&self.execution_config(), endpoint.method(), &url, &HttpBody::Empty, &path).await
    }

    /// Check that the service is reachable.
    pub async fn ping(&self) -> Result<Value, RosetteError> {
        self.call_without_body(Endpoint::Ping).await
    }

    /// Service name, version and build information.
    pub async fn info(&self) -> Result<Value, RosetteError> {
        self.call_without_body(Endpoint::Info).await
    }

    document_operations! {
        /// Identify the language of the document.
        language => Endpoint::Language;
        sentences => Endpoint::Sentences;
        tokens => Endpoint::Tokens;
        /// Extract entities (people, places, organizations...).
        entities => Endpoint::Entities;
        /// Entities with knowledge-base links.
        entities_linked => Endpoint::EntitiesLinked;
        categories => Endpoint::Categories;
        sentiment => Endpoint::Sentiment;
        relationships => Endpoint::Relationships;
        /// Embedding of the document.
        semantic_vectors => Endpoint::SemanticVectors;
        syntax_dependencies => Endpoint::SyntaxDependencies;
        /// Key phrases and concepts.
        topics => Endpoint::Topics;
        /// Terms semantically close to the input.
        similar_terms => Endpoint::SimilarTerms;
        events => Endpoint::Events;
    }

    /// Morphological analysis restricted to one facet.
    pub async fn morphology(
        &self,
        params: &DocumentParameters,
        facet: MorphologyFacet,
    ) -> Result<Value, RosetteError> {
        self.call(Endpoint::Morphology(facet), params).await
    }

    pub async fn name_translation(
        &self,
        params: &NameTranslationParameters,
    ) -> Result<Value, RosetteError> {
        self.call(Endpoint::NameTranslation, params).await
    }

    pub async fn name_similarity(
        &self,
        params: &NameSimilarityParameters,
    ) -> Result<Value, RosetteError> {
        self.call(Endpoint::NameSimilarity, params).await
    }

    pub async fn name_deduplication(
        &self,
        params: &NameDeduplicationParameters,
    ) -> Result<Value, RosetteError> {
        self.call(Endpoint::NameDeduplication, params).await
    }

    pub async fn record_similarity(
        &self,
        params: &RecordSimilarityParameters,
    ) -> Result<Value, RosetteError> {
        self.call(Endpoint::RecordSimilarity, params).await
    }

    pub async fn transliteration(
        &self,
        params: &TransliterationParameters,
    ) -> Result<Value, RosetteError> {
        self.call(Endpoint::Transliteration, params).await
    }

    pub async fn address_similarity(
        &self,
        params: &AddressSimilarityParameters,
    ) -> Result<Value, RosetteError> {
        self.call(Endpoint::AddressSimilarity, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn client() -> RosetteClient {
        RosetteClient::new("test-key").unwrap()
    }

    #[test]
    fn custom_header_lifecycle() {
        let mut client = client();
        client.set_custom_header("X-RosetteAPI-App", Some("rust-app")).unwrap();
        assert_eq!(client.custom_headers()["X-RosetteAPI-App"], "rust-app");

        client.set_custom_header("X-RosetteAPI-App", None).unwrap();
        assert!(client.custom_headers().is_empty());

        let err = client.set_custom_header("Foo", Some("x")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.code(), "badRequestFormat");
        assert!(client.custom_headers().is_empty());

        client.set_custom_header("x-rosetteapi-a", Some("1")).unwrap();
        client.clear_custom_headers();
        assert!(client.custom_headers().is_empty());
    }

    #[test]
    fn options_last_write_wins_and_null_removes() {
        let mut client = client();
        client.set_option("negation", "BOTH");
        client.set_option("negation", "ONLY_NEGATIVE");
        assert_eq!(client.get_option("negation"), Some(&json!("ONLY_NEGATIVE")));

        client.set_option("negation", Value::Null);
        assert_eq!(client.get_option("negation"), None);

        client.set_option("linkEntities", true);
        client.clear_options();
        assert!(client.options().is_empty());
    }

    #[test]
    fn url_parameters_are_clearable() {
        let mut client = client();
        client.set_url_parameter("output", "rosette");
        assert_eq!(client.url_parameters()["output"], "rosette");
        client.remove_url_parameter("output");
        client.set_url_parameter("a", "b");
        client.clear_url_parameters();
        assert!(client.url_parameters().is_empty());
    }

    #[test]
    fn retry_settings_are_mutable() {
        let mut client = client();
        assert_eq!(client.max_retries(), 5);
        assert_eq!(client.retry_delay(), Duration::from_millis(500));
        client.set_max_retries(1);
        client.set_retry_delay(Duration::from_millis(10));
        assert_eq!(client.max_retries(), 1);
        assert_eq!(client.retry_delay(), Duration::from_millis(10));
    }

    #[test]
    fn debug_output_hides_key() {
        let rendered = format!("{:?}", client());
        assert!(!rendered.contains("test-key"));
    }
}
