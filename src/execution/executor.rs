//! Request Execution
//!
//! One logical call: assemble headers, send through the transport, retry on
//! rate limiting, translate the outcome. Headers are rebuilt for every
//! attempt from the execution config.

use std::collections::BTreeMap;

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::debug;

use super::http::headers::HttpHeaderBuilder;
use super::http::multipart::MultipartBody;
use super::http::response::finish_response;
use super::http::transport::{HttpMethod, HttpTransport, HttpTransportRequest};
use crate::error::RosetteError;
use crate::retry::{RetryExecutor, RetryPolicy};

/// HTTP request body type
#[derive(Debug, Clone)]
pub enum HttpBody {
    /// No body (GET)
    Empty,
    /// Encoded JSON text
    Json(String),
    /// multipart/mixed with file content
    Multipart(MultipartBody),
}

/// Everything a request cycle needs from the client, borrowed for one call.
#[derive(Clone, Copy)]
pub struct HttpExecutionConfig<'a> {
    pub transport: &'a dyn HttpTransport,
    pub api_key: &'a SecretString,
    pub user_agent: &'a str,
    pub debug: bool,
    pub custom_headers: &'a BTreeMap<String, String>,
    pub retry_policy: &'a RetryPolicy,
}

/// Join base URL, endpoint path and query parameters.
///
/// Parameters follow any query the path already carries.
pub fn build_url(
    base_url: &str,
    path: &str,
    params: &BTreeMap<String, String>,
) -> Result<String, RosetteError> {
    let joined = format!("{base_url}{path}");
    let mut url = reqwest::Url::parse(&joined).map_err(|e| {
        RosetteError::ConfigurationError(format!("Invalid endpoint URL '{joined}': {e}"))
    })?;
    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params.iter());
    }
    Ok(url.to_string())
}

fn build_request(
    config: &HttpExecutionConfig<'_>,
    method: HttpMethod,
    url: &str,
    body: &HttpBody,
) -> Result<HttpTransportRequest, RosetteError> {
    let builder = HttpHeaderBuilder::new()
        .with_binding_defaults()
        .with_api_key(config.api_key.expose_secret())?
        .with_user_agent(config.user_agent)?
        .with_debug(config.debug);

    let (builder, payload) = match body {
        HttpBody::Empty => (builder.with_json_content_type(), None),
        HttpBody::Json(json) => (builder.with_json_content_type(), Some(json.clone().into_bytes())),
        HttpBody::Multipart(multipart) => (
            builder.with_content_type(&multipart.content_type())?,
            Some(multipart.as_bytes().to_vec()),
        ),
    };

    let headers = builder.with_custom_headers(config.custom_headers)?.build();

    Ok(HttpTransportRequest {
        method,
        url: url.to_string(),
        headers,
        body: payload,
    })
}

/// Execute one call with rate-limit retries.
///
/// `context` names the operation in error messages.
pub async fn execute_request(
    config: &HttpExecutionConfig<'_>,
    method: HttpMethod,
    url: &str,
    body: &HttpBody,
    context: &str,
) -> Result<Value, RosetteError> {
    let executor = RetryExecutor::new(config.retry_policy.clone());
    let transport = config.transport;

    executor
        .execute(|attempt| {
            let request = build_request(config, method, url, body);
            async move {
                let request = request?;
                debug!(
                    method = %request.method,
                    url = %request.url,
                    attempt = attempt + 1,
                    "sending request"
                );
                let response = transport.execute(request).await?;
                debug!(status = response.status, bytes = response.body.len(), "received response");
                finish_response(&response, context)
            }
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::execution::http::transport::HttpTransportResponse;
    use crate::params::MultipartContent;
    use async_trait::async_trait;
    use reqwest::header::HeaderMap;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct Recorder {
        statuses: Mutex<Vec<u16>>,
        seen: Mutex<Vec<HttpTransportRequest>>,
    }

    #[async_trait]
    impl HttpTransport for Recorder {
        async fn execute(
            &self,
            request: HttpTransportRequest,
        ) -> Result<HttpTransportResponse, RosetteError> {
            self.seen.lock().unwrap().push(request);
            let status = {
                let mut statuses = self.statuses.lock().unwrap();
                if statuses.is_empty() { 200 } else { statuses.remove(0) }
            };
            Ok(HttpTransportResponse {
                status,
                headers: HeaderMap::new(),
                body: br#"{"ok":true}"#.to_vec(),
            })
        }
    }

    fn config<'a>(
        transport: &'a Recorder,
        key: &'a SecretString,
        custom: &'a BTreeMap<String, String>,
        policy: &'a RetryPolicy,
    ) -> HttpExecutionConfig<'a> {
        HttpExecutionConfig {
            transport,
            api_key: key,
            user_agent: "test-agent",
            debug: false,
            custom_headers: custom,
            retry_policy: policy,
        }
    }

    #[test]
    fn url_gets_encoded_query() {
        let mut params = BTreeMap::new();
        params.insert("output".to_string(), "rosette".to_string());
        params.insert("a b".to_string(), "c&d".to_string());
        assert_eq!(
            build_url("https://h/rest/v1/", "entities", &params).unwrap(),
            "https://h/rest/v1/entities?a+b=c%26d&output=rosette"
        );
        assert_eq!(
            build_url("https://h/", "info?clientVersion=1", &params).unwrap(),
            "https://h/info?clientVersion=1&a+b=c%26d&output=rosette"
        );
        assert_eq!(
            build_url("https://h/", "ping", &BTreeMap::new()).unwrap(),
            "https://h/ping"
        );
    }

    #[test]
    fn unparsable_url_is_a_configuration_error() {
        let err = build_url("not a url/", "ping", &BTreeMap::new()).unwrap_err();
        assert_eq!(err.code(), "invalidConfiguration");
    }

    #[tokio::test]
    async fn content_type_is_per_request() {
        let transport = Recorder::default();
        let key = SecretString::from("k");
        let custom = BTreeMap::new();
        let policy = RetryPolicy::none();
        let config = config(&transport, &key, &custom, &policy);

        let part = MultipartContent::new(b"text".to_vec(), "a.txt");
        let multipart = HttpBody::Multipart(MultipartBody::new("{}", &part));
        execute_request(&config, HttpMethod::Post, "http://h/language", &multipart, "language")
            .await
            .unwrap();
        execute_request(&config, HttpMethod::Post, "http://h/language", &HttpBody::Json("{}".into()), "language")
            .await
            .unwrap();

        let seen = transport.seen.lock().unwrap();
        let first = seen[0].headers["content-type"].to_str().unwrap();
        assert!(first.starts_with("multipart/mixed; boundary="));
        assert_eq!(seen[1].headers["content-type"], "application/json");
    }

    #[tokio::test]
    async fn rate_limit_is_retried_with_fresh_headers() {
        let transport = Recorder::default();
        transport.statuses.lock().unwrap().extend([429, 429]);
        let key = SecretString::from("k");
        let custom = BTreeMap::new();
        let policy = RetryPolicy::new().with_initial_delay(Duration::from_millis(1));
        let config = config(&transport, &key, &custom, &policy);

        let result = execute_request(&config, HttpMethod::Get, "http://h/ping", &HttpBody::Empty, "ping")
            .await
            .unwrap();
        assert_eq!(result["ok"], true);

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert!(seen.iter().all(|r| r.headers["x-rosetteapi-key"] == "k"));
        assert!(seen.iter().all(|r| r.body.is_none()));
    }
}
