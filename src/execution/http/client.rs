//! HTTP client builder utilities

use crate::error::RosetteError;
use crate::types::HttpConfig;

/// Build the reqwest client used by [`ReqwestTransport`](super::transport::ReqwestTransport).
///
/// Responses declaring `Content-Encoding: gzip` are decompressed by the client.
pub fn build_http_client_from_config(config: &HttpConfig) -> Result<reqwest::Client, RosetteError> {
    let mut builder = reqwest::Client::builder().gzip(true);

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }

    if let Some(proxy_url) = &config.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| RosetteError::ConfigurationError(format!("Invalid proxy URL: {e}")))?;
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|e| RosetteError::ConfigurationError(format!("Failed to create HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn builds_with_defaults() {
        assert!(build_http_client_from_config(&HttpConfig::default()).is_ok());
    }

    #[test]
    fn builds_with_custom_timeouts() {
        let config = HttpConfig::builder()
            .timeout(Some(Duration::from_secs(1)))
            .connect_timeout(Some(Duration::from_millis(200)))
            .build();
        assert!(build_http_client_from_config(&config).is_ok());
    }

    #[test]
    fn rejects_malformed_proxy() {
        let config = HttpConfig::builder().proxy(Some("not a url")).build();
        let err = build_http_client_from_config(&config).unwrap_err();
        assert_eq!(err.code(), "invalidConfiguration");
    }
}
