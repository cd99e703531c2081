//! HTTP transport abstraction.
//!
//! The request primitive is injectable: a client can run over any
//! [`HttpTransport`], which lets tests observe the final URL, headers and body
//! and answer with a scripted response without touching the network.

use std::fmt;
use std::io::Read;

use async_trait::async_trait;
use flate2::read::GzDecoder;
use reqwest::header::HeaderMap;

use super::client::build_http_client_from_config;
use crate::error::RosetteError;
use crate::types::HttpConfig;
use crate::utils::mime::is_gzip;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport-level request data.
#[derive(Debug, Clone)]
pub struct HttpTransportRequest {
    pub method: HttpMethod,
    /// Full URL, query string included
    pub url: String,
    pub headers: HeaderMap,
    /// Encoded body; `None` for GET
    pub body: Option<Vec<u8>>,
}

/// Transport-level response data.
///
/// The body is already free of any content encoding.
#[derive(Debug, Clone)]
pub struct HttpTransportResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Performs one HTTP exchange.
///
/// Implementations decompress the body and report connection-level failures
/// as [`RosetteError::TransportError`]; any HTTP status, success or not, is a
/// successful exchange.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, RosetteError>;
}

/// Inflate a body that is still gzip-compressed.
///
/// The client undoes `Content-Encoding: gzip` itself; this catches bodies
/// compressed without that header, recognized by their magic bytes.
pub fn inflate_gzip_body(status: u16, body: Vec<u8>) -> Result<Vec<u8>, RosetteError> {
    if !is_gzip(&body) {
        return Ok(body);
    }
    let mut decoded = Vec::new();
    GzDecoder::new(body.as_slice())
        .read_to_end(&mut decoded)
        .map_err(|e| RosetteError::DecodeError {
            status: Some(status),
            message: format!("invalid gzip body: {e}"),
        })?;
    Ok(decoded)
}

/// Default transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &HttpConfig) -> Result<Self, RosetteError> {
        Ok(Self::new(build_http_client_from_config(config)?))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, RosetteError> {
        let builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };
        let builder = builder.headers(request.headers);
        let builder = match request.body {
            Some(body) => builder.body(body),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = inflate_gzip_body(status, response.bytes().await?.to_vec())?;

        Ok(HttpTransportResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    fn gzip(bytes: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(bytes).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn plain_body_is_untouched() {
        let body = br#"{"a":1}"#.to_vec();
        assert_eq!(inflate_gzip_body(200, body.clone()).unwrap(), body);
    }

    #[test]
    fn gzip_body_is_inflated() {
        let body = gzip(br#"{"sentences":["a","b"]}"#);
        assert_eq!(inflate_gzip_body(200, body).unwrap(), br#"{"sentences":["a","b"]}"#);
    }

    #[test]
    fn truncated_gzip_is_a_decode_error() {
        let mut body = gzip(br#"{"a":1}"#);
        body.truncate(12);
        let err = inflate_gzip_body(200, body).unwrap_err();
        assert_eq!(err.code(), "invalidResponse");
    }
}
