//! HTTP Headers Utility
//!
//! Headers are assembled per request from the client configuration, so
//! nothing set for one call (such as the multipart content type) leaks into
//! the next.

use std::collections::BTreeMap;

use reqwest::header::{
    ACCEPT, ACCEPT_ENCODING, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT,
};
use serde_json::{Map, Value};

use crate::defaults;
use crate::error::{ErrorCode, RosetteError};

/// Prefix every caller-supplied header must carry.
pub const CUSTOM_HEADER_PREFIX: &str = "X-RosetteAPI-";

pub const API_KEY_HEADER: &str = "X-RosetteAPI-Key";
pub const BINDING_HEADER: &str = "X-RosetteAPI-Binding";
pub const BINDING_VERSION_HEADER: &str = "X-RosetteAPI-Binding-Version";
pub const DEVEL_HEADER: &str = "X-RosetteAPI-Devel";

/// Fail unless `name` starts with [`CUSTOM_HEADER_PREFIX`], ignoring case.
pub fn validate_custom_header_name(name: &str) -> Result<(), RosetteError> {
    let prefix = CUSTOM_HEADER_PREFIX.as_bytes();
    let matches = name
        .as_bytes()
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix));
    if matches {
        Ok(())
    } else {
        Err(RosetteError::validation(
            ErrorCode::BadRequestFormat,
            format!("Custom header name must begin with \"{CUSTOM_HEADER_PREFIX}\": {name}"),
        ))
    }
}

/// HTTP header builder for API requests
pub struct HttpHeaderBuilder {
    headers: HeaderMap,
}

impl HttpHeaderBuilder {
    pub fn new() -> Self {
        Self {
            headers: HeaderMap::new(),
        }
    }

    /// Headers every call carries: JSON accept, gzip, binding identification.
    pub fn with_binding_defaults(mut self) -> Self {
        self.headers
            .insert(ACCEPT, HeaderValue::from_static("application/json"));
        self.headers
            .insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));
        self.headers.insert(
            HeaderName::from_static("x-rosetteapi-binding"),
            HeaderValue::from_static(defaults::binding::NAME),
        );
        self.headers.insert(
            HeaderName::from_static("x-rosetteapi-binding-version"),
            HeaderValue::from_static(defaults::binding::VERSION),
        );
        self
    }

    pub fn with_api_key(mut self, key: &str) -> Result<Self, RosetteError> {
        let mut value = HeaderValue::from_str(key)
            .map_err(|e| RosetteError::ConfigurationError(format!("Invalid API key format: {e}")))?;
        value.set_sensitive(true);
        self.headers
            .insert(HeaderName::from_static("x-rosetteapi-key"), value);
        Ok(self)
    }

    pub fn with_json_content_type(mut self) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self
    }

    pub fn with_content_type(mut self, content_type: &str) -> Result<Self, RosetteError> {
        self.headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_str(content_type).map_err(|e| {
                RosetteError::ConfigurationError(format!("Invalid content type: {e}"))
            })?,
        );
        Ok(self)
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Result<Self, RosetteError> {
        self.headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .map_err(|e| RosetteError::ConfigurationError(format!("Invalid user agent: {e}")))?,
        );
        Ok(self)
    }

    /// Add `X-RosetteAPI-Devel: true` when `debug` is set.
    pub fn with_debug(mut self, debug: bool) -> Self {
        if debug {
            self.headers.insert(
                HeaderName::from_static("x-rosetteapi-devel"),
                HeaderValue::from_static("true"),
            );
        }
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, RosetteError> {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            RosetteError::ConfigurationError(format!("Invalid header name '{name}': {e}"))
        })?;
        self.headers.insert(
            header_name,
            HeaderValue::from_str(value).map_err(|e| {
                RosetteError::ConfigurationError(format!("Invalid header value '{value}': {e}"))
            })?,
        );
        Ok(self)
    }

    /// Add caller-supplied headers; they override same-named headers set earlier.
    pub fn with_custom_headers(
        mut self,
        custom_headers: &BTreeMap<String, String>,
    ) -> Result<Self, RosetteError> {
        for (key, value) in custom_headers {
            self = self.with_header(key, value)?;
        }
        Ok(self)
    }

    pub fn build(self) -> HeaderMap {
        self.headers
    }
}

impl Default for HttpHeaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Response headers as a JSON object. Repeated headers are joined with `, `;
/// values that are not valid UTF-8 are dropped.
pub fn headermap_to_json(headers: &HeaderMap) -> Map<String, Value> {
    let mut map = Map::new();
    for (name, value) in headers {
        let Ok(value) = value.to_str() else {
            continue;
        };
        match map.get_mut(name.as_str()) {
            Some(Value::String(existing)) => {
                existing.push_str(", ");
                existing.push_str(value);
            }
            _ => {
                map.insert(name.as_str().to_string(), Value::String(value.to_string()));
            }
        }
    }
    map
}
