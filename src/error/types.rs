//! Core error types.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Machine codes produced locally by the binding.
///
/// Server-side failures carry whatever code the service returned instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A required parameter is missing or malformed
    BadRequestFormat,
    /// A parameter has the wrong type or conflicts with another one
    InvalidDatatype,
    /// Lookup of a property that the parameter object does not define
    InvalidPropertyName,
    /// The server rejected the binding version
    IncompatibleVersion,
    /// The server failed without providing a code
    UnknownError,
    /// The request never reached the server
    ConnectionError,
    /// The response body could not be decoded
    InvalidResponse,
    /// The client was configured with unusable values
    InvalidConfiguration,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequestFormat => "badRequestFormat",
            Self::InvalidDatatype => "invalidDataType",
            Self::InvalidPropertyName => "invalidPropertyName",
            Self::IncompatibleVersion => "incompatibleClientVersion",
            Self::UnknownError => "unknownError",
            Self::ConnectionError => "connectionError",
            Self::InvalidResponse => "invalidResponse",
            Self::InvalidConfiguration => "invalidConfiguration",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse classification of a [`RosetteError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caught before any network call
    Validation,
    /// Connection or IO failure
    Transport,
    /// Non-200 HTTP response or incompatible server
    Protocol,
    /// Malformed or non-JSON response body
    Decode,
    /// Unusable client configuration
    Configuration,
}

/// The single error type of the binding.
///
/// Every variant carries a message and a machine code; callers are expected
/// to match on [`RosetteError::code`] or [`RosetteError::kind`] when they need
/// to branch.
#[derive(Debug, Clone, Error)]
pub enum RosetteError {
    /// Client-side parameter validation failure
    #[error("{message}")]
    ValidationError { code: ErrorCode, message: String },

    /// The transport could not complete the exchange
    #[error("transport error: {0}")]
    TransportError(String),

    /// The service answered with a non-200 status
    #[error("{message} (status {status}, code {code})")]
    ApiError {
        status: u16,
        code: String,
        message: String,
        details: Option<Value>,
    },

    /// The service does not support this binding version
    #[error("{message}")]
    IncompatibleVersion { message: String },

    /// The response body was not the JSON object the service promises
    #[error("failed to decode response: {message}")]
    DecodeError { status: Option<u16>, message: String },

    /// Invalid client configuration (bad header value, malformed URL, ...)
    #[error("configuration error: {0}")]
    ConfigurationError(String),
}

impl RosetteError {
    /// Create a validation error with a local code.
    pub fn validation(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::ValidationError {
            code,
            message: message.into(),
        }
    }

    /// Create an API error with an explicit server code.
    pub fn api_error(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Translate a decoded error body returned with a non-200 status.
    ///
    /// `context` names the failing operation and prefixes the message. When the
    /// body lacks a `code` the code falls back to `badRequestFormat`; when it
    /// lacks a `message` the code (or `"unknown error"`) is used instead.
    pub fn from_response_body(status: u16, body: &Value, context: &str) -> Self {
        let message = body.get("message").and_then(Value::as_str);
        let code = body.get("code").and_then(|code| match code {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        });

        let (code, message) = match code {
            Some(code) => {
                let message = message.map(str::to_string).unwrap_or_else(|| code.clone());
                (code, message)
            }
            None => (
                ErrorCode::BadRequestFormat.as_str().to_string(),
                message.unwrap_or("unknown error").to_string(),
            ),
        };

        Self::ApiError {
            status,
            code,
            message: format!("{context}: {message}"),
            details: Some(body.clone()),
        }
    }

    /// The machine code of this error.
    pub fn code(&self) -> &str {
        match self {
            Self::ValidationError { code, .. } => code.as_str(),
            Self::TransportError(_) => ErrorCode::ConnectionError.as_str(),
            Self::ApiError { code, .. } => code,
            Self::IncompatibleVersion { .. } => ErrorCode::IncompatibleVersion.as_str(),
            Self::DecodeError { .. } => ErrorCode::InvalidResponse.as_str(),
            Self::ConfigurationError(_) => ErrorCode::InvalidConfiguration.as_str(),
        }
    }

    /// The code as an integer; 0 when the code is not numeric.
    pub fn numeric_code(&self) -> i64 {
        self.code().trim().parse().unwrap_or(0)
    }

    /// The human-readable message, without the code/status decoration.
    pub fn message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. }
            | Self::ApiError { message, .. }
            | Self::IncompatibleVersion { message }
            | Self::DecodeError { message, .. } => message,
            Self::TransportError(message) | Self::ConfigurationError(message) => message,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ValidationError { .. } => ErrorKind::Validation,
            Self::TransportError(_) => ErrorKind::Transport,
            Self::ApiError { .. } | Self::IncompatibleVersion { .. } => ErrorKind::Protocol,
            Self::DecodeError { .. } => ErrorKind::Decode,
            Self::ConfigurationError(_) => ErrorKind::Configuration,
        }
    }

    /// HTTP status associated with the error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::DecodeError { status, .. } => *status,
            _ => None,
        }
    }

    /// Raw server error body, when the service returned one.
    pub fn details(&self) -> Option<&Value> {
        match self {
            Self::ApiError { details, .. } => details.as_ref(),
            _ => None,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status_code() == Some(429)
    }

    /// Only rate-limited responses are retried; everything else fails immediately.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ApiError { status: 429, .. })
    }
}
