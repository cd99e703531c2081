//! Type Conversions for RosetteError
//!
//! From implementations for the error types produced by the HTTP and JSON stacks.

use super::types::RosetteError;

/// Failures decoding a received body (including `Content-Encoding`) are
/// decode errors; everything else never completed the exchange.
impl From<reqwest::Error> for RosetteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::DecodeError {
                status: err.status().map(|s| s.as_u16()),
                message: err.to_string(),
            }
        } else {
            Self::TransportError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RosetteError {
    fn from(err: serde_json::Error) -> Self {
        Self::DecodeError {
            status: None,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for RosetteError {
    fn from(err: std::io::Error) -> Self {
        Self::validation(super::ErrorCode::InvalidDatatype, err.to_string())
    }
}
