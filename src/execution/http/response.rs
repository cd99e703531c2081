//! Response decoding and error translation.

use serde_json::{Map, Value};

use super::headers::headermap_to_json;
use super::transport::HttpTransportResponse;
use crate::error::{ErrorCode, RosetteError};

/// Key under which response headers are attached to a successful result.
pub const HEADERS_KEY: &str = "headers";
/// Key inside the headers object holding the HTTP status.
pub const RESPONSE_CODE_KEY: &str = "responseCode";

/// Decode the body as a JSON object.
pub fn decode_json_object(response: &HttpTransportResponse) -> Result<Map<String, Value>, RosetteError> {
    let value: Value = serde_json::from_slice(&response.body).map_err(|e| RosetteError::DecodeError {
        status: Some(response.status),
        message: e.to_string(),
    })?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(RosetteError::DecodeError {
            status: Some(response.status),
            message: format!("expected a JSON object, got {}", json_type_name(&other)),
        }),
    }
}

/// Turn a raw exchange into the caller's result.
///
/// On 200 the decoded object is returned with the response headers (and the
/// status as `responseCode`) under `headers`. Any other status becomes an
/// [`RosetteError::ApiError`] built from the error body; `context` names the
/// operation in the message.
pub fn finish_response(response: &HttpTransportResponse, context: &str) -> Result<Value, RosetteError> {
    if response.status == 200 {
        let mut result = decode_json_object(response)?;
        let mut headers = headermap_to_json(&response.headers);
        headers.insert(RESPONSE_CODE_KEY.to_string(), Value::from(response.status));
        result.insert(HEADERS_KEY.to_string(), Value::Object(headers));
        return Ok(Value::Object(result));
    }

    let error = match decode_json_object(response) {
        Ok(body) => RosetteError::from_response_body(response.status, &Value::Object(body), context),
        Err(decode_error) => {
            tracing::debug!(status = response.status, "error body not decodable: {decode_error}");
            RosetteError::api_error(
                response.status,
                ErrorCode::UnknownError.as_str(),
                format!("{context}: HTTP {}", response.status),
            )
        }
    };
    tracing::debug!(status = response.status, code = error.code(), "{context} failed");
    Err(error)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
