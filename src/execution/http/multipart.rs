//! multipart/mixed bodies for document file content.
//!
//! The body has two parts: the JSON request (`name="request"`) followed by
//! the raw file bytes (`name="content"`). A fresh boundary is drawn for each
//! body.

use uuid::Uuid;

use crate::params::MultipartContent;

const CRLF: &[u8] = b"\r\n";

/// Encoded multipart body plus the boundary it was framed with.
#[derive(Debug, Clone)]
pub struct MultipartBody {
    boundary: String,
    bytes: Vec<u8>,
}

impl MultipartBody {
    /// Frame `request_json` and `content` with a new random boundary.
    pub fn new(request_json: &str, content: &MultipartContent) -> Self {
        Self::with_boundary(Uuid::new_v4().simple().to_string(), request_json, content)
    }

    pub fn with_boundary(boundary: String, request_json: &str, content: &MultipartContent) -> Self {
        let mut bytes = Vec::with_capacity(request_json.len() + content.content.len() + 256);
        let delimiter = format!("--{boundary}");

        bytes.extend_from_slice(delimiter.as_bytes());
        bytes.extend_from_slice(CRLF);
        bytes.extend_from_slice(b"Content-Type: application/json");
        bytes.extend_from_slice(CRLF);
        bytes.extend_from_slice(b"Content-Disposition: mixed; name=\"request\"");
        bytes.extend_from_slice(CRLF);
        bytes.extend_from_slice(CRLF);
        bytes.extend_from_slice(request_json.as_bytes());
        bytes.extend_from_slice(CRLF);

        bytes.extend_from_slice(delimiter.as_bytes());
        bytes.extend_from_slice(CRLF);
        bytes.extend_from_slice(format!("Content-Type: {}", content.content_type).as_bytes());
        bytes.extend_from_slice(CRLF);
        bytes.extend_from_slice(
            format!(
                "Content-Disposition: mixed; name=\"content\"; filename=\"{}\"",
                escape_quoted(&content.file_name)
            )
            .as_bytes(),
        );
        bytes.extend_from_slice(CRLF);
        bytes.extend_from_slice(CRLF);
        bytes.extend_from_slice(&content.content);
        bytes.extend_from_slice(CRLF);

        bytes.extend_from_slice(format!("{delimiter}--").as_bytes());
        bytes.extend_from_slice(CRLF);

        Self { boundary, bytes }
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Value for the `Content-Type` request header.
    pub fn content_type(&self) -> String {
        format!("multipart/mixed; boundary={}", self.boundary)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

fn escape_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
