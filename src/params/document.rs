//! Document parameters for the text analytics endpoints.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::Parameters;
use crate::error::{ErrorCode, RosetteError};
use crate::utils::mime::guess_content_type;

/// Raw file content sent as the second part of a multipart request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartContent {
    pub content: Vec<u8>,
    pub file_name: String,
    pub content_type: String,
}

impl MultipartContent {
    pub fn new(content: impl Into<Vec<u8>>, file_name: impl Into<String>) -> Self {
        let content = content.into();
        let file_name = file_name.into();
        let content_type = guess_content_type(&content, Some(&file_name));
        Self {
            content,
            file_name,
            content_type,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Input for every document-oriented operation (language, entities,
/// sentiment, morphology, ...).
///
/// Exactly one of `content` and `contentUri` must be supplied, unless file
/// content has been loaded for a multipart request, in which case it wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentParameters {
    /// Text to analyze
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// URL of the content to analyze
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_uri: Option<String>,
    /// ISO 639-3 language code of the content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Genre of the input (e.g. `social-media`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip)]
    multipart: Option<MultipartContent>,
}

impl DocumentParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_content_uri(mut self, uri: impl Into<String>) -> Self {
        self.content_uri = Some(uri.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Attach file content for a multipart request.
    ///
    /// Non-empty content clears `content` and `contentUri`.
    pub fn set_multipart_content(&mut self, multipart: MultipartContent) {
        if !multipart.is_empty() {
            self.content = None;
            self.content_uri = None;
        }
        self.multipart = Some(multipart);
    }

    pub fn clear_multipart_content(&mut self) {
        self.multipart = None;
    }

    /// File name of the multipart content, if any.
    pub fn file_name(&self) -> Option<&str> {
        self.multipart.as_ref().map(|m| m.file_name.as_str())
    }

    /// Load a file as multipart content; the server determines its encoding.
    pub fn load_document_file(&mut self, path: impl AsRef<Path>) -> Result<(), RosetteError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            RosetteError::validation(
                ErrorCode::InvalidDatatype,
                format!("Unable to read document file {}: {e}", path.display()),
            )
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.set_multipart_content(MultipartContent::new(bytes, file_name));
        Ok(())
    }

    /// Load text either as plain `content` or, when `multipart` is set, as
    /// multipart file content.
    pub fn load_document_string(&mut self, data: impl Into<String>, multipart: bool) {
        let data = data.into();
        if multipart {
            self.set_multipart_content(MultipartContent::new(data.into_bytes(), "content"));
        } else {
            self.content = Some(data);
            self.multipart = None;
        }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

impl Parameters for DocumentParameters {
    const PROPERTIES: &'static [&'static str] = &["content", "contentUri", "language", "genre"];

    fn validate(&self) -> Result<(), RosetteError> {
        if self.multipart.as_ref().is_some_and(|m| !m.is_empty()) {
            return Ok(());
        }
        match (
            is_blank(self.content.as_deref()),
            is_blank(self.content_uri.as_deref()),
        ) {
            (true, true) => Err(RosetteError::validation(
                ErrorCode::InvalidDatatype,
                "Must supply one of Content or ContentUri",
            )),
            (false, false) => Err(RosetteError::validation(
                ErrorCode::InvalidDatatype,
                "Cannot supply both Content and ContentUri",
            )),
            _ => Ok(()),
        }
    }

    fn multipart_content(&self) -> Option<&MultipartContent> {
        self.multipart.as_ref().filter(|m| !m.is_empty())
    }

    fn replace_properties(&mut self, updated: Self) {
        let multipart = self.multipart.take();
        *self = updated;
        self.multipart = multipart;
    }
}
