//! A name used by the name similarity and deduplication operations.

use serde::{Deserialize, Serialize};

use super::Parameters;
use crate::error::{ErrorCode, RosetteError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Name {
    /// The name itself
    pub text: String,
    /// Entity type of the name (`PERSON`, `LOCATION`, `ORGANIZATION`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    /// ISO 639-3 language code of the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// ISO 15924 script code of the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
}

impl Name {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            entity_type: None,
            language: None,
            script: None,
        }
    }

    pub fn with_entity_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.script = Some(script.into());
        self
    }
}

impl Parameters for Name {
    const PROPERTIES: &'static [&'static str] = &["text", "entityType", "language", "script"];

    fn validate(&self) -> Result<(), RosetteError> {
        if self.text.is_empty() {
            return Err(RosetteError::validation(
                ErrorCode::BadRequestFormat,
                "The text of a name is required",
            ));
        }
        Ok(())
    }
}
