//! Parameters for the transliteration operation.

use serde::{Deserialize, Serialize};

use super::{Parameters, require_text};
use crate::error::RosetteError;

/// All five fields are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransliterationParameters {
    pub content: String,
    pub target_language: String,
    pub target_script: String,
    pub source_language: String,
    pub source_script: String,
}

impl TransliterationParameters {
    pub fn new(
        content: impl Into<String>,
        target_language: impl Into<String>,
        target_script: impl Into<String>,
        source_language: impl Into<String>,
        source_script: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            target_language: target_language.into(),
            target_script: target_script.into(),
            source_language: source_language.into(),
            source_script: source_script.into(),
        }
    }
}

impl Parameters for TransliterationParameters {
    const PROPERTIES: &'static [&'static str] = &[
        "content",
        "targetLanguage",
        "targetScript",
        "sourceLanguage",
        "sourceScript",
    ];

    fn validate(&self) -> Result<(), RosetteError> {
        let kind = "transliteration";
        require_text(Some(self.content.as_str()), kind, "content")?;
        require_text(Some(self.target_language.as_str()), kind, "targetLanguage")?;
        require_text(Some(self.target_script.as_str()), kind, "targetScript")?;
        require_text(Some(self.source_language.as_str()), kind, "sourceLanguage")?;
        require_text(Some(self.source_script.as_str()), kind, "sourceScript")
    }
}
