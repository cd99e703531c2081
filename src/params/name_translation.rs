//! Parameters for the name translation operation.

use serde::{Deserialize, Serialize};

use super::{Parameters, require_text};
use crate::error::RosetteError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameTranslationParameters {
    /// Name to translate (required)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// ISO 639-3 code of the translation language (required)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_script: Option<String>,
    /// Language the name originates from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_language_of_origin: Option<String>,
    /// Language in which the name is used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_language_of_use: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_script: Option<String>,
    /// Transliteration scheme of the translation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_scheme: Option<String>,
}

impl NameTranslationParameters {
    pub fn new(name: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            target_language: Some(target_language.into()),
            ..Default::default()
        }
    }

    pub fn with_entity_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self
    }

    pub fn with_source_script(mut self, script: impl Into<String>) -> Self {
        self.source_script = Some(script.into());
        self
    }

    pub fn with_source_language_of_origin(mut self, language: impl Into<String>) -> Self {
        self.source_language_of_origin = Some(language.into());
        self
    }

    pub fn with_source_language_of_use(mut self, language: impl Into<String>) -> Self {
        self.source_language_of_use = Some(language.into());
        self
    }

    pub fn with_target_script(mut self, script: impl Into<String>) -> Self {
        self.target_script = Some(script.into());
        self
    }

    pub fn with_target_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.target_scheme = Some(scheme.into());
        self
    }
}

impl Parameters for NameTranslationParameters {
    const PROPERTIES: &'static [&'static str] = &[
        "name",
        "targetLanguage",
        "entityType",
        "sourceScript",
        "sourceLanguageOfOrigin",
        "sourceLanguageOfUse",
        "targetScript",
        "targetScheme",
    ];

    fn validate(&self) -> Result<(), RosetteError> {
        require_text(self.name.as_deref(), "name translation", "name")?;
        require_text(
            self.target_language.as_deref(),
            "name translation",
            "targetLanguage",
        )
    }
}
