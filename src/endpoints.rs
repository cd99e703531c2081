//! Endpoint catalogue: operation to URL path suffix and HTTP verb.

use std::fmt;

use crate::execution::http::transport::HttpMethod;

/// Facets of the morphology operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MorphologyFacet {
    #[default]
    Complete,
    Lemmas,
    PartsOfSpeech,
    CompoundComponents,
    HanReadings,
}

impl MorphologyFacet {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Lemmas => "lemmas",
            Self::PartsOfSpeech => "parts-of-speech",
            Self::CompoundComponents => "compound-components",
            Self::HanReadings => "han-readings",
        }
    }
}

impl fmt::Display for MorphologyFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Language,
    Sentences,
    Tokens,
    Morphology(MorphologyFacet),
    Entities,
    /// Entities resolved against a knowledge base
    EntitiesLinked,
    Categories,
    Sentiment,
    NameTranslation,
    NameSimilarity,
    NameDeduplication,
    RecordSimilarity,
    Relationships,
    SemanticVectors,
    SyntaxDependencies,
    Transliteration,
    Topics,
    SimilarTerms,
    AddressSimilarity,
    Events,
    Ping,
    Info,
}

impl Endpoint {
    /// Path relative to the base URL.
    pub fn path(&self) -> String {
        match self {
            Self::Morphology(facet) => format!("morphology/{facet}"),
            other => other.fixed_path().to_string(),
        }
    }

    fn fixed_path(&self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::Sentences => "sentences",
            Self::Tokens => "tokens",
            Self::Morphology(_) => "morphology",
            Self::Entities => "entities",
            Self::EntitiesLinked => "entities/linked",
            Self::Categories => "categories",
            Self::Sentiment => "sentiment",
            Self::NameTranslation => "name-translation",
            Self::NameSimilarity => "name-similarity",
            Self::NameDeduplication => "name-deduplication",
            Self::RecordSimilarity => "record-similarity",
            Self::Relationships => "relationships",
            Self::SemanticVectors => "semantics/vector",
            Self::SyntaxDependencies => "syntax/dependencies",
            Self::Transliteration => "transliteration",
            Self::Topics => "topics",
            Self::SimilarTerms => "semantics/similar",
            Self::AddressSimilarity => "address-similarity",
            Self::Events => "events",
            Self::Ping => "ping",
            Self::Info => "info",
        }
    }

    pub const fn method(&self) -> HttpMethod {
        match self {
            Self::Ping | Self::Info => HttpMethod::Get,
            _ => HttpMethod::Post,
        }
    }

    /// Whether a pending version check must run before this call.
    pub const fn requires_version_check(&self) -> bool {
        !matches!(self, Self::Ping | Self::Info)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
