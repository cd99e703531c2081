//! Parameters for the name deduplication operation.

use serde::{Deserialize, Serialize};

use super::{Name, Parameters};
use crate::error::{ErrorCode, RosetteError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameDeduplicationParameters {
    /// Names to cluster
    pub names: Vec<Name>,
    /// Cluster threshold in the open interval (0, 1); the server default applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

impl NameDeduplicationParameters {
    pub fn new(names: Vec<Name>) -> Self {
        Self {
            names,
            threshold: None,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }
}

impl Parameters for NameDeduplicationParameters {
    const PROPERTIES: &'static [&'static str] = &["names", "threshold"];

    fn validate(&self) -> Result<(), RosetteError> {
        if self.names.is_empty() {
            return Err(RosetteError::validation(
                ErrorCode::BadRequestFormat,
                "Required name deduplication parameter not supplied: names",
            ));
        }
        if let Some(threshold) = self.threshold
            && !(threshold > 0.0 && threshold < 1.0)
        {
            return Err(RosetteError::validation(
                ErrorCode::BadRequestFormat,
                "Threshold must be in the range of 0 to 1.0",
            ));
        }
        self.names.iter().try_for_each(Name::validate)
    }
}
