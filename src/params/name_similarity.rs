//! Parameters for the name similarity operation.

use serde::{Deserialize, Serialize};

use super::{Name, Parameters};
use crate::error::RosetteError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameSimilarityParameters {
    pub name1: Name,
    pub name2: Name,
}

impl NameSimilarityParameters {
    pub fn new(name1: Name, name2: Name) -> Self {
        Self { name1, name2 }
    }
}

impl Parameters for NameSimilarityParameters {
    const PROPERTIES: &'static [&'static str] = &["name1", "name2"];

    fn validate(&self) -> Result<(), RosetteError> {
        self.name1.validate()?;
        self.name2.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Options;
    use serde_json::json;

    #[test]
    fn serializes_both_names() {
        let params = NameSimilarityParameters::new(
            Name::new("Michael Jackson").with_language("eng"),
            Name::new("迈克尔·杰克逊"),
        );
        assert_eq!(
            params.to_body(&Options::new()).unwrap(),
            json!({
                "name1": {"text": "Michael Jackson", "language": "eng"},
                "name2": {"text": "迈克尔·杰克逊"}
            })
        );
    }

    #[test]
    fn invalid_name_fails_validation() {
        let params = NameSimilarityParameters::new(Name::new("a"), Name::new(""));
        assert!(params.validate().is_err());
    }

    #[test]
    fn name_can_be_replaced_by_property() {
        let mut params = NameSimilarityParameters::new(Name::new("a"), Name::new("b"));
        params.set("name2", json!({"text": "c", "script": "Latn"})).unwrap();
        assert_eq!(params.name2, Name::new("c").with_script("Latn"));
    }

    #[test]
    fn json_round_trip_preserves_fields() {
        let params = NameSimilarityParameters::new(
            Name::new("Michael Jackson").with_language("eng").with_entity_type("PERSON"),
            Name::new("迈克尔·杰克逊").with_script("Hani"),
        );
        let json = params.to_json(&Options::new()).unwrap();
        let decoded: NameSimilarityParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, params);
    }
}
