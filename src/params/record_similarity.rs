//! Parameters for the record similarity operation.
//!
//! Two lists of records are compared pairwise. `fields` describes the schema
//! of a record, `properties` tunes the comparison.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Parameters;
use crate::error::{ErrorCode, RosetteError};

/// One record: field name to value. Values may be plain strings or objects
/// (a name with language, a fielded address, a date with format...).
pub type Record = Map<String, Value>;

/// Schema entry for one record field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSimilarityField {
    /// Field type, e.g. `rni_name`, `rni_date`, `rni_address`.
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl RecordSimilarityField {
    pub fn new(field_type: impl Into<String>, weight: f64) -> Self {
        Self {
            field_type: field_type.into(),
            weight: Some(weight),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSimilarityProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_explain_info: Option<bool>,
    /// Server-side properties this binding does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RecordSimilarityProperties {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn with_explain_info(mut self, include: bool) -> Self {
        self.include_explain_info = Some(include);
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.threshold.is_none() && self.include_explain_info.is_none() && self.extra.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordSimilarityRecords {
    pub left: Vec<Record>,
    pub right: Vec<Record>,
}

impl RecordSimilarityRecords {
    pub fn new(left: Vec<Record>, right: Vec<Record>) -> Self {
        Self { left, right }
    }

    /// Both sides are needed for a comparison.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() || self.right.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSimilarityParameters {
    pub fields: BTreeMap<String, RecordSimilarityField>,
    pub properties: RecordSimilarityProperties,
    pub records: RecordSimilarityRecords,
}

impl RecordSimilarityParameters {
    pub fn new(
        fields: BTreeMap<String, RecordSimilarityField>,
        properties: RecordSimilarityProperties,
        records: RecordSimilarityRecords,
    ) -> Self {
        Self {
            fields,
            properties,
            records,
        }
    }
}

fn missing(field: &str) -> RosetteError {
    RosetteError::validation(
        ErrorCode::BadRequestFormat,
        format!("Required record similarity parameter not supplied: {field}"),
    )
}

impl Parameters for RecordSimilarityParameters {
    const PROPERTIES: &'static [&'static str] = &["fields", "properties", "records"];

    fn validate(&self) -> Result<(), RosetteError> {
        if self.fields.is_empty() {
            return Err(missing("fields"));
        }
        if self.properties.is_empty() {
            return Err(missing("properties"));
        }
        if self.records.is_empty() {
            return Err(missing("records"));
        }
        Ok(())
    }

    /// Every section is required and already checked by `validate`, and the
    /// records are caller data, so nothing is pruned.
    fn body_fields(&self) -> Result<Value, RosetteError> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Options;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("record must be an object"),
        }
    }

    fn sample() -> RecordSimilarityParameters {
        let mut fields = BTreeMap::new();
        fields.insert("primaryName".to_string(), RecordSimilarityField::new("rni_name", 0.5));
        fields.insert("dob".to_string(), RecordSimilarityField::new("rni_date", 0.2));

        RecordSimilarityParameters::new(
            fields,
            RecordSimilarityProperties::default()
                .with_threshold(0.7)
                .with_explain_info(true),
            RecordSimilarityRecords::new(
                vec![record(json!({
                    "primaryName": {"text": "Ethan R", "language": "eng"},
                    "dob": "1993-04-16"
                }))],
                vec![record(json!({
                    "primaryName": "Ivan R",
                    "dob": {"date": "1993/04/16"}
                }))],
            ),
        )
    }

    #[test]
    fn serializes_schema_properties_and_records() {
        let body = sample().to_body(&Options::new()).unwrap();
        assert_eq!(body["fields"]["primaryName"], json!({"type": "rni_name", "weight": 0.5}));
        assert_eq!(body["properties"], json!({"threshold": 0.7, "includeExplainInfo": true}));
        assert_eq!(body["records"]["right"][0]["primaryName"], json!("Ivan R"));
    }

    #[test]
    fn explain_flag_false_is_kept() {
        let mut params = sample();
        params.properties.include_explain_info = Some(false);
        let body = params.to_body(&Options::new()).unwrap();
        assert_eq!(body["properties"]["includeExplainInfo"], json!(false));
    }

    #[test]
    fn each_section_is_required() {
        let mut params = sample();
        params.fields.clear();
        assert!(params.validate().unwrap_err().message().ends_with("fields"));

        let mut params = sample();
        params.properties = RecordSimilarityProperties::default();
        assert!(params.validate().unwrap_err().message().ends_with("properties"));

        let mut params = sample();
        params.records.right.clear();
        let err = params.validate().unwrap_err();
        assert_eq!(err.code(), "badRequestFormat");
        assert!(err.message().ends_with("records"));
    }

    #[test]
    fn blank_record_values_are_sent_as_given() {
        let mut params = sample();
        params.records.left = vec![record(json!({"primaryName": ""}))];
        params.validate().unwrap();

        let body = params.to_body(&Options::new()).unwrap();
        assert_eq!(body["records"]["left"], json!([{"primaryName": ""}]));
        assert_eq!(body["records"]["right"][0]["primaryName"], json!("Ivan R"));
    }

    #[test]
    fn unmodelled_properties_pass_through() {
        let mut params = sample();
        params.properties = RecordSimilarityProperties::default().with_property("parameters", json!({"x": 1}));
        let body = params.to_body(&Options::new()).unwrap();
        assert_eq!(body["properties"], json!({"parameters": {"x": 1}}));
    }

    #[test]
    fn json_round_trip_preserves_fields() {
        let mut params = sample();
        params.properties = params
            .properties
            .with_property("parameters", json!({"dateTimeFormat": "yyyy/MM/dd"}));
        let json = params.to_json(&Options::new()).unwrap();
        let decoded: RecordSimilarityParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, params);
    }
}
