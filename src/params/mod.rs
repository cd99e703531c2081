//! Parameter Objects
//!
//! Typed, validatable containers for the input of each API operation. Every
//! kind implements [`Parameters`], which provides:
//! - `validate()` – fail-fast checks for missing or conflicting fields
//! - `to_body()` / `to_json()` – the canonical request body with empty
//!   entries removed and the `options` map merged in
//! - `get()` / `set()` – property access by wire name

pub mod address;
pub mod address_similarity;
pub mod document;
pub mod name;
pub mod name_deduplication;
pub mod name_similarity;
pub mod name_translation;
pub mod record_similarity;
pub mod transliteration;

pub use address::*;
pub use address_similarity::*;
pub use document::*;
pub use name::*;
pub use name_deduplication::*;
pub use name_similarity::*;
pub use name_translation::*;
pub use record_similarity::*;
pub use transliteration::*;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{ErrorCode, RosetteError};

/// Per-request operation tuning flags, sent under the `options` key.
pub type Options = Map<String, Value>;

/// Capability shared by every parameter object.
pub trait Parameters: Serialize + DeserializeOwned {
    /// Wire names of the properties this kind understands.
    const PROPERTIES: &'static [&'static str];

    /// Check required fields and constraints.
    fn validate(&self) -> Result<(), RosetteError>;

    /// File content that must travel as a multipart body instead of JSON.
    fn multipart_content(&self) -> Option<&MultipartContent> {
        None
    }

    /// Install the result of a property update.
    ///
    /// Kinds holding state outside their serialized form override this to
    /// carry that state across.
    fn replace_properties(&mut self, updated: Self)
    where
        Self: Sized,
    {
        *self = updated;
    }

    /// Read a property by its wire name.
    ///
    /// Unknown names fail with `invalidPropertyName`; known but unset
    /// properties read as `null`.
    fn get(&self, name: &str) -> Result<Value, RosetteError> {
        if !Self::PROPERTIES.contains(&name) {
            return Err(RosetteError::validation(
                ErrorCode::InvalidPropertyName,
                format!("Property name not found: {name}"),
            ));
        }
        let value = serde_json::to_value(self)?;
        Ok(value.get(name).cloned().unwrap_or(Value::Null))
    }

    /// Write a property by its wire name.
    ///
    /// Unknown names are ignored. `null` clears an optional property; a value
    /// of the wrong shape fails with `invalidDataType`.
    fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), RosetteError>
    where
        Self: Sized,
    {
        if !Self::PROPERTIES.contains(&name) {
            return Ok(());
        }
        let mut current = serde_json::to_value(&*self)?;
        if let Value::Object(map) = &mut current {
            match value.into() {
                Value::Null => {
                    map.remove(name);
                }
                value => {
                    map.insert(name.to_string(), value);
                }
            }
        }
        let updated: Self = serde_json::from_value(current).map_err(|e| {
            RosetteError::validation(
                ErrorCode::InvalidDatatype,
                format!("Invalid value for property {name}: {e}"),
            )
        })?;
        self.replace_properties(updated);
        Ok(())
    }

    /// The serialized properties with unset entries removed.
    ///
    /// Kinds that carry caller data which must reach the service untouched
    /// override this.
    fn body_fields(&self) -> Result<Value, RosetteError> {
        Ok(prune_empty(serde_json::to_value(self)?).unwrap_or_else(|| Value::Object(Map::new())))
    }

    /// Validate, then build the request body.
    fn to_body(&self, options: &Options) -> Result<Value, RosetteError> {
        self.validate()?;
        let mut body = self.body_fields()?;
        if !options.is_empty()
            && let Value::Object(map) = &mut body
        {
            map.insert("options".to_string(), Value::Object(options.clone()));
        }
        Ok(body)
    }

    /// Validate, then encode the request body as JSON text.
    ///
    /// Non-ASCII characters are written as-is.
    fn to_json(&self, options: &Options) -> Result<String, RosetteError> {
        Ok(serde_json::to_string(&self.to_body(options)?)?)
    }
}

/// Recursively drop unset-like entries: `null`, empty strings, empty arrays
/// and empty objects. `false` and `0` are kept.
pub fn prune_empty(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::Array(items) => {
            let items: Vec<Value> = items.into_iter().filter_map(prune_empty).collect();
            (!items.is_empty()).then_some(Value::Array(items))
        }
        Value::Object(map) => {
            let map: Map<String, Value> = map
                .into_iter()
                .filter_map(|(k, v)| prune_empty(v).map(|v| (k, v)))
                .collect();
            (!map.is_empty()).then_some(Value::Object(map))
        }
        other => Some(other),
    }
}

/// Fail with `badRequestFormat` when a required text field is blank.
pub(crate) fn require_text(
    value: Option<&str>,
    kind: &str,
    field: &str,
) -> Result<(), RosetteError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(RosetteError::validation(
            ErrorCode::BadRequestFormat,
            format!("Required {kind} parameter not supplied: {field}"),
        )),
    }
}
