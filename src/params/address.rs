//! Postal address representations.
//!
//! An address is either fielded (structured components) or unfielded (free
//! text). Both serialize to the JSON shape the service expects; the server
//! infers which one it received from the fields present.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Parameters;
use crate::error::{ErrorCode, RosetteError};

/// Capability shared by both address representations.
pub trait Address: Parameters {
    /// Whether this is the structured representation.
    fn fielded(&self) -> bool;
}

/// Wire names of the fielded address components.
pub const ADDRESS_FIELDS: &[&str] = &[
    "house",
    "houseNumber",
    "road",
    "unit",
    "level",
    "staircase",
    "entrance",
    "suburb",
    "cityDistrict",
    "city",
    "island",
    "stateDistrict",
    "state",
    "countryRegion",
    "country",
    "worldRegion",
    "postCode",
    "poBox",
];

/// Structured address. At least one component must be present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldedAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub road: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staircase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suburb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub island: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub po_box: Option<String>,
}

impl FieldedAddress {
    pub fn builder() -> FieldedAddressBuilder {
        FieldedAddressBuilder::default()
    }

    fn components(&self) -> [Option<&str>; 18] {
        [
            self.house.as_deref(),
            self.house_number.as_deref(),
            self.road.as_deref(),
            self.unit.as_deref(),
            self.level.as_deref(),
            self.staircase.as_deref(),
            self.entrance.as_deref(),
            self.suburb.as_deref(),
            self.city_district.as_deref(),
            self.city.as_deref(),
            self.island.as_deref(),
            self.state_district.as_deref(),
            self.state.as_deref(),
            self.country_region.as_deref(),
            self.country.as_deref(),
            self.world_region.as_deref(),
            self.post_code.as_deref(),
            self.po_box.as_deref(),
        ]
    }

    /// True when no component has a value.
    pub fn is_empty(&self) -> bool {
        self.components().iter().all(|c| c.is_none_or(str::is_empty))
    }
}

impl Parameters for FieldedAddress {
    const PROPERTIES: &'static [&'static str] = ADDRESS_FIELDS;

    fn validate(&self) -> Result<(), RosetteError> {
        if self.is_empty() {
            return Err(RosetteError::validation(
                ErrorCode::BadRequestFormat,
                "At least one address field is required",
            ));
        }
        Ok(())
    }
}

impl Address for FieldedAddress {
    fn fielded(&self) -> bool {
        true
    }
}

macro_rules! address_setters {
    ($($(#[$doc:meta])* $field:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $field(mut self, value: impl Into<String>) -> Self {
                self.address.$field = Some(value.into());
                self
            }
        )*
    };
}

/// Builder for [`FieldedAddress`]; `build` fails when every component is absent.
#[derive(Debug, Clone, Default)]
pub struct FieldedAddressBuilder {
    address: FieldedAddress,
}

impl FieldedAddressBuilder {
    address_setters!(
        house,
        house_number,
        road,
        unit,
        level,
        staircase,
        entrance,
        suburb,
        city_district,
        city,
        island,
        state_district,
        state,
        country_region,
        country,
        world_region,
        post_code,
        /// P.O. Box
        po_box,
    );

    pub fn build(self) -> Result<FieldedAddress, RosetteError> {
        self.address.validate()?;
        Ok(self.address)
    }
}

/// Free-text address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnfieldedAddress {
    pub address: String,
}

impl UnfieldedAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

impl Parameters for UnfieldedAddress {
    const PROPERTIES: &'static [&'static str] = &["address"];

    fn validate(&self) -> Result<(), RosetteError> {
        if self.address.is_empty() {
            return Err(RosetteError::validation(
                ErrorCode::BadRequestFormat,
                "The address text is required",
            ));
        }
        Ok(())
    }
}

impl Address for UnfieldedAddress {
    fn fielded(&self) -> bool {
        false
    }
}

/// Either address representation, usable wherever an address is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnyAddress {
    Unfielded(UnfieldedAddress),
    Fielded(FieldedAddress),
}

impl Parameters for AnyAddress {
    const PROPERTIES: &'static [&'static str] = &[
        "address",
        "house",
        "houseNumber",
        "road",
        "unit",
        "level",
        "staircase",
        "entrance",
        "suburb",
        "cityDistrict",
        "city",
        "island",
        "stateDistrict",
        "state",
        "countryRegion",
        "country",
        "worldRegion",
        "postCode",
        "poBox",
    ];

    fn validate(&self) -> Result<(), RosetteError> {
        match self {
            Self::Unfielded(a) => a.validate(),
            Self::Fielded(a) => a.validate(),
        }
    }

    /// Writes go to the current representation. A component that only the
    /// other representation has fails with `invalidDataType`.
    fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), RosetteError> {
        let value = value.into();
        let (foreign, shape) = match self {
            Self::Unfielded(_) => (ADDRESS_FIELDS.contains(&name), "an unfielded"),
            Self::Fielded(_) => (name == "address", "a fielded"),
        };
        if foreign && !value.is_null() {
            return Err(RosetteError::validation(
                ErrorCode::InvalidDatatype,
                format!("Property {name} does not apply to {shape} address"),
            ));
        }
        match self {
            Self::Unfielded(a) => a.set(name, value),
            Self::Fielded(a) => a.set(name, value),
        }
    }
}

impl Address for AnyAddress {
    fn fielded(&self) -> bool {
        matches!(self, Self::Fielded(_))
    }
}

impl From<FieldedAddress> for AnyAddress {
    fn from(address: FieldedAddress) -> Self {
        Self::Fielded(address)
    }
}

impl From<UnfieldedAddress> for AnyAddress {
    fn from(address: UnfieldedAddress) -> Self {
        Self::Unfielded(address)
    }
}
