//! Parameters for the address similarity operation.

use serde::{Deserialize, Serialize};

use super::{AnyAddress, Parameters};
use crate::error::RosetteError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressSimilarityParameters {
    pub address1: AnyAddress,
    pub address2: AnyAddress,
}

impl AddressSimilarityParameters {
    /// Either address may be fielded or unfielded.
    pub fn new(address1: impl Into<AnyAddress>, address2: impl Into<AnyAddress>) -> Self {
        Self {
            address1: address1.into(),
            address2: address2.into(),
        }
    }
}

impl Parameters for AddressSimilarityParameters {
    const PROPERTIES: &'static [&'static str] = &["address1", "address2"];

    fn validate(&self) -> Result<(), RosetteError> {
        self.address1.validate()?;
        self.address2.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Address, FieldedAddress, Options, UnfieldedAddress};
    use serde_json::json;

    #[test]
    fn mixes_fielded_and_unfielded() {
        let fielded = FieldedAddress::builder()
            .house_number("1600")
            .road("Pennsylvania Ave NW")
            .city("Washington")
            .build()
            .unwrap();
        let params = AddressSimilarityParameters::new(
            fielded,
            UnfieldedAddress::new("160 Pennsilvana Avenue, Washington, D.C."),
        );
        assert!(params.address1.fielded());
        assert!(!params.address2.fielded());
        assert_eq!(
            params.to_body(&Options::new()).unwrap(),
            json!({
                "address1": {
                    "houseNumber": "1600",
                    "road": "Pennsylvania Ave NW",
                    "city": "Washington"
                },
                "address2": {"address": "160 Pennsilvana Avenue, Washington, D.C."}
            })
        );
    }

    #[test]
    fn empty_address_fails_validation() {
        let params = AddressSimilarityParameters::new(
            UnfieldedAddress::new("1 Main St"),
            FieldedAddress::default(),
        );
        let err = params.validate().unwrap_err();
        assert_eq!(err.code(), "badRequestFormat");
    }

    #[test]
    fn json_round_trip_preserves_both_shapes() {
        let fielded = FieldedAddress::builder()
            .house_number("1600")
            .road("Pennsylvania Ave NW")
            .post_code("20500")
            .build()
            .unwrap();
        let unfielded = UnfieldedAddress::new("160 Pennsilvana Avenue, Washington, D.C.");
        for params in [
            AddressSimilarityParameters::new(fielded.clone(), unfielded.clone()),
            AddressSimilarityParameters::new(unfielded, fielded),
        ] {
            let json = params.to_json(&Options::new()).unwrap();
            let decoded: AddressSimilarityParameters = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, params);
            assert_eq!(decoded.address1.fielded(), params.address1.fielded());
        }
    }
}
