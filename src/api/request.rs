//! Request types for the Pet Age Engine API.
//!
//! This module defines the JSON request structures for the `/convert` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ConversionRequest, Precision, Species};

/// Request body for the `/convert` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertRequest {
    /// The species of the pet.
    pub species: Species,
    /// The size category code (e.g., "medium"). Optional for species with a default.
    #[serde(default)]
    pub category: Option<String>,
    /// The pet's age in years. Accepts a JSON number or a decimal string.
    pub pet_age: Decimal,
    /// Rounding for the human age; the configured default applies when absent.
    #[serde(default)]
    pub precision: Option<Precision>,
    /// The pet's name, echoed back in the response.
    #[serde(default)]
    pub pet_name: Option<String>,
}

impl From<ConvertRequest> for ConversionRequest {
    fn from(req: ConvertRequest) -> Self {
        ConversionRequest {
            species: req.species,
            category: req.category,
            pet_age: req.pet_age,
            precision: req.precision,
            pet_name: req
                .pet_name
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_convert_request() {
        let json = r#"{
            "species": "dog",
            "category": "medium",
            "pet_age": 4.5,
            "precision": "tenth",
            "pet_name": "Biscuit"
        }"#;

        let request: ConvertRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.species, Species::Dog);
        assert_eq!(request.category.as_deref(), Some("medium"));
        assert_eq!(request.pet_age, Decimal::from_str("4.5").unwrap());
        assert_eq!(request.precision, Some(Precision::Tenth));
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let request: ConvertRequest =
            serde_json::from_str(r#"{"species": "cat", "pet_age": "3"}"#).unwrap();
        assert_eq!(request.species, Species::Cat);
        assert!(request.category.is_none());
        assert!(request.precision.is_none());
        assert!(request.pet_name.is_none());
    }

    #[test]
    fn test_unknown_species_fails_to_deserialize() {
        let result: Result<ConvertRequest, _> =
            serde_json::from_str(r#"{"species": "ferret", "pet_age": 3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_pet_name_is_dropped() {
        let request = ConvertRequest {
            species: Species::Dog,
            category: Some("small".to_string()),
            pet_age: Decimal::from(2),
            precision: None,
            pet_name: Some("   ".to_string()),
        };
        let conversion: ConversionRequest = request.into();
        assert!(conversion.pet_name.is_none());
    }
}
