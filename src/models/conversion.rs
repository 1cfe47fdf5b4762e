//! Conversion request and result models.
//!
//! This module contains the [`ConversionRequest`] handed to the engine and the
//! [`ConversionResult`] it produces, including the audit trace that records
//! how the human age was derived.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{LifeStage, Precision, Species};

/// A single age conversion to perform.
///
/// # Example
///
/// ```
/// use pet_age_engine::models::{ConversionRequest, Species};
/// use rust_decimal::Decimal;
///
/// let request = ConversionRequest {
///     species: Species::Dog,
///     category: Some("medium".to_string()),
///     pet_age: Decimal::from(6),
///     precision: None,
///     pet_name: Some("Biscuit".to_string()),
/// };
/// assert_eq!(request.species, Species::Dog);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// The species whose tables are used.
    pub species: Species,
    /// The size category code; falls back to the species default when absent.
    pub category: Option<String>,
    /// The pet's age in years. May be fractional.
    pub pet_age: Decimal,
    /// Requested rounding; the configured default is used when absent.
    pub precision: Option<Precision>,
    /// Optional pet name, echoed back in the result.
    pub pet_name: Option<String>,
}

/// How the human age was derived from the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionMethod {
    /// The pet age matched a table entry exactly.
    ExactMatch,
    /// The pet age fell between two entries.
    Interpolated,
    /// The pet age exceeded the last entry.
    Extrapolated,
    /// The pet age was below the first entry.
    BelowRange,
}

/// A single step in the audit trace recording a conversion decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during conversion.
///
/// Warnings flag results that are valid but less reliable, such as ages
/// projected past the end of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of conversion steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during conversion.
    pub warnings: Vec<AuditWarning>,
    /// The total conversion duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of an age conversion.
///
/// # Example
///
/// ```
/// use pet_age_engine::models::{
///     AuditTrace, ConversionMethod, ConversionResult, LifeStage, Precision, Species,
/// };
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = ConversionResult {
///     conversion_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     species: Species::Dog,
///     category: "medium".to_string(),
///     pet_name: None,
///     pet_age: Decimal::from(6),
///     human_age: Decimal::from(42),
///     precision: Precision::Whole,
///     method: ConversionMethod::ExactMatch,
///     life_stage: LifeStage::Adult,
///     audit_trace: AuditTrace {
///         steps: vec![],
///         warnings: vec![],
///         duration_us: 0,
///     },
/// };
/// assert_eq!(result.human_age, Decimal::from(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Unique identifier for this conversion.
    pub conversion_id: Uuid,
    /// When the conversion was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the conversion.
    pub engine_version: String,
    /// The species converted.
    pub species: Species,
    /// The resolved category code.
    pub category: String,
    /// The pet's name, if one was supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_name: Option<String>,
    /// The pet age that was converted.
    pub pet_age: Decimal,
    /// The equivalent human age.
    pub human_age: Decimal,
    /// The precision the human age was rounded to.
    pub precision: Precision,
    /// How the human age was derived.
    pub method: ConversionMethod,
    /// The pet's life stage.
    pub life_stage: LifeStage,
    /// Complete audit trace of conversion decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_result() -> ConversionResult {
        ConversionResult {
            conversion_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            species: Species::Dog,
            category: "medium".to_string(),
            pet_name: None,
            pet_age: dec("4.5"),
            human_age: dec("34"),
            precision: Precision::Whole,
            method: ConversionMethod::Interpolated,
            life_stage: LifeStage::Adult,
            audit_trace: AuditTrace {
                steps: vec![],
                warnings: vec![],
                duration_us: 12,
            },
        }
    }

    #[test]
    fn test_conversion_method_serialization() {
        let json = serde_json::to_string(&ConversionMethod::ExactMatch).unwrap();
        assert_eq!(json, "\"exact_match\"");

        let method: ConversionMethod = serde_json::from_str("\"below_range\"").unwrap();
        assert_eq!(method, ConversionMethod::BelowRange);
    }

    #[test]
    fn test_result_serializes_decimals_as_strings() {
        let json = serde_json::to_string(&sample_result()).unwrap();
        assert!(json.contains("\"pet_age\":\"4.5\""));
        assert!(json.contains("\"human_age\":\"34\""));
        assert!(json.contains("\"method\":\"interpolated\""));
        assert!(json.contains("\"life_stage\":\"adult\""));
    }

    #[test]
    fn test_result_omits_missing_pet_name() {
        let json = serde_json::to_string(&sample_result()).unwrap();
        assert!(!json.contains("pet_name"));

        let mut named = sample_result();
        named.pet_name = Some("Biscuit".to_string());
        let json = serde_json::to_string(&named).unwrap();
        assert!(json.contains("\"pet_name\":\"Biscuit\""));
    }

    #[test]
    fn test_result_round_trips_through_json() {
        let result = sample_result();
        let json = serde_json::to_string(&result).unwrap();
        let parsed: ConversionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_request_accepts_numeric_and_string_ages() {
        let from_number: ConversionRequest = serde_json::from_str(
            r#"{"species":"dog","category":"medium","pet_age":4.5,"precision":null,"pet_name":null}"#,
        )
        .unwrap();
        let from_string: ConversionRequest = serde_json::from_str(
            r#"{"species":"dog","category":"medium","pet_age":"4.5","precision":null,"pet_name":null}"#,
        )
        .unwrap();
        assert_eq!(from_number.pet_age, dec("4.5"));
        assert_eq!(from_string.pet_age, dec("4.5"));
    }
}
