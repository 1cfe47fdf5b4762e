//! End-to-end age conversion.
//!
//! This module validates a [`ConversionRequest`], selects the age table,
//! converts the age, classifies the life stage, and records every step in
//! an audit trace.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AgeTable, AuditStep, AuditTrace, AuditWarning, ConversionMethod, ConversionRequest,
    ConversionResult,
};

use super::interpolation::convert_age;
use super::life_stage::classify_life_stage;

/// Rejects ages that are negative or above `max_pet_age`.
///
/// # Examples
///
/// ```
/// use pet_age_engine::calculation::validate_pet_age;
/// use rust_decimal::Decimal;
///
/// let max = Decimal::from(30);
/// assert!(validate_pet_age(Decimal::from(12), max).is_ok());
/// assert!(validate_pet_age(Decimal::from(-1), max).is_err());
/// assert!(validate_pet_age(Decimal::from(31), max).is_err());
/// ```
pub fn validate_pet_age(age: Decimal, max_pet_age: Decimal) -> EngineResult<()> {
    if age.is_sign_negative() && !age.is_zero() {
        return Err(EngineError::InvalidAge {
            age,
            message: "age cannot be negative".to_string(),
        });
    }

    if age > max_pet_age {
        return Err(EngineError::InvalidAge {
            age,
            message: format!("age cannot exceed {} years", max_pet_age.normalize()),
        });
    }

    Ok(())
}

/// Performs a full conversion against the loaded configuration.
///
/// # Errors
///
/// - [`EngineError::InvalidAge`] when the age is negative or too large
/// - [`EngineError::SpeciesNotFound`] when no tables exist for the species
/// - [`EngineError::CategoryRequired`] when no category is given and the
///   species has no default
/// - [`EngineError::CategoryNotFound`] when the category code is unknown
/// - [`EngineError::CalculationError`] when extrapolation overflows
///
/// # Example
///
/// ```
/// use pet_age_engine::calculation::perform_conversion;
/// use pet_age_engine::config::ConfigLoader;
/// use pet_age_engine::models::{ConversionMethod, ConversionRequest, Species};
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::builtin()?;
/// let request = ConversionRequest {
///     species: Species::Dog,
///     category: Some("medium".to_string()),
///     pet_age: Decimal::from(20),
///     precision: None,
///     pet_name: None,
/// };
///
/// let result = perform_conversion(&request, &config)?;
/// assert_eq!(result.human_age, Decimal::from(103));
/// assert_eq!(result.method, ConversionMethod::Extrapolated);
/// # Ok::<(), pet_age_engine::error::EngineError>(())
/// ```
pub fn perform_conversion(
    request: &ConversionRequest,
    config: &ConfigLoader,
) -> EngineResult<ConversionResult> {
    let start_time = Instant::now();
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();

    let max_pet_age = config.max_pet_age();
    validate_pet_age(request.pet_age, max_pet_age)?;
    steps.push(AuditStep {
        step_number: 1,
        rule_id: "age_validation".to_string(),
        rule_name: "Pet Age Validation".to_string(),
        input: serde_json::json!({
            "pet_age": request.pet_age.normalize().to_string(),
            "max_pet_age": max_pet_age.normalize().to_string()
        }),
        output: serde_json::json!({ "valid": true }),
        reasoning: format!(
            "{} years is within the accepted range 0-{}",
            request.pet_age.normalize(),
            max_pet_age.normalize()
        ),
    });

    let species_tables = config.get_species(request.species)?;
    let category = config.resolve_category(request.species, request.category.as_deref())?;
    let table = &category.table;
    steps.push(AuditStep {
        step_number: 2,
        rule_id: "table_selection".to_string(),
        rule_name: "Age Table Selection".to_string(),
        input: serde_json::json!({
            "species": request.species,
            "category": request.category
        }),
        output: serde_json::json!({
            "category": category.code,
            "entries": table.len(),
            "max_table_age": table.last().pet_age
        }),
        reasoning: match request.category.as_deref().map(str::trim) {
            Some(code) if !code.is_empty() => format!(
                "Selected {} table for category '{}'",
                request.species, category.code
            ),
            _ => format!(
                "No category given, using {} default '{}'",
                request.species, category.code
            ),
        },
    });

    let precision = request.precision.unwrap_or_else(|| config.default_precision());
    let conversion = convert_age(table, request.pet_age, precision)?;
    steps.push(AuditStep {
        step_number: 3,
        rule_id: "age_conversion".to_string(),
        rule_name: "Age Table Conversion".to_string(),
        input: serde_json::json!({
            "pet_age": request.pet_age.normalize().to_string(),
            "precision": precision
        }),
        output: serde_json::json!({
            "human_age": conversion.human_age.normalize().to_string(),
            "method": conversion.method
        }),
        reasoning: conversion_reasoning(request.pet_age, conversion.method, table),
    });

    if conversion.method == ConversionMethod::Extrapolated {
        warnings.push(AuditWarning {
            code: "EXTRAPOLATED".to_string(),
            message: format!(
                "Age {} is beyond the table maximum of {}; result is a linear projection",
                request.pet_age.normalize(),
                table.last().pet_age
            ),
            severity: "low".to_string(),
        });
    }

    let life_stage = classify_life_stage(request.pet_age, species_tables.senior_age);
    steps.push(AuditStep {
        step_number: 4,
        rule_id: "life_stage".to_string(),
        rule_name: "Life Stage Classification".to_string(),
        input: serde_json::json!({
            "pet_age": request.pet_age.normalize().to_string(),
            "senior_age": species_tables.senior_age.normalize().to_string()
        }),
        output: serde_json::json!({ "life_stage": life_stage }),
        reasoning: format!(
            "{} years with senior age {} is {:?}",
            request.pet_age.normalize(),
            species_tables.senior_age.normalize(),
            life_stage
        ),
    });

    let duration_us = start_time.elapsed().as_micros() as u64;
    debug!(
        species = %request.species,
        category = %category.code,
        pet_age = %request.pet_age,
        human_age = %conversion.human_age,
        duration_us,
        "Age conversion completed"
    );

    Ok(ConversionResult {
        conversion_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        species: request.species,
        category: category.code.clone(),
        pet_name: request.pet_name.clone(),
        pet_age: request.pet_age,
        human_age: conversion.human_age,
        precision,
        method: conversion.method,
        life_stage,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}

fn conversion_reasoning(age: Decimal, method: ConversionMethod, table: &AgeTable) -> String {
    let age = age.normalize();
    match method {
        ConversionMethod::ExactMatch => format!("{} matches a table entry exactly", age),
        ConversionMethod::Interpolated => {
            format!("{} lies between two table entries; linearly interpolated", age)
        }
        ConversionMethod::Extrapolated => format!(
            "{} exceeds the last entry ({}); extrapolated at {} human years per year",
            age,
            table.last().pet_age,
            table.tail_slope().normalize()
        ),
        ConversionMethod::BelowRange => format!(
            "{} is below the first entry ({}); using its human age",
            age,
            table.first().pet_age
        ),
    }
}
