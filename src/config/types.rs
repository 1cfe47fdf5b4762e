//! Configuration types for age conversion.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the validated
//! [`EngineConfig`] built from them.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AgeEntry, AgeTable, Precision, Species};

/// Engine metadata from engine.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineMetadata {
    /// The human-readable name of the table set.
    pub name: String,
    /// The version of the table set.
    pub version: String,
    /// The largest pet age accepted in a request.
    pub max_pet_age: Decimal,
    /// Rounding used when a request does not specify one.
    #[serde(default)]
    pub default_precision: Precision,
}

/// A size category as written in a species file.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryConfig {
    /// Display name (e.g., "Medium").
    pub name: String,
    /// Weight range shown next to the name (e.g., "10-25kg").
    #[serde(default)]
    pub weight_range: Option<String>,
    /// Example breeds for this category.
    #[serde(default)]
    pub examples: Vec<String>,
    /// Raw breakpoints, validated into an [`AgeTable`] on load.
    pub table: Vec<AgeEntry>,
}

/// A species file from the tables directory.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesConfig {
    /// The species these tables apply to.
    pub species: Species,
    /// Pet age at which the species is considered senior.
    pub senior_age: Decimal,
    /// Category used when a request omits one.
    #[serde(default)]
    pub default_category: Option<String>,
    /// Map of category code to category details.
    pub categories: BTreeMap<String, CategoryConfig>,
}

/// A validated size category with its age table.
#[derive(Debug, Clone, Serialize)]
pub struct SizeCategory {
    /// Lowercase category code (e.g., "medium").
    pub code: String,
    /// Display name.
    pub name: String,
    /// Weight range, if the category has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_range: Option<String>,
    /// Example breeds.
    pub examples: Vec<String>,
    /// The validated age table.
    pub table: AgeTable,
}

/// All validated tables for one species.
#[derive(Debug, Clone, Serialize)]
pub struct SpeciesTables {
    /// The species.
    pub species: Species,
    /// Pet age at which the species is considered senior.
    pub senior_age: Decimal,
    /// Category used when a request omits one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_category: Option<String>,
    /// Categories keyed by lowercase code.
    pub categories: BTreeMap<String, SizeCategory>,
}

impl SpeciesTables {
    /// Validates a species file into tables.
    ///
    /// Category codes are lowercased and must stay unique afterwards. Every
    /// table is checked for ordering, and the default category (if any) must
    /// name a known category.
    pub fn from_config(config: SpeciesConfig) -> EngineResult<Self> {
        let species = config.species;
        let mut categories = BTreeMap::new();

        for (code, category) in config.categories {
            let code = code.trim().to_lowercase();
            if categories.contains_key(&code) {
                return Err(EngineError::ConfigParseError {
                    path: species.to_string(),
                    message: format!("category '{}' is defined more than once", code),
                });
            }

            let table = AgeTable::new(category.table).map_err(|violation| {
                EngineError::InvalidTable {
                    species: species.to_string(),
                    code: code.clone(),
                    message: violation.to_string(),
                }
            })?;

            categories.insert(
                code.clone(),
                SizeCategory {
                    code,
                    name: category.name,
                    weight_range: category.weight_range,
                    examples: category.examples,
                    table,
                },
            );
        }

        if categories.is_empty() {
            return Err(EngineError::ConfigParseError {
                path: species.to_string(),
                message: "species defines no categories".to_string(),
            });
        }

        let default_category = config.default_category.map(|code| code.trim().to_lowercase());
        if let Some(code) = &default_category {
            if !categories.contains_key(code) {
                return Err(EngineError::CategoryNotFound {
                    species: species.to_string(),
                    code: code.clone(),
                });
            }
        }

        Ok(Self {
            species,
            senior_age: config.senior_age,
            default_category,
            categories,
        })
    }

    /// Looks up a category by code, ignoring case and surrounding whitespace.
    pub fn category(&self, code: &str) -> Option<&SizeCategory> {
        self.categories.get(&code.trim().to_lowercase())
    }
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Engine metadata.
    metadata: EngineMetadata,
    /// Tables keyed by species.
    species: BTreeMap<Species, SpeciesTables>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from metadata and species files.
    ///
    /// Returns an error if any table is invalid or a species appears twice.
    pub fn new(metadata: EngineMetadata, species_configs: Vec<SpeciesConfig>) -> EngineResult<Self> {
        let mut species = BTreeMap::new();

        for config in species_configs {
            let tables = SpeciesTables::from_config(config)?;
            if species.contains_key(&tables.species) {
                return Err(EngineError::ConfigParseError {
                    path: tables.species.to_string(),
                    message: "species is defined more than once".to_string(),
                });
            }
            species.insert(tables.species, tables);
        }

        Ok(Self { metadata, species })
    }

    /// Returns the engine metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the tables for every configured species.
    pub fn species(&self) -> &BTreeMap<Species, SpeciesTables> {
        &self.species
    }
}
