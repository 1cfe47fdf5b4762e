//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading age tables
//! from YAML files, or from the copy embedded in the binary.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{AgeTable, Precision, Species};

use super::types::{EngineConfig, EngineMetadata, SizeCategory, SpeciesConfig, SpeciesTables};

const BUILTIN_ENGINE: &str = include_str!("../../config/age_tables/engine.yaml");
const BUILTIN_DOG: &str = include_str!("../../config/age_tables/tables/dog.yaml");
const BUILTIN_CAT: &str = include_str!("../../config/age_tables/tables/cat.yaml");

/// Loads and provides access to age table configuration.
///
/// # Directory Structure
///
/// ```text
/// config/age_tables/
/// ├── engine.yaml        # Name, version, max pet age, default precision
/// └── tables/
///     ├── dog.yaml       # One file per species
///     └── cat.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use pet_age_engine::config::ConfigLoader;
/// use pet_age_engine::models::Species;
///
/// let loader = ConfigLoader::load("./config/age_tables").unwrap();
/// let table = loader.get_table(Species::Dog, "medium").unwrap();
/// println!("Medium dog table has {} entries", table.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - engine.yaml or the tables directory is missing
    /// - the tables directory contains no YAML files
    /// - any file contains invalid YAML
    /// - any age table is malformed
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pet_age_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/age_tables")?;
    /// # Ok::<(), pet_age_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<EngineMetadata>(&path.join("engine.yaml"))?;
        let species = Self::load_species(&path.join("tables"))?;

        let config = EngineConfig::new(metadata, species)?;
        debug!(
            path = %path.display(),
            species_count = config.species().len(),
            "Loaded age table configuration"
        );

        Ok(Self { config })
    }

    /// Builds the configuration from the tables compiled into the crate.
    ///
    /// # Example
    ///
    /// ```
    /// use pet_age_engine::config::ConfigLoader;
    /// use pet_age_engine::models::Species;
    ///
    /// let loader = ConfigLoader::builtin().unwrap();
    /// assert!(loader.get_table(Species::Cat, "standard").is_ok());
    /// ```
    pub fn builtin() -> EngineResult<Self> {
        let metadata = Self::parse_yaml::<EngineMetadata>(BUILTIN_ENGINE, "builtin:engine.yaml")?;
        let species = vec![
            Self::parse_yaml::<SpeciesConfig>(BUILTIN_DOG, "builtin:tables/dog.yaml")?,
            Self::parse_yaml::<SpeciesConfig>(BUILTIN_CAT, "builtin:tables/cat.yaml")?,
        ];

        Ok(Self {
            config: EngineConfig::new(metadata, species)?,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_yaml(&content, &path_str)
    }

    fn parse_yaml<T: serde::de::DeserializeOwned>(content: &str, source: &str) -> EngineResult<T> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: source.to_string(),
            message: e.to_string(),
        })
    }

    /// Loads every species file from the tables directory.
    fn load_species(tables_dir: &Path) -> EngineResult<Vec<SpeciesConfig>> {
        let tables_dir_str = tables_dir.display().to_string();

        if !tables_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: tables_dir_str,
            });
        }

        let entries = fs::read_dir(tables_dir).map_err(|_| EngineError::ConfigNotFound {
            path: tables_dir_str.clone(),
        })?;

        let mut species = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: tables_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                species.push(Self::load_yaml::<SpeciesConfig>(&path)?);
            }
        }

        if species.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no table files found)", tables_dir_str),
            });
        }

        Ok(species)
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the engine metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        self.config.metadata()
    }

    /// Returns the largest pet age accepted in a request.
    pub fn max_pet_age(&self) -> Decimal {
        self.config.metadata().max_pet_age
    }

    /// Returns the precision used when a request does not specify one.
    pub fn default_precision(&self) -> Precision {
        self.config.metadata().default_precision
    }

    /// Returns the tables for all configured species, ordered by species.
    pub fn species(&self) -> impl Iterator<Item = &SpeciesTables> {
        self.config.species().values()
    }

    /// Gets the tables for one species.
    pub fn get_species(&self, species: Species) -> EngineResult<&SpeciesTables> {
        self.config
            .species()
            .get(&species)
            .ok_or_else(|| EngineError::SpeciesNotFound {
                species: species.to_string(),
            })
    }

    /// Resolves the category a request refers to.
    ///
    /// A missing or blank code falls back to the species default. Lookups
    /// ignore case, so `"Medium"` and `"medium"` are the same category.
    ///
    /// # Example
    ///
    /// ```
    /// use pet_age_engine::config::ConfigLoader;
    /// use pet_age_engine::models::Species;
    ///
    /// let loader = ConfigLoader::builtin()?;
    /// assert_eq!(loader.resolve_category(Species::Dog, Some("Large"))?.code, "large");
    /// assert_eq!(loader.resolve_category(Species::Cat, None)?.code, "standard");
    /// assert!(loader.resolve_category(Species::Dog, None).is_err());
    /// # Ok::<(), pet_age_engine::error::EngineError>(())
    /// ```
    pub fn resolve_category(
        &self,
        species: Species,
        code: Option<&str>,
    ) -> EngineResult<&SizeCategory> {
        let tables = self.get_species(species)?;

        let code = match code.map(str::trim).filter(|c| !c.is_empty()) {
            Some(code) => code,
            None => tables
                .default_category
                .as_deref()
                .ok_or_else(|| EngineError::CategoryRequired {
                    species: species.to_string(),
                })?,
        };

        tables
            .category(code)
            .ok_or_else(|| EngineError::CategoryNotFound {
                species: species.to_string(),
                code: code.to_string(),
            })
    }

    /// Gets the age table for a species and category code.
    pub fn get_table(&self, species: Species, code: &str) -> EngineResult<&AgeTable> {
        self.resolve_category(species, Some(code))
            .map(|category| &category.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/age_tables"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.metadata().name, "Pet Age Engine");
        assert_eq!(loader.max_pet_age(), Decimal::from(30));
        assert_eq!(loader.default_precision(), Precision::Whole);
    }

    #[test]
    fn test_builtin_matches_files_on_disk() {
        let from_disk = ConfigLoader::load(config_path()).unwrap();
        let builtin = ConfigLoader::builtin().unwrap();

        for species in [Species::Dog, Species::Cat] {
            let disk_tables = from_disk.get_species(species).unwrap();
            let builtin_tables = builtin.get_species(species).unwrap();
            assert_eq!(
                disk_tables.categories.keys().collect::<Vec<_>>(),
                builtin_tables.categories.keys().collect::<Vec<_>>()
            );
            for (code, category) in &disk_tables.categories {
                assert_eq!(category.table, builtin_tables.categories[code].table);
            }
        }
    }

    #[test]
    fn test_dog_has_four_size_categories() {
        let loader = ConfigLoader::builtin().unwrap();
        let dog = loader.get_species(Species::Dog).unwrap();
        let codes: Vec<&str> = dog.categories.keys().map(String::as_str).collect();
        assert_eq!(codes, vec!["giant", "large", "medium", "small"]);
        assert!(dog.default_category.is_none());
    }

    #[test]
    fn test_medium_dog_table_values() {
        let loader = ConfigLoader::builtin().unwrap();
        let table = loader.get_table(Species::Dog, "medium").unwrap();
        assert_eq!(table.len(), 17);
        assert_eq!(table.entries()[6].human_age, 42);
        assert_eq!(table.last().human_age, 87);
    }

    #[test]
    fn test_category_lookup_is_case_insensitive() {
        let loader = ConfigLoader::builtin().unwrap();
        let category = loader.resolve_category(Species::Dog, Some("GIANT")).unwrap();
        assert_eq!(category.code, "giant");
        assert_eq!(category.name, "Giant");
        assert_eq!(category.weight_range.as_deref(), Some("45kg+"));
    }

    #[test]
    fn test_unknown_category_returns_error() {
        let loader = ConfigLoader::builtin().unwrap();
        match loader.get_table(Species::Dog, "tiny") {
            Err(EngineError::CategoryNotFound { species, code }) => {
                assert_eq!(species, "dog");
                assert_eq!(code, "tiny");
            }
            other => panic!("Expected CategoryNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_dog_category_is_required() {
        let loader = ConfigLoader::builtin().unwrap();
        for code in [None, Some(""), Some("   ")] {
            match loader.resolve_category(Species::Dog, code) {
                Err(EngineError::CategoryRequired { species }) => assert_eq!(species, "dog"),
                other => panic!("Expected CategoryRequired error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_cat_uses_default_category() {
        let loader = ConfigLoader::builtin().unwrap();
        let category = loader.resolve_category(Species::Cat, None).unwrap();
        assert_eq!(category.code, "standard");
        assert_eq!(category.table.last().pet_age, 20);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("engine.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}
