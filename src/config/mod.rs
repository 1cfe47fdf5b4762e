//! Configuration loading and management for the Pet Age Engine.
//!
//! This module loads the engine metadata and the per-species age tables
//! from YAML files. The same files are embedded in the crate and available
//! through [`ConfigLoader::builtin`].
//!
//! # Example
//!
//! ```no_run
//! use pet_age_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/age_tables").unwrap();
//! println!("Loaded tables: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CategoryConfig, EngineConfig, EngineMetadata, SizeCategory, SpeciesConfig, SpeciesTables,
};
