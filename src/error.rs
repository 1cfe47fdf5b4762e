//! Error types for the Pet Age Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading age tables and
//! converting ages.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Pet Age Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use pet_age_engine::error::EngineError;
///
/// let error = EngineError::CategoryNotFound {
///     species: "dog".to_string(),
///     code: "tiny".to_string(),
/// };
/// assert_eq!(error.to_string(), "Category 'tiny' not found for species 'dog'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No age tables are configured for the species.
    #[error("Species not found: {species}")]
    SpeciesNotFound {
        /// The species that was requested.
        species: String,
    },

    /// The category code is not one of the species' known tables.
    #[error("Category '{code}' not found for species '{species}'")]
    CategoryNotFound {
        /// The species the lookup was made against.
        species: String,
        /// The category code that was not found.
        code: String,
    },

    /// No category was given and the species has no default category.
    #[error("A size category is required for species '{species}'")]
    CategoryRequired {
        /// The species that needs an explicit category.
        species: String,
    },

    /// An age table violates its ordering or length requirements.
    #[error("Invalid age table '{species}/{code}': {message}")]
    InvalidTable {
        /// The species the table belongs to.
        species: String,
        /// The category code of the table.
        code: String,
        /// A description of what made the table invalid.
        message: String,
    },

    /// The requested pet age is outside the accepted range.
    #[error("Invalid pet age {age}: {message}")]
    InvalidAge {
        /// The rejected age.
        age: Decimal,
        /// A description of why the age was rejected.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
