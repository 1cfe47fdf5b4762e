//! Core data models for the Pet Age Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod age_table;
mod conversion;
mod species;

pub use age_table::{AgeEntry, AgeTable, TableViolation};
pub use conversion::{
    AuditStep, AuditTrace, AuditWarning, ConversionMethod, ConversionRequest, ConversionResult,
};
pub use species::{LifeStage, Precision, Species};
