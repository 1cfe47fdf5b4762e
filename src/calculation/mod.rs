//! Calculation logic for the Pet Age Engine.
//!
//! This module contains the table interpolation that maps a pet age to a
//! human age, life stage classification, and the end-to-end conversion that
//! ties them together with request validation and an audit trace.

mod conversion;
mod interpolation;
mod life_stage;

pub use conversion::{perform_conversion, validate_pet_age};
pub use interpolation::{AgeConversion, convert_age};
pub use life_stage::{ADULT_AGE, classify_life_stage};
