//! Species, precision and life stage types.
//!
//! This module defines the small enumerations that select an age table and
//! shape the output of a conversion.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// The animal species an age table applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    /// Dogs, with one table per size category.
    Dog,
    /// Cats, with a single standard table.
    Cat,
}

impl Species {
    /// Returns the lowercase identifier used in configuration and the API.
    ///
    /// # Examples
    ///
    /// ```
    /// use pet_age_engine::models::Species;
    ///
    /// assert_eq!(Species::Dog.as_str(), "dog");
    /// assert_eq!(Species::Cat.as_str(), "cat");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The precision a human age is rounded to.
///
/// Midpoints round away from zero, so `34.5` becomes `35` at
/// [`Precision::Whole`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// Round to the nearest whole year.
    #[default]
    Whole,
    /// Round to the nearest tenth of a year.
    Tenth,
}

impl Precision {
    /// Returns the number of decimal places kept by this precision.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Precision::Whole => 0,
            Precision::Tenth => 1,
        }
    }

    /// Rounds a value to this precision.
    ///
    /// # Examples
    ///
    /// ```
    /// use pet_age_engine::models::Precision;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let value = Decimal::from_str("34.45").unwrap();
    /// assert_eq!(Precision::Whole.apply(value), Decimal::from(34));
    /// assert_eq!(Precision::Tenth.apply(value), Decimal::from_str("34.5").unwrap());
    /// ```
    pub fn apply(&self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(self.decimal_places(), RoundingStrategy::MidpointAwayFromZero)
    }
}

/// A coarse life stage derived from the pet's own age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeStage {
    /// Under one year old (puppy or kitten).
    Young,
    /// From one year up to the species' senior age.
    Adult,
    /// At or past the species' senior age.
    Senior,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_species_serialization() {
        assert_eq!(serde_json::to_string(&Species::Dog).unwrap(), "\"dog\"");
        let species: Species = serde_json::from_str("\"cat\"").unwrap();
        assert_eq!(species, Species::Cat);
    }

    #[test]
    fn test_species_display_matches_as_str() {
        assert_eq!(Species::Dog.to_string(), "dog");
        assert_eq!(Species::Cat.to_string(), "cat");
    }

    #[test]
    fn test_precision_defaults_to_whole() {
        assert_eq!(Precision::default(), Precision::Whole);
    }

    #[test]
    fn test_whole_precision_rounds_midpoint_up() {
        assert_eq!(Precision::Whole.apply(dec("34.5")), dec("35"));
        assert_eq!(Precision::Whole.apply(dec("34.49")), dec("34"));
    }

    #[test]
    fn test_tenth_precision_keeps_one_decimal() {
        assert_eq!(Precision::Tenth.apply(dec("33.333")), dec("33.3"));
        assert_eq!(Precision::Tenth.apply(dec("33.35")), dec("33.4"));
    }

    #[test]
    fn test_precision_serialization() {
        assert_eq!(serde_json::to_string(&Precision::Tenth).unwrap(), "\"tenth\"");
        let precision: Precision = serde_json::from_str("\"whole\"").unwrap();
        assert_eq!(precision, Precision::Whole);
    }

    #[test]
    fn test_life_stage_serialization() {
        assert_eq!(serde_json::to_string(&LifeStage::Senior).unwrap(), "\"senior\"");
    }
}
