//! Table interpolation for age conversion.
//!
//! This module maps a pet age onto a human age using piecewise-linear
//! interpolation between table breakpoints, and linear extrapolation along
//! the final segment for ages past the end of the table.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AgeTable, ConversionMethod, Precision};

/// The outcome of converting one age against one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeConversion {
    /// The human-equivalent age.
    pub human_age: Decimal,
    /// How the value was derived.
    pub method: ConversionMethod,
}

/// Converts a pet age into a human age using the given table.
///
/// The rules are applied in order:
/// 1. An exact breakpoint match returns that entry's human age unrounded.
/// 2. An age strictly between two breakpoints is linearly interpolated.
/// 3. An age past the last breakpoint is extrapolated with the slope of the
///    final segment.
/// 4. An age below the first breakpoint returns the first entry's human age.
///
/// Interpolated and extrapolated values are rounded to `precision`.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] when extrapolating an age so
/// large that the human age no longer fits in a [`Decimal`].
///
/// # Examples
///
/// ```
/// use pet_age_engine::calculation::convert_age;
/// use pet_age_engine::models::{AgeEntry, AgeTable, ConversionMethod, Precision};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = AgeTable::new(vec![
///     AgeEntry { pet_age: 4, human_age: 32 },
///     AgeEntry { pet_age: 5, human_age: 36 },
/// ]).unwrap();
///
/// let result = convert_age(&table, Decimal::from_str("4.5").unwrap(), Precision::Whole).unwrap();
/// assert_eq!(result.human_age, Decimal::from(34));
/// assert_eq!(result.method, ConversionMethod::Interpolated);
///
/// // Past the end: 36 + 4 * (7 - 5) = 44
/// let result = convert_age(&table, Decimal::from(7), Precision::Whole).unwrap();
/// assert_eq!(result.human_age, Decimal::from(44));
/// assert_eq!(result.method, ConversionMethod::Extrapolated);
/// ```
pub fn convert_age(
    table: &AgeTable,
    age: Decimal,
    precision: Precision,
) -> EngineResult<AgeConversion> {
    if let Some(entry) = table.find_exact(age) {
        return Ok(AgeConversion {
            human_age: entry.human(),
            method: ConversionMethod::ExactMatch,
        });
    }

    let last = table.last();
    if age > last.pet() {
        let projected = age
            .checked_sub(last.pet())
            .and_then(|years| table.tail_slope().checked_mul(years))
            .and_then(|growth| last.human().checked_add(growth))
            .ok_or_else(|| EngineError::CalculationError {
                message: format!("human age overflowed extrapolating pet age {}", age),
            })?;
        return Ok(AgeConversion {
            human_age: precision.apply(projected),
            method: ConversionMethod::Extrapolated,
        });
    }

    if let Some((lower, upper)) = table.bracket(age) {
        // Multiply before dividing to keep the intermediate exact where possible.
        let interpolated = lower.human()
            + (age - lower.pet()) * (upper.human() - lower.human()) / (upper.pet() - lower.pet());
        return Ok(AgeConversion {
            human_age: precision.apply(interpolated),
            method: ConversionMethod::Interpolated,
        });
    }

    Ok(AgeConversion {
        human_age: table.first().human(),
        method: ConversionMethod::BelowRange,
    })
}
