//! Life stage classification.

use rust_decimal::Decimal;

use crate::models::LifeStage;

/// Pets younger than this many years are classed as young.
pub const ADULT_AGE: Decimal = Decimal::ONE;

/// Classifies a pet's life stage from its own age.
///
/// # Examples
///
/// ```
/// use pet_age_engine::calculation::classify_life_stage;
/// use pet_age_engine::models::LifeStage;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let senior_age = Decimal::from(7);
/// assert_eq!(classify_life_stage(Decimal::from_str("0.5").unwrap(), senior_age), LifeStage::Young);
/// assert_eq!(classify_life_stage(Decimal::from(3), senior_age), LifeStage::Adult);
/// assert_eq!(classify_life_stage(Decimal::from(7), senior_age), LifeStage::Senior);
/// ```
pub fn classify_life_stage(pet_age: Decimal, senior_age: Decimal) -> LifeStage {
    if pet_age < ADULT_AGE {
        LifeStage::Young
    } else if pet_age < senior_age {
        LifeStage::Adult
    } else {
        LifeStage::Senior
    }
}
