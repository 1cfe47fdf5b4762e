//! Age table model.
//!
//! An [`AgeTable`] is the ordered list of (pet age, human age) breakpoints
//! for one species/size category. Tables are validated once on
//! construction and are immutable afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single breakpoint in an age table.
///
/// # Example
///
/// ```
/// use pet_age_engine::models::AgeEntry;
///
/// let entry = AgeEntry { pet_age: 1, human_age: 15 };
/// assert_eq!(entry.human_age, 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeEntry {
    /// The pet's age in whole years.
    pub pet_age: u32,
    /// The equivalent human age in whole years.
    pub human_age: u32,
}

impl AgeEntry {
    /// Returns the pet age as a Decimal.
    pub fn pet(&self) -> Decimal {
        Decimal::from(self.pet_age)
    }

    /// Returns the human age as a Decimal.
    pub fn human(&self) -> Decimal {
        Decimal::from(self.human_age)
    }
}

/// Reasons an age table can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableViolation {
    /// Fewer than two entries; there is no segment to interpolate or extrapolate along.
    #[error("table needs at least 2 entries, found {count}")]
    TooFewEntries {
        /// The number of entries provided.
        count: usize,
    },

    /// An entry's pet age does not exceed the previous entry's.
    #[error("pet ages must be strictly increasing (entry {index})")]
    PetAgeNotIncreasing {
        /// Index of the offending entry.
        index: usize,
    },

    /// An entry's human age does not exceed the previous entry's.
    #[error("human ages must be strictly increasing (entry {index})")]
    HumanAgeNotIncreasing {
        /// Index of the offending entry.
        index: usize,
    },
}

/// An ordered, validated sequence of age breakpoints.
///
/// Invariants: at least two entries, and both `pet_age` and `human_age`
/// strictly increasing.
///
/// # Example
///
/// ```
/// use pet_age_engine::models::{AgeEntry, AgeTable};
///
/// let table = AgeTable::new(vec![
///     AgeEntry { pet_age: 0, human_age: 0 },
///     AgeEntry { pet_age: 1, human_age: 15 },
///     AgeEntry { pet_age: 2, human_age: 24 },
/// ]).unwrap();
///
/// assert_eq!(table.last().human_age, 24);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AgeTable {
    entries: Vec<AgeEntry>,
}

impl AgeTable {
    /// Builds a table, checking length and ordering.
    pub fn new(entries: Vec<AgeEntry>) -> Result<Self, TableViolation> {
        if entries.len() < 2 {
            return Err(TableViolation::TooFewEntries {
                count: entries.len(),
            });
        }

        for (index, pair) in entries.windows(2).enumerate() {
            if pair[1].pet_age <= pair[0].pet_age {
                return Err(TableViolation::PetAgeNotIncreasing { index: index + 1 });
            }
            if pair[1].human_age <= pair[0].human_age {
                return Err(TableViolation::HumanAgeNotIncreasing { index: index + 1 });
            }
        }

        Ok(Self { entries })
    }

    /// Returns all entries in ascending order.
    pub fn entries(&self) -> &[AgeEntry] {
        &self.entries
    }

    /// Returns the number of entries (always at least two).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false. [`AgeTable::new`] rejects tables with fewer than two
    /// entries.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the entry with the smallest pet age.
    pub fn first(&self) -> &AgeEntry {
        &self.entries[0]
    }

    /// Returns the entry with the largest pet age.
    pub fn last(&self) -> &AgeEntry {
        &self.entries[self.entries.len() - 1]
    }

    /// Returns the entry before the last one.
    pub fn second_last(&self) -> &AgeEntry {
        &self.entries[self.entries.len() - 2]
    }

    /// Finds the entry whose pet age equals `age` exactly.
    pub fn find_exact(&self, age: Decimal) -> Option<&AgeEntry> {
        self.entries.iter().find(|entry| entry.pet() == age)
    }

    /// Finds the consecutive pair of entries strictly bracketing `age`.
    pub fn bracket(&self, age: Decimal) -> Option<(&AgeEntry, &AgeEntry)> {
        self.entries
            .windows(2)
            .find(|pair| pair[0].pet() < age && age < pair[1].pet())
            .map(|pair| (&pair[0], &pair[1]))
    }

    /// Slope of the final segment, in human years per pet year.
    pub fn tail_slope(&self) -> Decimal {
        let last = self.last();
        let second_last = self.second_last();
        (last.human() - second_last.human()) / (last.pet() - second_last.pet())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn entry(pet_age: u32, human_age: u32) -> AgeEntry {
        AgeEntry { pet_age, human_age }
    }

    fn sample_table() -> AgeTable {
        AgeTable::new(vec![entry(0, 0), entry(1, 15), entry(2, 24), entry(4, 32)]).unwrap()
    }

    #[test]
    fn test_rejects_single_entry() {
        let result = AgeTable::new(vec![entry(0, 0)]);
        assert_eq!(result, Err(TableViolation::TooFewEntries { count: 1 }));
    }

    #[test]
    fn test_rejects_empty_table() {
        let result = AgeTable::new(vec![]);
        assert_eq!(result, Err(TableViolation::TooFewEntries { count: 0 }));
    }

    #[test]
    fn test_rejects_duplicate_pet_age() {
        let result = AgeTable::new(vec![entry(0, 0), entry(1, 15), entry(1, 20)]);
        assert_eq!(result, Err(TableViolation::PetAgeNotIncreasing { index: 2 }));
    }

    #[test]
    fn test_rejects_non_increasing_human_age() {
        let result = AgeTable::new(vec![entry(0, 0), entry(1, 15), entry(2, 15)]);
        assert_eq!(
            result,
            Err(TableViolation::HumanAgeNotIncreasing { index: 2 })
        );
    }

    #[test]
    fn test_first_last_and_second_last() {
        let table = sample_table();
        assert_eq!(table.first(), &entry(0, 0));
        assert_eq!(table.last(), &entry(4, 32));
        assert_eq!(table.second_last(), &entry(2, 24));
        assert_eq!(table.len(), 4);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_find_exact() {
        let table = sample_table();
        assert_eq!(table.find_exact(dec("2")), Some(&entry(2, 24)));
        assert_eq!(table.find_exact(dec("2.0")), Some(&entry(2, 24)));
        assert_eq!(table.find_exact(dec("3")), None);
    }

    #[test]
    fn test_bracket_finds_surrounding_entries() {
        let table = sample_table();
        assert_eq!(
            table.bracket(dec("3")),
            Some((&entry(2, 24), &entry(4, 32)))
        );
        assert_eq!(table.bracket(dec("0.5")), Some((&entry(0, 0), &entry(1, 15))));
    }

    #[test]
    fn test_bracket_excludes_exact_and_out_of_range() {
        let table = sample_table();
        assert_eq!(table.bracket(dec("2")), None);
        assert_eq!(table.bracket(dec("5")), None);
        assert_eq!(table.bracket(dec("-1")), None);
    }

    #[test]
    fn test_tail_slope_uses_last_segment() {
        // (32 - 24) / (4 - 2) = 4
        assert_eq!(sample_table().tail_slope(), dec("4"));
    }

    #[test]
    fn test_table_serializes_as_entry_list() {
        let table = AgeTable::new(vec![entry(0, 0), entry(1, 15)]).unwrap();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(
            json,
            r#"[{"pet_age":0,"human_age":0},{"pet_age":1,"human_age":15}]"#
        );
    }
}
