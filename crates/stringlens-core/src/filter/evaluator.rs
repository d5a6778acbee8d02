//! Filter evaluation against analyzed records.
//!
//! This module provides the [`FilterEvaluator`] for testing [`TextRecord`]s
//! against a [`FilterCriteria`]. Every present criterion must hold (logical
//! AND); absent criteria are vacuously satisfied.
//!
//! # Example
//!
//! ```
//! use stringlens_core::filter::{FilterCriteria, FilterEvaluator};
//! use stringlens_core::TextRecord;
//!
//! let records = vec![TextRecord::new("racecar"), TextRecord::new("hello")];
//! let criteria = FilterCriteria::new().palindrome(true);
//!
//! let evaluator = FilterEvaluator::new(&criteria);
//! let matches = evaluator.filter_records(&records);
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].content, "racecar");
//! ```

use crate::record::TextRecord;

use super::criteria::FilterCriteria;

/// Evaluates filter criteria against records.
#[derive(Debug, Clone, Copy)]
pub struct FilterEvaluator<'a> {
    criteria: &'a FilterCriteria,
}

impl<'a> FilterEvaluator<'a> {
    /// Creates a new evaluator for the given criteria.
    pub fn new(criteria: &'a FilterCriteria) -> Self {
        Self { criteria }
    }

    /// Returns true if the record satisfies every present criterion.
    pub fn matches(&self, record: &TextRecord) -> bool {
        let props = &record.properties;
        let criteria = self.criteria;

        if let Some(expected) = criteria.is_palindrome {
            if props.is_palindrome != expected {
                return false;
            }
        }

        if let Some(min) = criteria.min_length {
            if props.length < min {
                return false;
            }
        }

        if let Some(max) = criteria.max_length {
            if props.length > max {
                return false;
            }
        }

        if let Some(expected) = criteria.word_count {
            if props.word_count != expected {
                return false;
            }
        }

        if let Some(c) = criteria.contains_character {
            if !contains_ignore_case(&record.content, c) {
                return false;
            }
        }

        true
    }

    /// Filters a slice of records, returning only those that match, in order.
    pub fn filter_records<'b>(&self, records: &'b [TextRecord]) -> Vec<&'b TextRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Returns the order-preserving subsequence of `records` that satisfies
/// `criteria`.
pub fn apply<'b>(records: &'b [TextRecord], criteria: &FilterCriteria) -> Vec<&'b TextRecord> {
    FilterEvaluator::new(criteria).filter_records(records)
}

/// Case-insensitive containment: both sides are lowercased before comparing.
///
/// This reads the raw content, unlike the case-sensitive frequency table.
fn contains_ignore_case(content: &str, c: char) -> bool {
    let needle: String = c.to_lowercase().collect();
    content.to_lowercase().contains(&needle)
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;
