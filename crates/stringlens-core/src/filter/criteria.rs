//! Filter criteria and the validation boundary for explicit parameters.

use serde::{Deserialize, Serialize};

use super::error::{CriteriaError, CriteriaResult};

/// A set of optional constraints over analyzed strings.
///
/// Every field is independent. An absent field imposes no constraint, so a
/// default `FilterCriteria` matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Required palindrome flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,

    /// Inclusive lower bound on length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Inclusive upper bound on length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Exact word count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,

    /// Character the content must contain (compared case-insensitively).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterCriteria {
    /// Creates criteria with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }

    /// Returns the `(min_length, max_length)` pair if both are set and the
    /// lower bound exceeds the upper one.
    pub fn length_conflict(&self) -> Option<(usize, usize)> {
        match (self.min_length, self.max_length) {
            (Some(min), Some(max)) if min > max => Some((min, max)),
            _ => None,
        }
    }

    /// Sets the palindrome constraint.
    pub fn palindrome(mut self, value: bool) -> Self {
        self.is_palindrome = Some(value);
        self
    }

    /// Sets the inclusive lower length bound.
    pub fn min_length(mut self, value: usize) -> Self {
        self.min_length = Some(value);
        self
    }

    /// Sets the inclusive upper length bound.
    pub fn max_length(mut self, value: usize) -> Self {
        self.max_length = Some(value);
        self
    }

    /// Sets the exact word count.
    pub fn word_count(mut self, value: usize) -> Self {
        self.word_count = Some(value);
        self
    }

    /// Sets the required character.
    pub fn contains_character(mut self, value: char) -> Self {
        self.contains_character = Some(value);
        self
    }
}

/// Unvalidated filter parameters, as they arrive from a query string or the
/// command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCriteria {
    /// `"true"` or `"false"`, case-insensitive.
    pub is_palindrome: Option<String>,

    /// Non-negative decimal integer.
    pub min_length: Option<String>,

    /// Non-negative decimal integer.
    pub max_length: Option<String>,

    /// Non-negative decimal integer.
    pub word_count: Option<String>,

    /// Exactly one character.
    pub contains_character: Option<String>,
}

impl RawCriteria {
    /// Validates every present parameter and builds [`FilterCriteria`].
    ///
    /// # Errors
    ///
    /// Returns `CriteriaError::InvalidValue` for a malformed parameter and
    /// `CriteriaError::Conflicting` if `min_length > max_length`.
    pub fn validate(&self) -> CriteriaResult<FilterCriteria> {
        let criteria = FilterCriteria {
            is_palindrome: self
                .is_palindrome
                .as_deref()
                .map(|v| parse_bool("is_palindrome", v))
                .transpose()?,
            min_length: self
                .min_length
                .as_deref()
                .map(|v| parse_count("min_length", v))
                .transpose()?,
            max_length: self
                .max_length
                .as_deref()
                .map(|v| parse_count("max_length", v))
                .transpose()?,
            word_count: self
                .word_count
                .as_deref()
                .map(|v| parse_count("word_count", v))
                .transpose()?,
            contains_character: self
                .contains_character
                .as_deref()
                .map(|v| parse_char("contains_character", v))
                .transpose()?,
        };

        if let Some((min_length, max_length)) = criteria.length_conflict() {
            return Err(CriteriaError::Conflicting {
                min_length,
                max_length,
            });
        }

        Ok(criteria)
    }
}

fn parse_bool(field: &'static str, value: &str) -> CriteriaResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(CriteriaError::invalid_value(
            field,
            value,
            "expected true or false",
        )),
    }
}

fn parse_count(field: &'static str, value: &str) -> CriteriaResult<usize> {
    let trimmed = value.trim();
    // `usize::from_str` accepts a leading '+', which a query parameter shouldn't
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(CriteriaError::invalid_value(
            field,
            value,
            "expected a non-negative integer",
        ));
    }
    trimmed
        .parse()
        .map_err(|_| CriteriaError::invalid_value(field, value, "integer out of range"))
}

fn parse_char(field: &'static str, value: &str) -> CriteriaResult<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(CriteriaError::invalid_value(
            field,
            value,
            "expected exactly one character",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawCriteria {
        RawCriteria::default()
    }

    #[test]
    fn test_default_is_empty() {
        assert!(FilterCriteria::new().is_empty());
        assert!(!FilterCriteria::new().word_count(1).is_empty());
    }

    #[test]
    fn test_length_conflict() {
        assert_eq!(
            FilterCriteria::new().min_length(5).max_length(3).length_conflict(),
            Some((5, 3))
        );
        assert_eq!(
            FilterCriteria::new().min_length(3).max_length(3).length_conflict(),
            None
        );
        assert_eq!(FilterCriteria::new().min_length(3).length_conflict(), None);
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let criteria = FilterCriteria::new().palindrome(true).word_count(1);
        let json = serde_json::to_value(&criteria).unwrap();
        assert_eq!(json, serde_json::json!({"is_palindrome": true, "word_count": 1}));
    }

    #[test]
    fn test_validate_empty_raw() {
        assert_eq!(raw().validate().unwrap(), FilterCriteria::new());
    }

    #[test]
    fn test_validate_all_fields() {
        let raw = RawCriteria {
            is_palindrome: Some("TRUE".into()),
            min_length: Some("2".into()),
            max_length: Some("10".into()),
            word_count: Some("1".into()),
            contains_character: Some("z".into()),
        };
        let criteria = raw.validate().unwrap();
        assert_eq!(
            criteria,
            FilterCriteria::new()
                .palindrome(true)
                .min_length(2)
                .max_length(10)
                .word_count(1)
                .contains_character('z')
        );
    }

    #[test]
    fn test_validate_rejects_bad_bool() {
        let raw = RawCriteria {
            is_palindrome: Some("yes".into()),
            ..raw()
        };
        assert!(matches!(
            raw.validate(),
            Err(CriteriaError::InvalidValue {
                field: "is_palindrome",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_and_non_numeric() {
        for bad in ["-1", "abc", "", "1.5", "+3"] {
            let raw = RawCriteria {
                min_length: Some(bad.into()),
                ..raw()
            };
            assert!(
                matches!(
                    raw.validate(),
                    Err(CriteriaError::InvalidValue {
                        field: "min_length",
                        ..
                    })
                ),
                "expected {:?} to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_validate_rejects_overflowing_integer() {
        let raw = RawCriteria {
            word_count: Some("99999999999999999999999999".into()),
            ..raw()
        };
        assert!(raw.validate().is_err());
    }

    #[test]
    fn test_validate_contains_character_length() {
        let multi = RawCriteria {
            contains_character: Some("ab".into()),
            ..raw()
        };
        assert!(multi.validate().is_err());

        let empty = RawCriteria {
            contains_character: Some(String::new()),
            ..raw()
        };
        assert!(empty.validate().is_err());

        let unicode = RawCriteria {
            contains_character: Some("é".into()),
            ..raw()
        };
        assert_eq!(unicode.validate().unwrap().contains_character, Some('é'));
    }

    #[test]
    fn test_validate_conflicting_lengths() {
        let raw = RawCriteria {
            min_length: Some("10".into()),
            max_length: Some("5".into()),
            ..raw()
        };
        assert_eq!(
            raw.validate(),
            Err(CriteriaError::Conflicting {
                min_length: 10,
                max_length: 5
            })
        );
    }
}
