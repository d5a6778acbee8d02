//! Error types for filter construction and query interpretation.

use thiserror::Error;

/// A specialized Result type for natural-language query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// A specialized Result type for explicit criteria validation.
pub type CriteriaResult<T> = Result<T, CriteriaError>;

/// Errors that can occur when turning a phrase into filter criteria.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The query phrase is empty or whitespace only.
    #[error("query is empty")]
    EmptyQuery,

    /// No pattern in the phrase was recognized.
    #[error("unable to parse natural language query: {query}")]
    Unrecognized {
        /// The phrase as submitted.
        query: String,
    },

    /// The phrase was understood but its filters cannot all hold.
    #[error("query parsed but resulted in conflicting filters: min_length {min_length} > max_length {max_length}")]
    Conflicting {
        /// The interpreted lower length bound.
        min_length: usize,
        /// The interpreted upper length bound.
        max_length: usize,
    },

    /// The phrase asks for a length no string can have.
    #[error("query parsed but no string can satisfy '{bound}'")]
    Unsatisfiable {
        /// The bound as written in the phrase.
        bound: String,
    },
}

impl QueryError {
    /// Creates an unrecognized-query error.
    pub fn unrecognized(query: impl Into<String>) -> Self {
        QueryError::Unrecognized {
            query: query.into(),
        }
    }
}

/// Errors that can occur when validating explicit filter parameters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CriteriaError {
    /// A parameter value could not be parsed or is out of range.
    #[error("invalid value for {field}: '{value}' ({reason})")]
    InvalidValue {
        /// The parameter name.
        field: &'static str,
        /// The raw value supplied.
        value: String,
        /// What was expected.
        reason: &'static str,
    },

    /// `min_length` exceeds `max_length`, so no record can match.
    #[error("conflicting filters: min_length {min_length} > max_length {max_length}")]
    Conflicting {
        /// The requested lower length bound.
        min_length: usize,
        /// The requested upper length bound.
        max_length: usize,
    },
}

impl CriteriaError {
    /// Creates an invalid value error.
    pub fn invalid_value(field: &'static str, value: impl Into<String>, reason: &'static str) -> Self {
        CriteriaError::InvalidValue {
            field,
            value: value.into(),
            reason,
        }
    }
}
