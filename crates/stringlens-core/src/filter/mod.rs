//! Filter criteria, evaluation, and natural-language query interpretation.
//!
//! This module selects subsets of analyzed strings. Criteria come from one of
//! two places:
//!
//! - Explicit parameters, validated by [`RawCriteria::validate`]
//! - A free-text phrase, translated by [`interpret`] / [`interpret_query`]
//!
//! Either way the result is a [`FilterCriteria`], which the
//! [`FilterEvaluator`] applies with AND semantics.
//!
//! # Supported Criteria
//!
//! - `is_palindrome` - exact match on the palindrome flag
//! - `min_length` / `max_length` - inclusive bounds on character count
//! - `word_count` - exact word count
//! - `contains_character` - case-insensitive containment
//!
//! # Example
//!
//! ```
//! use stringlens_core::filter::{interpret_query, FilterEvaluator};
//! use stringlens_core::TextRecord;
//!
//! let records = vec![
//!     TextRecord::new("level"),
//!     TextRecord::new("step on no pets"),
//!     TextRecord::new("hello"),
//! ];
//!
//! let query = interpret_query("single word palindromes").unwrap();
//! let evaluator = FilterEvaluator::new(&query.parsed_filters);
//! let results = evaluator.filter_records(&records);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].content, "level");
//! ```

mod criteria;
mod error;
mod evaluator;
mod interpreter;

pub use criteria::{FilterCriteria, RawCriteria};
pub use error::{CriteriaError, CriteriaResult, QueryError, QueryResult};
pub use evaluator::{apply, FilterEvaluator};
pub use interpreter::{interpret, interpret_query, InterpretedQuery};
