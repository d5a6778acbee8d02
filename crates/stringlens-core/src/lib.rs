//! String analysis and query engine.
//!
//! This crate computes a fixed set of properties for arbitrary strings, keeps
//! analyzed strings in a catalog keyed by content fingerprint, and selects
//! subsets of that catalog with explicit or natural-language filters.
//!
//! - [`analysis`] - property computation ([`analyze`])
//! - [`filter`] - criteria, evaluation and phrase interpretation
//! - [`Catalog`] - fingerprint-keyed record collection
//! - [`CatalogStore`] - JSON snapshot persistence
//!
//! # Example
//!
//! ```
//! use stringlens_core::filter::interpret_query;
//! use stringlens_core::Catalog;
//!
//! let mut catalog = Catalog::new();
//! catalog.insert("racecar").unwrap();
//! catalog.insert("zebra").unwrap();
//! catalog.insert("hello world").unwrap();
//!
//! let query = interpret_query("strings containing the letter z").unwrap();
//! let results = catalog.filter(&query.parsed_filters);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].content, "zebra");
//! ```

pub mod analysis;
mod catalog;
pub mod filter;
mod record;
pub mod store;

pub use analysis::{analyze, PropertyRecord};
pub use catalog::{Catalog, CatalogError, CatalogResult};
pub use record::TextRecord;
pub use store::{CatalogStore, StoreError};
