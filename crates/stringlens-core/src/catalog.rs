//! In-memory catalog of analyzed strings keyed by fingerprint.
//!
//! The catalog holds at most one [`TextRecord`] per fingerprint. Records keep
//! their insertion order, which is the order listings and filters return.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use strsim::levenshtein;
use thiserror::Error;
use tracing::debug;

use crate::analysis::fingerprint;
use crate::filter::{FilterCriteria, FilterEvaluator};
use crate::record::TextRecord;

/// Current catalog schema version.
const CATALOG_VERSION: u32 = 1;

/// Maximum Levenshtein distance to consider a stored string as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A record with the same content is already stored.
    #[error("string already exists in the catalog (id {fingerprint})")]
    AlreadyExists {
        /// Fingerprint of the existing record.
        fingerprint: String,
    },

    /// No record with the given content exists.
    #[error("{}", format_not_found(content, suggestion.as_deref()))]
    NotFound {
        /// The content that was looked up.
        content: String,
        /// The closest stored string, if any is close enough.
        suggestion: Option<String>,
    },
}

/// Formats the "not found" message, optionally including a suggestion.
fn format_not_found(content: &str, suggestion: Option<&str>) -> String {
    let base = format!("string '{}' does not exist in the catalog.", content);
    match suggestion {
        Some(s) => format!("{} Did you mean '{}'?", base, s),
        None => base,
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Ordered collection of analyzed strings with a fingerprint index.
///
/// The index is not serialized; it is rebuilt on deserialization via
/// [`Catalog::rebuild_index`] (the [`CatalogStore`](crate::CatalogStore) does
/// this after every load).
///
/// `Catalog` has no interior locking. Share it between threads as
/// `Arc<RwLock<Catalog>>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Schema version of the serialized catalog.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Stored records in insertion order.
    #[serde(default)]
    records: Vec<TextRecord>,

    /// Fingerprint → position in `records`.
    #[serde(skip)]
    index: HashMap<String, usize>,
}

fn default_version() -> u32 {
    CATALOG_VERSION
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version && self.records == other.records
    }
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            version: CATALOG_VERSION,
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Rebuilds the fingerprint index from the record list.
    ///
    /// If the record list contains duplicate fingerprints (e.g. a hand-edited
    /// file), the first occurrence is kept and later ones are dropped.
    pub fn rebuild_index(&mut self) {
        self.index.clear();
        let mut seen = HashSet::with_capacity(self.records.len());
        self.records.retain(|r| seen.insert(r.fingerprint.clone()));
        for (pos, record) in self.records.iter().enumerate() {
            self.index.insert(record.fingerprint.clone(), pos);
        }
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns all records in insertion order.
    pub fn records(&self) -> &[TextRecord] {
        &self.records
    }

    /// Analyzes `content` and stores it if no record with the same
    /// fingerprint exists.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::AlreadyExists` if the content is already stored.
    pub fn insert(&mut self, content: impl Into<String>) -> CatalogResult<&TextRecord> {
        self.insert_record(TextRecord::new(content))
    }

    /// Stores an already-analyzed record if its fingerprint is new.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::AlreadyExists` if the fingerprint is already stored.
    pub fn insert_record(&mut self, record: TextRecord) -> CatalogResult<&TextRecord> {
        if self.index.contains_key(&record.fingerprint) {
            return Err(CatalogError::AlreadyExists {
                fingerprint: record.fingerprint,
            });
        }

        let pos = self.records.len();
        debug!(fingerprint = %record.fingerprint, "inserting record");
        self.index.insert(record.fingerprint.clone(), pos);
        self.records.push(record);
        Ok(&self.records[pos])
    }

    /// Looks up a record by fingerprint.
    pub fn get_by_fingerprint(&self, fingerprint: &str) -> Option<&TextRecord> {
        self.index.get(fingerprint).map(|&pos| &self.records[pos])
    }

    /// Looks up a record by its exact content.
    pub fn get(&self, content: &str) -> Option<&TextRecord> {
        self.get_by_fingerprint(&fingerprint(content))
    }

    /// Returns true if a record with this exact content is stored.
    pub fn contains(&self, content: &str) -> bool {
        self.get(content).is_some()
    }

    /// Looks up a record by content, returning a not-found error with a
    /// suggestion when it is missing.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the content is not stored.
    pub fn require(&self, content: &str) -> CatalogResult<&TextRecord> {
        self.get(content).ok_or_else(|| self.not_found(content))
    }

    /// Removes the record with the given content.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the content is not stored.
    pub fn remove(&mut self, content: &str) -> CatalogResult<TextRecord> {
        let key = fingerprint(content);
        let Some(pos) = self.index.remove(&key) else {
            return Err(self.not_found(content));
        };

        let record = self.records.remove(pos);
        // Shift positions of everything after the removed record
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        debug!(fingerprint = %key, "removed record");
        Ok(record)
    }

    /// Returns the records matching `criteria`, in insertion order.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&TextRecord> {
        FilterEvaluator::new(criteria).filter_records(&self.records)
    }

    /// Finds the stored string closest to `content` by Levenshtein distance.
    ///
    /// Returns `None` if nothing is within the suggestion threshold or the
    /// only candidate is an exact match.
    pub fn suggest(&self, content: &str) -> Option<&str> {
        let (best, distance) = self
            .records
            .iter()
            .map(|r| (r.content.as_str(), levenshtein(content, &r.content)))
            .min_by_key(|(_, d)| *d)?;

        if distance > 0 && distance <= MAX_SUGGESTION_DISTANCE {
            Some(best)
        } else {
            None
        }
    }

    fn not_found(&self, content: &str) -> CatalogError {
        CatalogError::NotFound {
            content: content.to_string(),
            suggestion: self.suggest(content).map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, RwLock};
    use std::thread;

    fn catalog_with(contents: &[&str]) -> Catalog {
        let mut catalog = Catalog::new();
        for c in contents {
            catalog.insert(*c).unwrap();
        }
        catalog
    }

    #[test]
    fn test_new_catalog_is_empty() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert_eq!(catalog.version, CATALOG_VERSION);
    }

    #[test]
    fn test_insert_and_get() {
        let mut catalog = Catalog::new();
        let fp = catalog.insert("racecar").unwrap().fingerprint.clone();

        let record = catalog.get("racecar").unwrap();
        assert_eq!(record.fingerprint, fp);
        assert!(record.properties.is_palindrome);
        assert_eq!(catalog.get_by_fingerprint(&fp), Some(record));
        assert!(catalog.contains("racecar"));
        assert!(!catalog.contains("Racecar"));
    }

    #[test]
    fn test_insert_duplicate_rejected() {
        let mut catalog = catalog_with(&["hello"]);
        let err = catalog.insert("hello").unwrap_err();
        assert_eq!(
            err,
            CatalogError::AlreadyExists {
                fingerprint: fingerprint("hello")
            }
        );
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_insert_empty_string() {
        let mut catalog = Catalog::new();
        catalog.insert("").unwrap();
        assert!(catalog.contains(""));
        assert!(catalog.insert("").is_err());
    }

    #[test]
    fn test_records_keep_insertion_order() {
        let catalog = catalog_with(&["c", "a", "b"]);
        let order: Vec<&str> = catalog.records().iter().map(|r| r.content.as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_remove_updates_index() {
        let mut catalog = catalog_with(&["one", "two", "three", "four"]);
        let removed = catalog.remove("two").unwrap();
        assert_eq!(removed.content, "two");
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.contains("two"));

        // Positions after the removed record are still reachable
        assert_eq!(catalog.get("three").unwrap().content, "three");
        assert_eq!(catalog.get("four").unwrap().content, "four");
        assert_eq!(catalog.get("one").unwrap().content, "one");

        // Re-inserting after removal is allowed
        catalog.insert("two").unwrap();
        assert_eq!(catalog.records().last().unwrap().content, "two");
    }

    #[test]
    fn test_remove_missing() {
        let mut catalog = catalog_with(&["hello"]);
        let err = catalog.remove("nope").unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
    }

    #[test]
    fn test_require_not_found_with_suggestion() {
        let catalog = catalog_with(&["racecar", "something else entirely"]);
        let err = catalog.require("racecars").unwrap_err();
        assert_eq!(
            err,
            CatalogError::NotFound {
                content: "racecars".to_string(),
                suggestion: Some("racecar".to_string()),
            }
        );
        assert!(err.to_string().contains("Did you mean 'racecar'?"));
    }

    #[test]
    fn test_suggest_threshold() {
        let catalog = catalog_with(&["hello"]);
        assert_eq!(catalog.suggest("helo"), Some("hello"));
        assert_eq!(catalog.suggest("hello"), None);
        assert_eq!(catalog.suggest("completely different"), None);
        assert_eq!(Catalog::new().suggest("anything"), None);
    }

    #[test]
    fn test_filter_uses_evaluator() {
        let catalog = catalog_with(&["noon", "hello world", "kayak"]);
        let results = catalog.filter(&FilterCriteria::new().palindrome(true));
        let contents: Vec<&str> = results.iter().map(|r| r.content.as_str()).collect();
        assert_eq!(contents, vec!["noon", "kayak"]);
    }

    #[test]
    fn test_serde_roundtrip_rebuilds_index() {
        let catalog = catalog_with(&["alpha", "beta"]);
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(!json.contains("index"));

        let mut loaded: Catalog = serde_json::from_str(&json).unwrap();
        assert!(loaded.get("alpha").is_none(), "index is not serialized");

        loaded.rebuild_index();
        assert_eq!(loaded, catalog);
        assert!(loaded.contains("alpha"));
        assert!(loaded.contains("beta"));
    }

    #[test]
    fn test_rebuild_index_drops_duplicates() {
        let record = TextRecord::new("dup");
        let json = serde_json::json!({
            "version": 1,
            "records": [record, record, TextRecord::new("other")],
        });
        let mut catalog: Catalog = serde_json::from_value(json).unwrap();
        catalog.rebuild_index();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[0].content, "dup");
        assert_eq!(catalog.records()[1].content, "other");
    }

    #[test]
    fn test_deserialize_minimal() {
        let mut catalog: Catalog = serde_json::from_str("{}").unwrap();
        catalog.rebuild_index();
        assert!(catalog.is_empty());
        assert_eq!(catalog.version, CATALOG_VERSION);
    }

    #[test]
    fn test_concurrent_inserts_keep_one_record_per_fingerprint() {
        let catalog = Arc::new(RwLock::new(Catalog::new()));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let catalog = Arc::clone(&catalog);
                thread::spawn(move || {
                    // Every thread races on the same shared string plus one of its own
                    let shared = catalog.write().unwrap().insert("shared").is_ok();
                    catalog
                        .write()
                        .unwrap()
                        .insert(format!("thread-{i}"))
                        .unwrap();
                    shared
                })
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();

        let catalog = catalog.read().unwrap();
        assert_eq!(winners, 1);
        assert_eq!(catalog.len(), 9);
    }
}
