//! String property analysis.
//!
//! [`analyze`] computes every derived property of a string in one call. It is a
//! total function: any input, including the empty string, yields a
//! [`PropertyRecord`].
//!
//! # Example
//!
//! ```
//! use stringlens_core::analysis::analyze;
//!
//! let props = analyze("A man a plan a canal Panama");
//! assert!(props.is_palindrome);
//! assert_eq!(props.word_count, 7);
//! assert_eq!(props.length, 27);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Properties derived from a string's content.
///
/// Produced whole by [`analyze`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    /// Number of characters (Unicode scalar values, not bytes).
    pub length: usize,

    /// Whether the ASCII-alphanumeric, lowercased content reads the same
    /// forward and backward.
    pub is_palindrome: bool,

    /// Number of distinct characters, case-sensitive.
    pub unique_characters: usize,

    /// Number of whitespace-delimited words.
    pub word_count: usize,

    /// SHA-256 digest of the content, lowercase hex.
    pub sha256_hash: String,

    /// Occurrence count of every character, case-sensitive.
    ///
    /// Stored in a `BTreeMap` so serialized output is stable.
    pub character_frequency: BTreeMap<char, usize>,
}

/// Analyzes a string and returns all of its derived properties.
pub fn analyze(content: &str) -> PropertyRecord {
    let character_frequency = character_frequency(content);
    // Every char lands in the frequency table exactly once, so the counts sum
    // to the length and the key count is the distinct-char count.
    let length = character_frequency.values().sum();
    let unique_characters = character_frequency.len();

    PropertyRecord {
        length,
        is_palindrome: is_palindrome(content),
        unique_characters,
        word_count: word_count(content),
        sha256_hash: fingerprint(content),
        character_frequency,
    }
}

/// Returns the lowercase hex SHA-256 digest of the content's UTF-8 bytes.
///
/// This value is the storage key for a record, so it must stay stable across
/// runs and platforms.
pub fn fingerprint(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

/// Returns true if the content is a palindrome after normalization.
///
/// Normalization lowercases the content and drops everything outside
/// `[a-z0-9]`. An empty normalized string is a palindrome.
pub fn is_palindrome(content: &str) -> bool {
    let normalized: Vec<char> = content
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();

    normalized.iter().eq(normalized.iter().rev())
}

/// Counts whitespace-delimited, non-empty tokens.
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

fn character_frequency(content: &str) -> BTreeMap<char, usize> {
    let mut frequency = BTreeMap::new();
    for c in content.chars() {
        *frequency.entry(c).or_insert(0) += 1;
    }
    frequency
}
