//! Analyzed string records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{analyze, PropertyRecord};

/// A stored string together with its computed properties.
///
/// The fingerprint doubles as the record's unique key. Records are never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRecord {
    /// SHA-256 fingerprint of `content` (same as `properties.sha256_hash`).
    #[serde(rename = "id")]
    pub fingerprint: String,

    /// The original string, exactly as submitted.
    #[serde(rename = "value")]
    pub content: String,

    /// Properties computed when the record was created.
    pub properties: PropertyRecord,

    /// UTC timestamp when the record was created.
    pub created_at: DateTime<Utc>,
}

impl TextRecord {
    /// Analyzes `content` and builds a record stamped with the current time.
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_created_at(content, Utc::now())
    }

    /// Analyzes `content` and builds a record with an explicit creation time.
    pub fn with_created_at(content: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        let content = content.into();
        let properties = analyze(&content);
        Self {
            fingerprint: properties.sha256_hash.clone(),
            content,
            properties,
            created_at,
        }
    }
}
