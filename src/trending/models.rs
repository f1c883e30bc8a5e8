//! Persisted trending record model.
//!
//! This module defines the storage-layer representation of a trending search
//! term. Records are deduplicated by `search_term`: created on the first
//! search of a term, incremented on every subsequent one, never deleted.

use serde::{Deserialize, Serialize};

/// A persisted counter of how often a search term was used.
///
/// At most one record exists per distinct `search_term` value. The associated
/// movie is the first result of the search that created the record, kept so
/// the trending panel can show a poster for the term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingRecord {
    /// Store-assigned document identifier.
    pub id: String,

    /// The search term this record counts. Acts as the dedup key.
    pub search_term: String,

    /// Number of times the term has been searched. Positive, monotonically
    /// incremented.
    pub count: i64,

    /// Catalog identifier of the first result returned for this term.
    pub movie_id: i64,

    /// Absolute poster URL derived from that movie, if it had a poster.
    pub poster_url: Option<String>,

    /// Unix timestamp when the record was created, `None` if the store did
    /// not report one.
    pub created_at: Option<i64>,
}

impl TrendingRecord {
    /// Creates a fresh record for the first search of a term.
    ///
    /// Sets `count` to 1 and `created_at` to the current time.
    pub fn new(
        id: impl Into<String>,
        search_term: impl Into<String>,
        movie_id: i64,
        poster_url: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            search_term: search_term.into(),
            count: 1,
            movie_id,
            poster_url,
            created_at: Some(chrono::Utc::now().timestamp()),
        }
    }
}
