//! JSON file-based trending store.
//!
//! Local fallback backend used when no hosted document store is configured,
//! keeping the trending panel functional offline. Records live in a single
//! human-readable JSON file, written atomically (write-to-temp + rename) so a
//! crash never leaves the file corrupt.
//!
//! The whole dataset stays in memory behind a mutex; a handful of trending
//! records never justifies anything heavier.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{MarqueeError, Movie, Result};
use crate::trending::models::TrendingRecord;
use crate::trending::store::TrendingStore;

/// On-disk container format.
///
/// Records are indexed by search term, which enforces the one-record-per-term
/// invariant structurally.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// All trending records, keyed by search term.
    #[serde(default)]
    records: HashMap<String, TrendingRecord>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            version: 1,
            records: HashMap::new(),
        }
    }
}

/// JSON file trending store.
///
/// `Send + Sync` via an internal mutex; the lock is never held across an
/// await point.
pub struct JsonStore {
    file_path: PathBuf,
    data: Mutex<StoreData>,
}

impl JsonStore {
    /// Creates or opens a JSON trending store.
    ///
    /// Loads existing data when the file exists, otherwise starts empty.
    /// Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created, or the
    /// file exists but cannot be read or parsed.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing local trending store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            let contents = std::fs::read_to_string(&file_path)?;
            serde_json::from_str(&contents)
                .map_err(|e| MarqueeError::Persistence(format!("failed to parse store file: {e}")))?
        } else {
            StoreData::default()
        };

        tracing::debug!(record_count = data.records.len(), "local store initialized");

        Ok(Self {
            file_path,
            data: Mutex::new(data),
        })
    }

    /// Writes the dataset to disk atomically.
    fn save(&self, data: &StoreData) -> Result<()> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| MarqueeError::Persistence(format!("failed to serialize store: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::trace!(path = ?self.file_path, "local store saved");
        Ok(())
    }

    /// Locks the dataset, mapping poisoned-lock failures to store errors.
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, StoreData>> {
        self.data
            .lock()
            .map_err(|_| MarqueeError::Persistence("store lock poisoned".to_string()))
    }
}

#[async_trait]
impl TrendingStore for JsonStore {
    async fn record_search(&self, term: &str, movie: &Movie) -> Result<()> {
        // No await points; in_scope keeps the span off the held future.
        tracing::debug_span!("local_record_search", term = %term).in_scope(|| {
            let snapshot = {
                let mut data = self.lock()?;

                if let Some(existing) = data.records.get_mut(term) {
                    existing.count = existing.count.saturating_add(1);
                    tracing::debug!(count = existing.count, "incremented trending count");
                } else {
                    let record = TrendingRecord::new(term, term, movie.id, movie.poster_url());
                    data.records.insert(term.to_string(), record);
                    tracing::debug!(movie_id = movie.id, "created trending record");
                }

                data.clone()
            };

            self.save(&snapshot)
        })
    }

    async fn fetch_trending(&self, limit: usize) -> Result<Vec<TrendingRecord>> {
        tracing::debug_span!("local_fetch_trending", limit = limit).in_scope(|| {
            let mut records: Vec<TrendingRecord> = {
                let data = self
                    .data
                    .lock()
                    .map_err(|_| MarqueeError::Query("store lock poisoned".to_string()))?;
                data.records.values().cloned().collect()
            };

            // Descending count, newest first among ties for a stable panel.
            records.sort_by(|a, b| {
                b.count
                    .cmp(&a.count)
                    .then_with(|| b.created_at.cmp(&a.created_at))
            });
            records.truncate(limit);

            tracing::debug!(record_count = records.len(), "trending fetched");
            Ok(records)
        })
    }

    fn name(&self) -> &'static str {
        "local-json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            poster_path: Some("/poster.jpg".to_string()),
            popularity: None,
            vote_average: None,
            release_date: None,
            original_language: None,
        }
    }

    fn store_in(dir: &tempfile::TempDir) -> JsonStore {
        JsonStore::new(dir.path().join("trending.json")).expect("store")
    }

    #[tokio::test]
    async fn first_search_creates_record_with_count_one() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);

        store
            .record_search("dune", &movie(1, "Dune"))
            .await
            .expect("record");

        let trending = store.fetch_trending(5).await.expect("fetch");
        assert_eq!(trending.len(), 1);
        assert_eq!(trending[0].search_term, "dune");
        assert_eq!(trending[0].count, 1);
        assert_eq!(trending[0].movie_id, 1);
        assert_eq!(
            trending[0].poster_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/poster.jpg")
        );
    }

    #[tokio::test]
    async fn repeated_search_increments_without_duplicating() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);

        store
            .record_search("dune", &movie(1, "Dune"))
            .await
            .expect("record");
        store
            .record_search("dune", &movie(1, "Dune"))
            .await
            .expect("record");

        let trending = store.fetch_trending(5).await.expect("fetch");
        assert_eq!(trending.len(), 1, "no duplicate record for the same term");
        assert_eq!(trending[0].count, 2);
    }

    #[tokio::test]
    async fn fetch_trending_caps_at_limit_with_non_increasing_counts() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);

        for (term, searches) in [
            ("dune", 4),
            ("alien", 2),
            ("heat", 6),
            ("brazil", 1),
            ("akira", 3),
            ("stalker", 5),
        ] {
            for _ in 0..searches {
                store
                    .record_search(term, &movie(1, term))
                    .await
                    .expect("record");
            }
        }

        let trending = store.fetch_trending(5).await.expect("fetch");
        assert_eq!(trending.len(), 5);
        for pair in trending.windows(2) {
            assert!(pair[0].count >= pair[1].count, "counts must not increase");
        }
        assert_eq!(trending[0].search_term, "heat");
        assert!(!trending.iter().any(|r| r.search_term == "brazil"));
    }

    #[test]
    fn store_futures_can_cross_threads() {
        fn require_send<T: Send>(_: T) {}

        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);

        require_send(store.record_search("dune", &movie(1, "Dune")));
        require_send(store.fetch_trending(5));
    }

    #[tokio::test]
    async fn data_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("trending.json");

        {
            let store = JsonStore::new(path.clone()).expect("store");
            store
                .record_search("dune", &movie(1, "Dune"))
                .await
                .expect("record");
        }

        let reopened = JsonStore::new(path).expect("store");
        let trending = reopened.fetch_trending(5).await.expect("fetch");
        assert_eq!(trending.len(), 1);
        assert_eq!(trending[0].count, 1);
    }
}
