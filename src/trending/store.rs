//! Trending store abstraction.
//!
//! This module defines the [`TrendingStore`] trait that abstracts over
//! trending persistence backends. The trait is minimal and use-case driven:
//! each method maps directly to one operation the application performs, not a
//! generic document API.

use async_trait::async_trait;

use crate::domain::{Movie, Result};
use crate::trending::models::TrendingRecord;

/// Abstraction over trending search persistence backends.
///
/// # Implementations
///
/// - [`AppwriteStore`](crate::trending::AppwriteStore): hosted document store
///   over REST (default when configured)
/// - [`JsonStore`](crate::trending::JsonStore): local JSON file with atomic
///   writes (offline fallback, also used by tests)
#[async_trait]
pub trait TrendingStore: Send + Sync {
    /// Records one search of `term` that returned `movie` as its first result.
    ///
    /// Looks up the record with `search_term == term`: increments its `count`
    /// by 1 in place if found, otherwise creates a new record with `count = 1`
    /// and the movie's id and derived poster URL. This is a read-modify-write,
    /// not an atomic upsert; concurrent recordings of the same term from
    /// separate sessions can lose an increment, which is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`MarqueeError::Persistence`](crate::domain::MarqueeError::Persistence)
    /// when the lookup or write fails. Callers at the task layer log and
    /// swallow the error; it must never reach the search flow.
    async fn record_search(&self, term: &str, movie: &Movie) -> Result<()>;

    /// Returns up to `limit` records ordered by descending `count`.
    ///
    /// # Errors
    ///
    /// Returns [`MarqueeError::Query`](crate::domain::MarqueeError::Query)
    /// when the read fails. Callers log the error and leave the trending
    /// panel absent.
    async fn fetch_trending(&self, limit: usize) -> Result<Vec<TrendingRecord>>;

    /// Backend name for logging and debugging.
    fn name(&self) -> &'static str;
}
