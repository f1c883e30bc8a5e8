//! Catalog client trait definition.
//!
//! This trait is the seam between the application's background tasks and the
//! concrete catalog transport, allowing tests to substitute a stub catalog.

use async_trait::async_trait;

use crate::domain::{Movie, Result};

/// Abstraction over the remote movie catalog.
///
/// Implementations issue read-only queries against an external catalog
/// service. Every call is independent: no retries, no caching.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Queries the catalog for movies matching `term`.
    ///
    /// An empty term requests the "discover, sorted by descending popularity"
    /// listing; a non-empty term requests a search, with the term
    /// percent-encoded on the wire.
    ///
    /// # Errors
    ///
    /// - [`MarqueeError::Transport`](crate::domain::MarqueeError::Transport)
    ///   when the HTTP response status is not successful.
    /// - [`MarqueeError::Application`](crate::domain::MarqueeError::Application)
    ///   when the catalog reports a logical failure in its response body; the
    ///   carried message is shown to the user verbatim.
    /// - [`MarqueeError::Fetch`](crate::domain::MarqueeError::Fetch) for
    ///   network failures or malformed bodies.
    async fn query_movies(&self, term: &str) -> Result<Vec<Movie>>;

    /// Client name for logging and debugging.
    fn name(&self) -> &'static str;
}
