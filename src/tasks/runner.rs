//! Background task dispatch for catalog and trending operations.
//!
//! The runner owns the shared service handles and turns [`Action`]s into
//! detached tokio tasks, so the UI loop never waits on the network. Completed
//! tasks report back over an mpsc channel as [`TaskResponse`]s.
//!
//! Failure handling differs per operation:
//! - catalog queries always report back, success or failure, so the UI can
//!   show an error state
//! - trending loads report only on success; a failed load is logged and the
//!   panel simply stays absent
//! - search recording never reports; its outcome is visible only in the log

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug_span;

use crate::app::Action;
use crate::catalog::CatalogClient;
use crate::tasks::messages::TaskResponse;
use crate::trending::TrendingStore;

/// Dispatches actions onto detached background tasks.
pub struct TaskRunner {
    catalog: Arc<dyn CatalogClient>,
    store: Arc<dyn TrendingStore>,
    responses: mpsc::Sender<TaskResponse>,
    trending_limit: usize,
}

impl TaskRunner {
    /// Creates a runner over the given service handles.
    ///
    /// Responses to dispatched work arrive on the receiving end of
    /// `responses`.
    #[must_use]
    pub fn new(
        catalog: Arc<dyn CatalogClient>,
        store: Arc<dyn TrendingStore>,
        responses: mpsc::Sender<TaskResponse>,
        trending_limit: usize,
    ) -> Self {
        Self {
            catalog,
            store,
            responses,
            trending_limit,
        }
    }

    /// Executes one action, spawning background work as needed.
    ///
    /// Returns `true` when the action asks the application to terminate.
    pub fn dispatch(&self, action: Action) -> bool {
        let span = debug_span!("dispatch", action = ?action);
        let _guard = span.enter();

        match action {
            Action::FetchMovies { term, generation } => {
                self.spawn_fetch(term, generation);
                false
            }
            Action::RecordSearch { term, movie } => {
                self.spawn_record(term, movie);
                false
            }
            Action::LoadTrending => {
                self.spawn_trending();
                false
            }
            Action::Quit => true,
        }
    }

    fn spawn_fetch(&self, term: String, generation: u64) {
        let catalog = Arc::clone(&self.catalog);
        let responses = self.responses.clone();
        tokio::spawn(async move {
            tracing::debug!(term = %term, generation, source = catalog.name(), "fetching movies");
            let outcome = catalog.query_movies(&term).await;
            if let Err(error) = &outcome {
                tracing::warn!(term = %term, %error, "catalog query failed");
            }
            if responses
                .send(TaskResponse::MoviesFetched {
                    generation,
                    outcome,
                })
                .await
                .is_err()
            {
                tracing::debug!("response channel closed, dropping fetch result");
            }
        });
    }

    fn spawn_record(&self, term: String, movie: crate::domain::Movie) {
        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            match store.record_search(&term, &movie).await {
                Ok(()) => {
                    tracing::debug!(term = %term, store = store.name(), "search recorded");
                }
                Err(error) => {
                    // Best effort: a lost count never disturbs the UI.
                    tracing::warn!(term = %term, %error, "failed to record search");
                }
            }
        });
    }

    fn spawn_trending(&self) {
        let store = Arc::clone(&self.store);
        let responses = self.responses.clone();
        let limit = self.trending_limit;
        tokio::spawn(async move {
            match store.fetch_trending(limit).await {
                Ok(records) => {
                    if responses
                        .send(TaskResponse::TrendingLoaded { records })
                        .await
                        .is_err()
                    {
                        tracing::debug!("response channel closed, dropping trending result");
                    }
                }
                Err(error) => {
                    tracing::warn!(%error, store = store.name(), "failed to load trending");
                }
            }
        });
    }
}
