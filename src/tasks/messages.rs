//! Task response messages delivered back to the UI loop.
//!
//! This module defines the protocol between detached background tasks and the
//! application controller. Tasks run on the tokio runtime and report their
//! outcome over an in-process channel; the controller consumes responses as
//! ordinary events.
//!
//! Recording a search deliberately has no response variant: it is
//! fire-and-forget, observed only by the logger.

use crate::domain::{Movie, Result};
use crate::trending::TrendingRecord;

/// Responses sent from background tasks back to the UI loop.
#[derive(Debug)]
pub enum TaskResponse {
    /// A catalog query settled, successfully or not.
    ///
    /// `generation` echoes the value from the dispatching
    /// [`Action::FetchMovies`](crate::app::Action::FetchMovies); the
    /// controller discards responses whose generation is not the latest, so a
    /// slow stale request can never overwrite a newer query's state.
    MoviesFetched {
        /// Sequence number of the query cycle that produced this response.
        generation: u64,
        /// The fetched movie list, or the error that ended the cycle.
        outcome: Result<Vec<Movie>>,
    },

    /// The trending panel data was loaded.
    ///
    /// Only emitted on success; a failed load is logged by the task layer and
    /// the panel stays absent.
    TrendingLoaded {
        /// Up to the configured limit of records, descending by count.
        records: Vec<TrendingRecord>,
    },
}
