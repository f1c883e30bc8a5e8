//! Actions representing side effects to be executed by the runtime.
//!
//! This module defines the [`Action`] type, which represents imperative
//! commands produced by the event handler after processing user input, timer
//! settlements, or task responses. Actions bridge pure state transformations
//! and effectful operations: network calls run by the task layer, and
//! terminating the application.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event; the
//! runtime executes them in sequence, dispatching network work onto detached
//! tokio tasks so the UI loop never blocks.

use crate::domain::Movie;

/// Commands representing side effects to be executed by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Dispatches a catalog query for a settled search term.
    ///
    /// `generation` tags the request so the controller can discard responses
    /// from superseded queries: if a newer term settles while this request is
    /// still in flight, the stale response must not overwrite state.
    FetchMovies {
        /// Settled search term; empty means "discover popular".
        term: String,
        /// Sequence number of this query cycle.
        generation: u64,
    },

    /// Records a successful search in the trending store.
    ///
    /// Fire-and-forget: the task layer observes completion or failure only
    /// through the logger, never through application state.
    RecordSearch {
        /// The settled term that produced results.
        term: String,
        /// First movie of the result list, persisted alongside the term.
        movie: Movie,
    },

    /// Loads the top trending records for the trending panel.
    LoadTrending,

    /// Terminates the application.
    Quit,
}
