//! Query phase state machine types.
//!
//! This module defines the per-query-cycle state machine that drives what the
//! results area shows: nothing yet, a loading indicator, the fetched list, or
//! an error message.
//!
//! # State Machine
//!
//! ```text
//! Idle ──debounced term settles──► Loading ──success──► Success
//!                                     │
//!                                     └───failure─────► Error
//! ```
//!
//! Every settled term starts a fresh cycle from `Loading`; there is no
//! incremental merge between cycles.

/// Phase of the current catalog query cycle.
///
/// The loading indicator renders exactly while the phase is `Loading`; it is
/// guaranteed to clear on every exit path of a cycle, success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryPhase {
    /// No query has been dispatched yet.
    Idle,

    /// A catalog request is in flight for the latest settled term.
    Loading,

    /// The latest settled term resolved with a result list (possibly empty).
    Success,

    /// The latest settled term failed; the error message lives in
    /// `AppState::error_message` and the result list is cleared.
    Error,
}
