//! Search debounce control.
//!
//! Delays propagation of the rapidly-changing search input so that a catalog
//! query fires only after the user stops typing for a quiet period (500 ms by
//! default). Purely a timing filter: it never touches the network and never
//! blocks the caller.
//!
//! The debouncer is deadline-based rather than callback-based: every input
//! change re-arms a deadline, the event loop sleeps on [`deadline`]
//! (`SearchDebouncer::deadline`), and when it fires, [`take_settled`]
//! (`SearchDebouncer::take_settled`) yields the stable value exactly once.

use std::time::Duration;

use tokio::time::Instant;

/// Default quiet window before a search term is considered settled.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Debounce controller for the search input.
#[derive(Debug)]
pub struct SearchDebouncer {
    /// Quiet window duration.
    delay: Duration,

    /// Latest input value awaiting settlement.
    pending: Option<String>,

    /// When the pending value becomes settled. Re-armed on every input.
    deadline: Option<Instant>,
}

impl SearchDebouncer {
    /// Creates a debouncer with the given quiet window.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            deadline: None,
        }
    }

    /// Records a new input value and re-arms the settlement deadline.
    ///
    /// Rapid successive calls collapse into a single trailing settlement of
    /// the last value.
    pub fn note_input(&mut self, value: String) {
        self.pending = Some(value);
        self.deadline = Some(Instant::now() + self.delay);
    }

    /// Returns the instant the pending value settles, if any input is pending.
    ///
    /// The event loop sleeps until this deadline; `None` means there is
    /// nothing to wait for.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Yields the settled value once its quiet window has elapsed.
    ///
    /// Returns `None` while input is still fresh or nothing is pending. The
    /// pending state is cleared on yield, so each settlement is observed
    /// exactly once.
    pub fn take_settled(&mut self) -> Option<String> {
        let deadline = self.deadline?;
        if Instant::now() < deadline {
            return None;
        }
        self.deadline = None;
        self.pending.take()
    }

    /// Whether an input value is waiting for its quiet window.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
