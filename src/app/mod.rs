//! Application controller: state machine, debounce, and event handling.

pub mod actions;
pub mod debounce;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use debounce::{SearchDebouncer, DEFAULT_DEBOUNCE};
pub use handler::{handle_event, Event};
pub use modes::QueryPhase;
pub use state::{AppState, GENERIC_FETCH_ERROR};
