//! Central event handler implementing the controller state machine.
//!
//! Every input the application reacts to arrives here as an [`Event`]:
//! keystrokes, debounce settlements, and task responses alike. The handler
//! mutates [`AppState`] and returns `(should_render, actions)`, keeping all
//! side effects in the returned [`Action`] list for the runtime to execute.
//!
//! # Event Flow
//!
//! ```text
//! Event -> handle_event -> (bool, Vec<Action>)
//!              |
//!              v
//!          AppState
//! ```
//!
//! Stale catalog responses are filtered here: a response whose generation is
//! not the latest dispatched one is dropped without touching state.

use tracing::debug_span;

use crate::app::actions::Action;
use crate::app::state::{AppState, GENERIC_FETCH_ERROR};
use crate::domain::{MarqueeError, Result};
use crate::tasks::TaskResponse;

/// Inputs processed by the controller.
#[derive(Debug)]
pub enum Event {
    /// The application just started; kick off the initial loads.
    Mounted,

    /// A printable character was typed into the search bar.
    Char(char),

    /// The last character of the search input was deleted.
    Backspace,

    /// The search input was cleared entirely.
    ClearSearch,

    /// The selection cursor moved up.
    SelectionUp,

    /// The selection cursor moved down.
    SelectionDown,

    /// The debounce quiet window elapsed; a settled term may be available.
    DebounceElapsed,

    /// A background task finished and reported back.
    Task(TaskResponse),

    /// The terminal was resized.
    Resize,

    /// The user asked to quit.
    Quit,
}

/// Processes one event against the application state.
///
/// Returns whether the UI should re-render and the side effects to execute.
///
/// # Errors
///
/// Currently infallible in practice; the `Result` return keeps the signature
/// stable for handlers that may need to propagate errors.
pub fn handle_event(state: &mut AppState, event: Event) -> Result<(bool, Vec<Action>)> {
    let span = debug_span!("handle_event");
    let _guard = span.enter();

    match event {
        Event::Mounted => Ok(handle_mounted(state)),
        Event::Char(c) => {
            state.search_term.push(c);
            state.debouncer.note_input(state.search_term.clone());
            Ok((true, Vec::new()))
        }
        Event::Backspace => {
            if state.search_term.pop().is_some() {
                state.debouncer.note_input(state.search_term.clone());
            }
            Ok((true, Vec::new()))
        }
        Event::ClearSearch => {
            if !state.search_term.is_empty() {
                state.search_term.clear();
                state.debouncer.note_input(String::new());
            }
            Ok((true, Vec::new()))
        }
        Event::SelectionUp => {
            state.move_selection_up();
            Ok((true, Vec::new()))
        }
        Event::SelectionDown => {
            state.move_selection_down();
            Ok((true, Vec::new()))
        }
        Event::DebounceElapsed => Ok(handle_debounce_elapsed(state)),
        Event::Task(response) => Ok(handle_task_response(state, response)),
        Event::Resize => Ok((true, Vec::new())),
        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

/// Startup: load the trending panel and the popular-movies discover feed.
fn handle_mounted(state: &mut AppState) -> (bool, Vec<Action>) {
    let generation = state.begin_query(String::new());
    (
        true,
        vec![
            Action::LoadTrending,
            Action::FetchMovies {
                term: String::new(),
                generation,
            },
        ],
    )
}

/// Settlement check: dispatch a query only when the settled term differs from
/// the one already queried.
fn handle_debounce_elapsed(state: &mut AppState) -> (bool, Vec<Action>) {
    let Some(term) = state.debouncer.take_settled() else {
        return (false, Vec::new());
    };

    if term == state.debounced_term {
        tracing::debug!(term = %term, "settled term unchanged, skipping query");
        return (false, Vec::new());
    }

    let generation = state.begin_query(term.clone());
    (true, vec![Action::FetchMovies { term, generation }])
}

fn handle_task_response(state: &mut AppState, response: TaskResponse) -> (bool, Vec<Action>) {
    match response {
        TaskResponse::MoviesFetched {
            generation,
            outcome,
        } => {
            if generation != state.query_generation {
                tracing::debug!(
                    stale = generation,
                    current = state.query_generation,
                    "discarding stale catalog response"
                );
                return (false, Vec::new());
            }
            match outcome {
                Ok(movies) => {
                    let record = record_action(state, &movies);
                    state.apply_success(movies);
                    (true, record.into_iter().collect())
                }
                Err(error) => {
                    state.apply_error(user_message(&error));
                    (true, Vec::new())
                }
            }
        }
        TaskResponse::TrendingLoaded { records } => {
            tracing::debug!(record_count = records.len(), "trending panel loaded");
            state.trending = records;
            (true, Vec::new())
        }
    }
}

/// A search is recorded only when the settled term is non-empty and produced
/// at least one result. The discover feed never counts as a search.
fn record_action(state: &AppState, movies: &[crate::domain::Movie]) -> Option<Action> {
    if state.debounced_term.is_empty() {
        return None;
    }
    let first = movies.first()?;
    Some(Action::RecordSearch {
        term: state.debounced_term.clone(),
        movie: first.clone(),
    })
}

/// Maps a query failure to its user-facing message.
///
/// Application-level failures surface the server's own message verbatim;
/// everything else collapses into the generic copy.
fn user_message(error: &MarqueeError) -> String {
    match error {
        MarqueeError::Application(message) => message.clone(),
        _ => GENERIC_FETCH_ERROR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::QueryPhase;
    use crate::domain::Movie;
    use crate::ui::theme::Theme;
    use std::time::Duration;

    fn new_state() -> AppState {
        AppState::new(Theme::default(), Duration::from_millis(500))
    }

    fn movie(id: i64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            poster_path: Some("/p.jpg".to_string()),
            popularity: Some(10.0),
            vote_average: Some(8.0),
            release_date: Some("2021-10-22".to_string()),
            original_language: Some("en".to_string()),
        }
    }

    #[test]
    fn mount_loads_trending_and_popular_movies() {
        let mut state = new_state();

        let (render, actions) = handle_event(&mut state, Event::Mounted).expect("handled");

        assert!(render);
        assert_eq!(state.phase, QueryPhase::Loading);
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0], Action::LoadTrending);
        assert_eq!(
            actions[1],
            Action::FetchMovies {
                term: String::new(),
                generation: 1,
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn settled_term_dispatches_one_query() {
        let mut state = new_state();

        for c in "dune".chars() {
            handle_event(&mut state, Event::Char(c)).expect("handled");
        }
        tokio::time::advance(Duration::from_millis(500)).await;

        let (render, actions) =
            handle_event(&mut state, Event::DebounceElapsed).expect("handled");

        assert!(render);
        assert_eq!(state.phase, QueryPhase::Loading);
        assert_eq!(
            actions,
            vec![Action::FetchMovies {
                term: "dune".to_string(),
                generation: 1,
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn unchanged_settled_term_is_skipped() {
        let mut state = new_state();
        state.begin_query("dune".to_string());
        state.apply_success(vec![movie(1, "Dune")]);

        state.debouncer.note_input("dune".to_string());
        tokio::time::advance(Duration::from_millis(500)).await;

        let (render, actions) =
            handle_event(&mut state, Event::DebounceElapsed).expect("handled");

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.phase, QueryPhase::Success);
    }

    #[test]
    fn successful_fetch_records_exactly_one_search() {
        let mut state = new_state();
        let generation = state.begin_query("dune".to_string());

        let (render, actions) = handle_event(
            &mut state,
            Event::Task(TaskResponse::MoviesFetched {
                generation,
                outcome: Ok(vec![movie(1, "Dune"), movie(2, "Dune: Part Two")]),
            }),
        )
        .expect("handled");

        assert!(render);
        assert_eq!(state.phase, QueryPhase::Success);
        assert_eq!(state.movie_list.len(), 2);
        assert_eq!(
            actions,
            vec![Action::RecordSearch {
                term: "dune".to_string(),
                movie: movie(1, "Dune"),
            }]
        );
    }

    #[test]
    fn empty_term_fetch_is_never_recorded() {
        let mut state = new_state();
        let generation = state.begin_query(String::new());

        let (_, actions) = handle_event(
            &mut state,
            Event::Task(TaskResponse::MoviesFetched {
                generation,
                outcome: Ok(vec![movie(1, "Dune")]),
            }),
        )
        .expect("handled");

        assert!(actions.is_empty());
        assert_eq!(state.phase, QueryPhase::Success);
    }

    #[test]
    fn empty_results_are_never_recorded() {
        let mut state = new_state();
        let generation = state.begin_query("zzzz".to_string());

        let (_, actions) = handle_event(
            &mut state,
            Event::Task(TaskResponse::MoviesFetched {
                generation,
                outcome: Ok(Vec::new()),
            }),
        )
        .expect("handled");

        assert!(actions.is_empty());
        assert_eq!(state.phase, QueryPhase::Success);
        assert!(state.movie_list.is_empty());
    }

    #[test]
    fn stale_generation_response_is_discarded() {
        let mut state = new_state();
        let stale = state.begin_query("du".to_string());
        state.begin_query("dune".to_string());

        let (render, actions) = handle_event(
            &mut state,
            Event::Task(TaskResponse::MoviesFetched {
                generation: stale,
                outcome: Ok(vec![movie(1, "Duel")]),
            }),
        )
        .expect("handled");

        assert!(!render);
        assert!(actions.is_empty());
        // The newer query is still in flight; the stale result changed nothing.
        assert_eq!(state.phase, QueryPhase::Loading);
        assert!(state.movie_list.is_empty());
    }

    #[test]
    fn application_error_surfaces_server_message() {
        let mut state = new_state();
        state.apply_success(vec![movie(1, "Dune")]);
        let generation = state.begin_query("dune".to_string());

        handle_event(
            &mut state,
            Event::Task(TaskResponse::MoviesFetched {
                generation,
                outcome: Err(MarqueeError::Application("X".to_string())),
            }),
        )
        .expect("handled");

        assert_eq!(state.phase, QueryPhase::Error);
        assert_eq!(state.error_message.as_deref(), Some("X"));
        assert!(state.movie_list.is_empty());
    }

    #[test]
    fn transport_error_surfaces_generic_message() {
        let mut state = new_state();
        let generation = state.begin_query("dune".to_string());

        handle_event(
            &mut state,
            Event::Task(TaskResponse::MoviesFetched {
                generation,
                outcome: Err(MarqueeError::Transport { status: 503 }),
            }),
        )
        .expect("handled");

        assert_eq!(state.phase, QueryPhase::Error);
        assert_eq!(state.error_message.as_deref(), Some(GENERIC_FETCH_ERROR));
    }

    #[test]
    fn trending_response_fills_the_panel() {
        let mut state = new_state();

        let (render, actions) = handle_event(
            &mut state,
            Event::Task(TaskResponse::TrendingLoaded {
                records: vec![crate::trending::TrendingRecord::new("a", "dune", 1, None)],
            }),
        )
        .expect("handled");

        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.trending.len(), 1);
    }

    #[test]
    fn typing_rearms_the_debouncer() {
        let mut state = new_state();

        handle_event(&mut state, Event::Char('d')).expect("handled");
        assert!(state.debouncer.has_pending());
        assert_eq!(state.search_term, "d");

        handle_event(&mut state, Event::Backspace).expect("handled");
        assert!(state.search_term.is_empty());
        assert!(state.debouncer.has_pending());
    }

    #[test]
    fn backspace_on_empty_input_is_inert() {
        let mut state = new_state();

        handle_event(&mut state, Event::Backspace).expect("handled");

        assert!(state.search_term.is_empty());
        assert!(!state.debouncer.has_pending());
    }

    #[test]
    fn quit_emits_the_quit_action() {
        let mut state = new_state();

        let (render, actions) = handle_event(&mut state, Event::Quit).expect("handled");

        assert!(!render);
        assert_eq!(actions, vec![Action::Quit]);
    }
}
