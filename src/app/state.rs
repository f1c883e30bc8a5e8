//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! browser, along with methods for query-cycle transitions, selection
//! management, and UI view model generation. It is the single source of truth
//! for all transient UI state; every query cycle fully replaces the result
//! list and error message, never merges.
//!
//! # State Components
//!
//! - **Search input**: raw `search_term` plus the settled `debounced_term`
//! - **Query cycle**: [`QueryPhase`] machine, error message, and the
//!   generation counter guarding against stale in-flight responses
//! - **Results**: the movie list for the latest settled term, with a
//!   selection cursor
//! - **Trending**: the one-shot panel data loaded at startup

use std::time::Duration;

use crate::app::debounce::SearchDebouncer;
use crate::app::modes::QueryPhase;
use crate::domain::Movie;
use crate::trending::TrendingRecord;
use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BodyView, FooterInfo, HeaderInfo, MovieItem, SearchBarInfo, TrendingItem, UiViewModel,
};

/// Generic user-facing message for transport and fetch failures.
///
/// Application-level failures carry the server-provided message instead.
pub const GENERIC_FETCH_ERROR: &str = "Error fetching movies. Please try again later.";

/// Central application state container.
///
/// Mutated by the event handler in response to user input, debounce
/// settlements, and task responses. View models are computed on demand from
/// state snapshots.
#[derive(Debug)]
pub struct AppState {
    /// Raw search input, updated on every keystroke.
    pub search_term: String,

    /// The last settled search term, as dispatched to the catalog.
    pub debounced_term: String,

    /// Movie list for the latest settled query. Replaced wholesale each cycle.
    pub movie_list: Vec<Movie>,

    /// Trending panel records, descending by count. Empty until loaded.
    pub trending: Vec<TrendingRecord>,

    /// Phase of the current query cycle.
    pub phase: QueryPhase,

    /// User-visible error message when `phase` is [`QueryPhase::Error`].
    pub error_message: Option<String>,

    /// Zero-based selection cursor within `movie_list`.
    pub selected_index: usize,

    /// Sequence number of the latest dispatched catalog query.
    ///
    /// Responses tagged with an older generation are discarded, so a slow
    /// stale request can never overwrite a newer query's results.
    pub query_generation: u64,

    /// Debounce controller for the search input.
    pub debouncer: SearchDebouncer,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a fresh application state with the given theme and debounce
    /// delay.
    #[must_use]
    pub fn new(theme: Theme, debounce_delay: Duration) -> Self {
        Self {
            search_term: String::new(),
            debounced_term: String::new(),
            movie_list: Vec::new(),
            trending: Vec::new(),
            phase: QueryPhase::Idle,
            error_message: None,
            selected_index: 0,
            query_generation: 0,
            debouncer: SearchDebouncer::new(debounce_delay),
            theme,
        }
    }

    /// Begins a new query cycle for a settled term.
    ///
    /// Records the term as the debounced term, enters `Loading`, clears any
    /// prior error, and bumps the generation counter. Returns the generation
    /// to tag the dispatched request with.
    pub fn begin_query(&mut self, term: String) -> u64 {
        tracing::debug!(term = %term, "starting query cycle");
        self.debounced_term = term;
        self.phase = QueryPhase::Loading;
        self.error_message = None;
        self.query_generation += 1;
        self.query_generation
    }

    /// Applies a successful catalog response for the current cycle.
    ///
    /// Replaces the movie list, resets the selection cursor, and leaves the
    /// loading state.
    pub fn apply_success(&mut self, movies: Vec<Movie>) {
        tracing::debug!(result_count = movies.len(), "query cycle succeeded");
        self.movie_list = movies;
        self.selected_index = 0;
        self.phase = QueryPhase::Success;
        self.error_message = None;
    }

    /// Applies a failed catalog response for the current cycle.
    ///
    /// Clears the movie list and records the user-visible message. The
    /// loading indicator clears on this path exactly as on success.
    pub fn apply_error(&mut self, message: String) {
        tracing::debug!(message = %message, "query cycle failed");
        self.movie_list.clear();
        self.selected_index = 0;
        self.phase = QueryPhase::Error;
        self.error_message = Some(message);
    }

    /// Moves the selection cursor down by one, wrapping to the top at the end.
    ///
    /// No-op while the movie list is empty.
    pub fn move_selection_down(&mut self) {
        if self.movie_list.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.movie_list.len();
    }

    /// Moves the selection cursor up by one, wrapping to the bottom at the top.
    ///
    /// No-op while the movie list is empty.
    pub fn move_selection_up(&mut self) {
        if self.movie_list.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.movie_list.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the movie under the selection cursor, if any.
    #[must_use]
    pub fn selected_movie(&self) -> Option<&Movie> {
        self.movie_list.get(self.selected_index)
    }

    /// Computes a renderable view model from current state and terminal size.
    ///
    /// Handles results windowing (a slice of rows centered on the selection),
    /// title truncation, and the body mode for the current query phase.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UiViewModel {
        let header = HeaderInfo {
            title: match self.phase {
                QueryPhase::Success => {
                    format!(" Marquee \u{2014} {} movies ", self.movie_list.len())
                }
                _ => " Marquee ".to_string(),
            },
        };

        let search_bar = SearchBarInfo {
            query: self.search_term.clone(),
        };

        let trending: Vec<TrendingItem> = self
            .trending
            .iter()
            .enumerate()
            .map(|(idx, record)| TrendingItem {
                rank: idx + 1,
                term: record.search_term.clone(),
                count: record.count,
            })
            .collect();

        let body = match self.phase {
            QueryPhase::Loading => BodyView::Loading,
            QueryPhase::Error => BodyView::Error(
                self.error_message
                    .clone()
                    .unwrap_or_else(|| GENERIC_FETCH_ERROR.to_string()),
            ),
            QueryPhase::Idle | QueryPhase::Success => {
                BodyView::Results(self.compute_movie_items(rows, cols, trending.len()))
            }
        };

        let footer = FooterInfo {
            keybindings: "type to search  \u{2191}/\u{2193}: navigate  Esc: clear  Ctrl+C: quit"
                .to_string(),
        };

        UiViewModel {
            header,
            search_bar,
            trending,
            body,
            footer,
        }
    }

    /// Builds the windowed movie rows for the results area.
    ///
    /// The window is centered on the selection and clamped to the list
    /// bounds, maximizing visible rows near either end.
    fn compute_movie_items(
        &self,
        rows: usize,
        cols: usize,
        trending_len: usize,
    ) -> Vec<MovieItem> {
        let available = Self::available_rows(rows, trending_len);
        if available == 0 || self.movie_list.is_empty() {
            return Vec::new();
        }

        let mut start = self.selected_index.saturating_sub(available / 2);
        let end = (start + available).min(self.movie_list.len());
        if end - start < available && self.movie_list.len() >= available {
            start = end.saturating_sub(available);
        }

        // Leave room for the cursor marker and the year/rating/language tail.
        let title_width = cols.saturating_sub(24).max(10);

        self.movie_list[start..end]
            .iter()
            .enumerate()
            .map(|(relative_idx, movie)| MovieItem {
                title: truncate(&movie.title, title_width),
                year: movie
                    .release_year()
                    .map_or_else(|| "\u{2014}".to_string(), ToString::to_string),
                rating: movie
                    .vote_average
                    .map_or_else(|| " \u{2014} ".to_string(), |v| format!("{v:.1}")),
                language: movie
                    .original_language
                    .clone()
                    .unwrap_or_else(|| "--".to_string()),
                is_selected: start + relative_idx == self.selected_index,
            })
            .collect()
    }

    /// Rows left for the results list after subtracting UI chrome.
    ///
    /// Chrome: header (1), search bar (2), trending panel (entries + title
    /// when present), results title (1), footer (1).
    fn available_rows(total_rows: usize, trending_len: usize) -> usize {
        let trending_rows = if trending_len == 0 {
            0
        } else {
            trending_len + 1
        };
        total_rows.saturating_sub(5 + trending_rows)
    }
}
