//! View model types representing renderable UI state.
//!
//! Immutable view models computed from application state. They contain no
//! business logic, only display-ready data: windowed movie rows, trending
//! panel entries, and the body mode (loading, error, or results).
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed
//! by the renderer.

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Header information (title, result count).
    pub header: HeaderInfo,

    /// Search bar state.
    pub search_bar: SearchBarInfo,

    /// Trending panel entries, in display order. Empty means the panel is
    /// not rendered.
    pub trending: Vec<TrendingItem>,

    /// What the results area shows.
    pub body: BodyView,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,
}

/// Results area content for the current query phase.
#[derive(Debug, Clone)]
pub enum BodyView {
    /// A query is in flight; show the loading indicator.
    Loading,

    /// The last query failed; show the message in the error style.
    Error(String),

    /// Windowed movie rows ready for display.
    Results(Vec<MovieItem>),
}

/// Display information for a single movie row.
#[derive(Debug, Clone)]
pub struct MovieItem {
    /// Movie title, already truncated to fit.
    pub title: String,

    /// Release year, or a placeholder when unknown.
    pub year: String,

    /// Formatted rating, e.g. `8.2`, or a placeholder when unknown.
    pub rating: String,

    /// Original language code, or a placeholder when unknown.
    pub language: String,

    /// Whether this row is the selection cursor.
    pub is_selected: bool,
}

/// One entry of the trending panel.
#[derive(Debug, Clone)]
pub struct TrendingItem {
    /// 1-based display rank.
    pub rank: usize,

    /// The trending search term.
    pub term: String,

    /// How many times the term was searched.
    pub count: i64,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text, including the visible result count.
    pub title: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search input text.
    pub query: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}
