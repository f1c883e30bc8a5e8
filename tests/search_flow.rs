//! End-to-end search flow tests over stub backends.
//!
//! Drives the controller, task runner, and response channel exactly as the
//! binary does, replacing only the network edges: a stub catalog serving
//! canned results and an in-memory trending store.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use marquee::app::{handle_event, AppState, Event, QueryPhase};
use marquee::catalog::CatalogClient;
use marquee::domain::{MarqueeError, Movie, Result};
use marquee::tasks::{TaskResponse, TaskRunner};
use marquee::trending::{TrendingRecord, TrendingStore};
use marquee::ui::Theme;

fn movie(id: i64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        poster_path: Some("/poster.jpg".to_string()),
        popularity: Some(50.0),
        vote_average: Some(7.9),
        release_date: Some("2021-10-22".to_string()),
        original_language: Some("en".to_string()),
    }
}

/// Catalog stub: empty term serves the "popular" list, known terms serve
/// matches, `"fail"` serves an application error.
struct StubCatalog;

#[async_trait]
impl CatalogClient for StubCatalog {
    async fn query_movies(&self, term: &str) -> Result<Vec<Movie>> {
        match term {
            "" => Ok(vec![movie(1, "Popular One"), movie(2, "Popular Two")]),
            "dune" => Ok(vec![movie(10, "Dune"), movie(11, "Dune: Part Two")]),
            "fail" => Err(MarqueeError::Application("X".to_string())),
            _ => Ok(Vec::new()),
        }
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

/// In-memory trending store tracking recorded searches.
#[derive(Default)]
struct StubStore {
    recorded: Mutex<Vec<(String, i64)>>,
    trending: Mutex<Vec<TrendingRecord>>,
}

#[async_trait]
impl TrendingStore for StubStore {
    async fn record_search(&self, term: &str, movie: &Movie) -> Result<()> {
        self.recorded
            .lock()
            .expect("recorded lock")
            .push((term.to_string(), movie.id));
        Ok(())
    }

    async fn fetch_trending(&self, limit: usize) -> Result<Vec<TrendingRecord>> {
        let mut records = self.trending.lock().expect("trending lock").clone();
        records.truncate(limit);
        Ok(records)
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

struct Harness {
    state: AppState,
    runner: TaskRunner,
    responses: mpsc::Receiver<TaskResponse>,
    store: Arc<StubStore>,
}

impl Harness {
    fn new() -> Self {
        let store = Arc::new(StubStore::default());
        let (tx, rx) = mpsc::channel(32);
        let runner = TaskRunner::new(
            Arc::new(StubCatalog),
            Arc::clone(&store) as Arc<dyn TrendingStore>,
            tx,
            5,
        );
        Self {
            state: AppState::new(Theme::default(), Duration::from_millis(500)),
            runner,
            responses: rx,
            store,
        }
    }

    /// Feeds one event through the controller and dispatches its actions.
    fn step(&mut self, event: Event) {
        let (_, actions) = handle_event(&mut self.state, event).expect("handled");
        for action in actions {
            self.runner.dispatch(action);
        }
    }

    /// Awaits the next task response and feeds it back as an event.
    async fn pump_response(&mut self) {
        let response = self.responses.recv().await.expect("task response");
        self.step(Event::Task(response));
    }
}

#[tokio::test(start_paused = true)]
async fn mount_loads_popular_movies_and_trending() {
    let mut harness = Harness::new();
    harness
        .store
        .trending
        .lock()
        .expect("trending lock")
        .push(TrendingRecord::new("t1", "dune", 10, None));

    harness.step(Event::Mounted);
    assert_eq!(harness.state.phase, QueryPhase::Loading);

    harness.pump_response().await;
    harness.pump_response().await;

    assert_eq!(harness.state.phase, QueryPhase::Success);
    assert_eq!(harness.state.movie_list.len(), 2);
    assert_eq!(harness.state.trending.len(), 1);
    // The initial popular listing is browsing, not searching.
    assert!(harness.store.recorded.lock().expect("lock").is_empty());
}

#[tokio::test(start_paused = true)]
async fn settled_search_fetches_and_records_once() {
    let mut harness = Harness::new();

    for c in "dune".chars() {
        harness.step(Event::Char(c));
    }
    tokio::time::advance(Duration::from_millis(500)).await;
    harness.step(Event::DebounceElapsed);
    assert_eq!(harness.state.phase, QueryPhase::Loading);

    harness.pump_response().await;

    assert_eq!(harness.state.phase, QueryPhase::Success);
    assert_eq!(harness.state.movie_list[0].title, "Dune");

    // Recording runs on a detached task; yield so it completes.
    tokio::task::yield_now().await;
    let recorded = harness.store.recorded.lock().expect("lock").clone();
    assert_eq!(recorded, vec![("dune".to_string(), 10)]);
}

#[tokio::test(start_paused = true)]
async fn failed_search_shows_the_server_message() {
    let mut harness = Harness::new();

    for c in "fail".chars() {
        harness.step(Event::Char(c));
    }
    tokio::time::advance(Duration::from_millis(500)).await;
    harness.step(Event::DebounceElapsed);
    harness.pump_response().await;

    assert_eq!(harness.state.phase, QueryPhase::Error);
    assert_eq!(harness.state.error_message.as_deref(), Some("X"));
    assert!(harness.state.movie_list.is_empty());
    assert!(harness.store.recorded.lock().expect("lock").is_empty());
}

#[tokio::test(start_paused = true)]
async fn superseded_query_cannot_overwrite_newer_results() {
    let mut harness = Harness::new();

    // First settle "zzzz" (no results), then "dune" before the first
    // response is consumed.
    for c in "zzzz".chars() {
        harness.step(Event::Char(c));
    }
    tokio::time::advance(Duration::from_millis(500)).await;
    harness.step(Event::DebounceElapsed);

    harness.state.search_term.clear();
    for c in "dune".chars() {
        harness.step(Event::Char(c));
    }
    tokio::time::advance(Duration::from_millis(500)).await;
    harness.step(Event::DebounceElapsed);

    // Both responses arrive; the stale one must leave no trace.
    harness.pump_response().await;
    harness.pump_response().await;

    assert_eq!(harness.state.phase, QueryPhase::Success);
    assert_eq!(harness.state.debounced_term, "dune");
    assert_eq!(harness.state.movie_list.len(), 2);
    assert_eq!(harness.state.movie_list[0].title, "Dune");
}

#[tokio::test(start_paused = true)]
async fn empty_results_render_success_with_no_recording() {
    let mut harness = Harness::new();

    for c in "zzzz".chars() {
        harness.step(Event::Char(c));
    }
    tokio::time::advance(Duration::from_millis(500)).await;
    harness.step(Event::DebounceElapsed);
    harness.pump_response().await;

    assert_eq!(harness.state.phase, QueryPhase::Success);
    assert!(harness.state.movie_list.is_empty());
    tokio::task::yield_now().await;
    assert!(harness.store.recorded.lock().expect("lock").is_empty());
}
