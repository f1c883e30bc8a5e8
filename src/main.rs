//! Marquee binary entry point.
//!
//! Wires configuration, services, and the terminal together, then drives the
//! event loop: crossterm input, debounce deadlines, and task responses are
//! multiplexed with `tokio::select!` and fed to the controller one event at a
//! time.

use std::io::{self, Write};

use crossterm::event::{Event as TermEvent, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, terminal};
use futures_util::StreamExt;
use tokio::sync::mpsc;

use marquee::app::{handle_event, AppState, Event};
use marquee::tasks::{TaskResponse, TaskRunner};
use marquee::ui::renderer;
use marquee::{build_catalog, build_store, observability, Config, Result};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("marquee: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::load()?;
    observability::init_tracing(&config);
    tracing::info!("starting marquee");

    let catalog = build_catalog(&config)?;
    let store = build_store(&config)?;
    let theme = config.resolve_theme()?;

    let mut state = AppState::new(theme, config.debounce());
    let (response_tx, response_rx) = mpsc::channel::<TaskResponse>(32);
    let runner = TaskRunner::new(catalog, store, response_tx, config.trending_limit());

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;

    let outcome = event_loop(&mut state, &runner, response_rx, &mut stdout).await;

    // Always restore the terminal, even when the loop failed.
    let _ = execute!(stdout, terminal::LeaveAlternateScreen, cursor::Show);
    let _ = terminal::disable_raw_mode();

    tracing::info!("marquee stopped");
    outcome
}

async fn event_loop(
    state: &mut AppState,
    runner: &TaskRunner,
    mut responses: mpsc::Receiver<TaskResponse>,
    out: &mut impl Write,
) -> Result<()> {
    let mut terminal_events = EventStream::new();

    let (render, actions) = handle_event(state, Event::Mounted)?;
    let mut quit = actions.into_iter().any(|action| runner.dispatch(action));
    if render {
        redraw(state, out)?;
    }

    while !quit {
        let deadline = state.debouncer.deadline();

        let event = tokio::select! {
            maybe_event = terminal_events.next() => match maybe_event {
                Some(Ok(term_event)) => map_terminal_event(&term_event, state),
                Some(Err(error)) => return Err(error.into()),
                // Input stream closed; nothing left to react to.
                None => Some(Event::Quit),
            },
            Some(response) = responses.recv() => Some(Event::Task(response)),
            () = sleep_until(deadline) => Some(Event::DebounceElapsed),
        };

        let Some(event) = event else {
            continue;
        };

        let (render, actions) = handle_event(state, event)?;
        for action in actions {
            if runner.dispatch(action) {
                quit = true;
            }
        }
        if render {
            redraw(state, out)?;
        }
    }

    Ok(())
}

/// Sleeps until the debounce deadline, or forever when nothing is pending.
async fn sleep_until(deadline: Option<tokio::time::Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

/// Translates a terminal event into a controller event.
///
/// Escape clears a non-empty search before it quits; Ctrl+C always quits.
fn map_terminal_event(term_event: &TermEvent, state: &AppState) -> Option<Event> {
    match term_event {
        TermEvent::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Event::Quit)
            }
            KeyCode::Char(c) => Some(Event::Char(c)),
            KeyCode::Backspace => Some(Event::Backspace),
            KeyCode::Up => Some(Event::SelectionUp),
            KeyCode::Down => Some(Event::SelectionDown),
            KeyCode::Esc => {
                if state.search_term.is_empty() {
                    Some(Event::Quit)
                } else {
                    Some(Event::ClearSearch)
                }
            }
            _ => None,
        },
        TermEvent::Resize(_, _) => Some(Event::Resize),
        _ => None,
    }
}

fn redraw(state: &AppState, out: &mut impl Write) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    let vm = state.compute_viewmodel(rows as usize, cols as usize);
    renderer::draw(out, &vm, &state.theme, rows as usize, cols as usize)
}
