//! Terminal User Interface module for lifeorg.
//!
//! Provides a three-panel TUI with search input, ranked result list and
//! detail view using ratatui for rendering and crossterm for terminal management.

use std::io;
use std::panic;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self as crossterm_event, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::controller::Controller;

mod app;
pub mod event;
mod ui;

pub use app::{App, Focus};

/// Upper bound on how long the loop waits for input before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Initializes the terminal for TUI rendering.
///
/// Enables raw mode and enters the alternate screen.
///
/// # Errors
///
/// Returns an error if terminal initialization fails.
fn init_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("failed to create terminal")?;
    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// # Errors
///
/// Returns an error if terminal restoration fails.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to show cursor")?;
    Ok(())
}

/// Minimal terminal restoration for the panic hook. Errors are ignored.
fn restore_terminal_panic() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Installs a panic hook that restores the terminal before the original hook runs.
fn init_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal_panic();
        original_hook(panic_info);
    }));
}

/// How long to wait for input: never past a pending search deadline.
fn poll_timeout(app: &App, now: Instant) -> Duration {
    app.controller()
        .time_until_search(now)
        .map_or(POLL_INTERVAL, |remaining| remaining.min(POLL_INTERVAL))
}

/// Launches the interactive search view over the controller's records.
///
/// # Errors
///
/// Returns an error if terminal setup, event polling or rendering fails.
/// Terminal state is always restored, even on error.
pub fn run(controller: Controller) -> Result<()> {
    init_panic_hook();
    let mut app = App::new(controller);
    run_event_loop(&mut app)
}

/// Runs the main event loop for the TUI.
///
/// # Errors
///
/// Returns an error if event polling, rendering, or terminal operations fail.
pub fn run_event_loop(app: &mut App) -> Result<()> {
    let mut terminal = init_terminal()?;

    let result = run_event_loop_internal(app, &mut terminal);

    // Always restore terminal state
    if let Err(e) = restore_terminal(&mut terminal) {
        eprintln!("Error restoring terminal: {e}");
    }

    result
}

fn run_event_loop_internal(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        app.tick(Instant::now());

        terminal.draw(|frame| {
            ui::draw(frame, app);
        })?;

        if crossterm_event::poll(poll_timeout(app, Instant::now()))?
            && let Event::Key(key) = crossterm_event::read()?
            && key.kind == KeyEventKind::Press
        {
            let should_quit = event::handle_key_event(app, key, Instant::now());
            if should_quit {
                break;
            }
        }
    }

    Ok(())
}
