//! Keyboard event handling for the TUI.
//!
//! Maps crossterm keyboard events to application state changes.
//! Key behavior depends on which panel has focus.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};

/// Handles a keyboard event and updates the app state accordingly.
///
/// Returns `true` if the application should quit, `false` otherwise.
///
/// # Event Handling
///
/// - `Ctrl+C`: Quit from any focus state; `q` quits outside the search input
/// - `Tab` / `Shift+Tab`: Cycle focus between panels
/// - `Esc`: Return to search input, clearing the selection (or the query when already there)
/// - `Ctrl+T` / `Ctrl+G`: Cycle the type / category filter
/// - When `SearchInput` focused: character input edits the query
/// - When `ResultList` focused: j/k navigation, `p` toggles pin, `d` removes
/// - When `DetailView` focused: j/k scrolling
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use lifeorg::tui::{App, event::handle_key_event};
/// use lifeorg::{Controller, RecordStore};
/// use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
///
/// let mut app = App::new(Controller::new(RecordStore::new(), Duration::from_millis(300)));
/// let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
/// assert!(handle_key_event(&mut app, key, Instant::now()));
/// ```
pub fn handle_key_event(app: &mut App, key: KeyEvent, now: Instant) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return true,
            KeyCode::Char('t') => app.cycle_type_filter(now),
            KeyCode::Char('g') => app.cycle_category_filter(now),
            _ => {}
        }
        return false;
    }

    if key.code == KeyCode::Char('q')
        && key.modifiers.is_empty()
        && app.focus() != Focus::SearchInput
    {
        return true;
    }

    // Global focus cycling with Tab / Shift+Tab (BackTab)
    if key.code == KeyCode::Tab {
        app.next_focus();
        return false;
    }
    if key.code == KeyCode::BackTab {
        app.prev_focus();
        return false;
    }

    if key.code == KeyCode::Esc {
        if app.focus() == Focus::SearchInput && app.selected_index().is_none() {
            app.clear_search(now);
        }
        app.reset_focus();
        app.clear_selection();
        return false;
    }

    match app.focus() {
        Focus::SearchInput => handle_search_input(app, key, now),
        Focus::ResultList => handle_result_list(app, key, now),
        Focus::DetailView => handle_detail_view(app, key),
    }

    false
}

/// Character input and backspace edit the query; the search is debounced.
fn handle_search_input(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char(c) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            app.push_search_char(c, now);
        }
        KeyCode::Backspace => {
            app.pop_search_char(now);
        }
        KeyCode::Enter | KeyCode::Down => {
            app.next_focus();
        }
        _ => {}
    }
}

fn handle_result_list(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Char('p') => app.toggle_pin_selected(now),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(now),
        KeyCode::Enter => app.next_focus(),
        _ => {}
    }
}

fn handle_detail_view(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.scroll_detail_down(1),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_detail_up(1),
        _ => {}
    }
}
