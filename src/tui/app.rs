use std::time::Instant;

use crate::controller::Controller;
use crate::models::RecordId;
use crate::query::SearchResult;
use crate::state::{Action, SearchStatus};

/// Application state for the TUI.
///
/// Wraps the [`Controller`], which owns the records, the query and the
/// published results, and adds the view-only state: focus, selection and
/// detail scrolling.
#[derive(Debug)]
pub struct App {
    controller: Controller,
    /// Currently selected result index (None if no selection)
    selected_index: Option<usize>,
    /// Currently focused panel
    focus: Focus,
    /// Scroll offset for detail view
    detail_scroll: u16,
    /// One-line feedback shown in the shortcut bar
    message: Option<String>,
}

/// Panel focus state for keyboard navigation.
///
/// Determines which panel receives keyboard input and how keys are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Search input is focused (typing edits the query)
    SearchInput,
    /// Result list is focused (j/k navigation, pin and delete)
    ResultList,
    /// Detail view is focused (j/k scrolling)
    DetailView,
}

impl App {
    /// Creates an App over a controller.
    ///
    /// Default focus is `SearchInput`, nothing is selected.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use lifeorg::tui::{App, Focus};
    /// use lifeorg::{Controller, RecordStore};
    ///
    /// let app = App::new(Controller::new(RecordStore::new(), Duration::from_millis(300)));
    /// assert!(app.results().is_empty());
    /// assert_eq!(app.focus(), Focus::SearchInput);
    /// ```
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            selected_index: None,
            focus: Focus::SearchInput,
            detail_scroll: 0,
            message: None,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Returns the currently displayed results.
    pub fn results(&self) -> &[SearchResult] {
        self.controller.state().results()
    }

    /// Returns the search input buffer.
    pub fn search_input(&self) -> &str {
        self.controller.state().query_input()
    }

    /// Returns whether the displayed results are stale.
    pub fn is_searching(&self) -> bool {
        self.controller.state().status() == SearchStatus::Pending
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Returns the currently selected result, if any.
    pub fn selected_result(&self) -> Option<&SearchResult> {
        self.selected_index.and_then(|i| self.results().get(i))
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Cycles focus: `SearchInput` -> `ResultList` -> `DetailView` -> `SearchInput`.
    pub fn next_focus(&mut self) {
        self.focus = match self.focus {
            Focus::SearchInput => Focus::ResultList,
            Focus::ResultList => Focus::DetailView,
            Focus::DetailView => Focus::SearchInput,
        };
        self.auto_select_on_result_list_focus();
    }

    /// Cycles focus in reverse order.
    pub fn prev_focus(&mut self) {
        self.focus = match self.focus {
            Focus::SearchInput => Focus::DetailView,
            Focus::ResultList => Focus::SearchInput,
            Focus::DetailView => Focus::ResultList,
        };
        self.auto_select_on_result_list_focus();
    }

    /// Auto-selects the first result when entering ResultList focus with no selection.
    fn auto_select_on_result_list_focus(&mut self) {
        if self.focus == Focus::ResultList
            && self.selected_index.is_none()
            && !self.results().is_empty()
        {
            self.selected_index = Some(0);
        }
    }

    /// Returns focus to `SearchInput` (Esc key behavior).
    pub fn reset_focus(&mut self) {
        self.focus = Focus::SearchInput;
    }

    pub fn clear_selection(&mut self) {
        self.selected_index = None;
    }

    /// Moves selection down, wrapping to the first result.
    pub fn select_next(&mut self) {
        let len = self.results().len();
        if len == 0 {
            self.selected_index = None;
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        });
        self.detail_scroll = 0;
    }

    /// Moves selection up, wrapping to the last result.
    pub fn select_previous(&mut self) {
        let len = self.results().len();
        if len == 0 {
            self.selected_index = None;
            return;
        }
        self.selected_index = Some(match self.selected_index {
            None | Some(0) => len - 1,
            Some(i) => i - 1,
        });
        self.detail_scroll = 0;
    }

    pub fn detail_scroll(&self) -> u16 {
        self.detail_scroll
    }

    pub fn scroll_detail_down(&mut self, amount: u16) {
        self.detail_scroll = self.detail_scroll.saturating_add(amount);
    }

    pub fn scroll_detail_up(&mut self, amount: u16) {
        self.detail_scroll = self.detail_scroll.saturating_sub(amount);
    }

    /// Appends a character to the query; the search runs after the debounce delay.
    pub fn push_search_char(&mut self, c: char, now: Instant) {
        let mut text = self.search_input().to_string();
        text.push(c);
        self.dispatch(Action::EditQuery(text), now);
    }

    /// Removes the last character of the query.
    pub fn pop_search_char(&mut self, now: Instant) {
        if self.search_input().is_empty() {
            return;
        }
        let mut text = self.search_input().to_string();
        text.pop();
        self.dispatch(Action::EditQuery(text), now);
    }

    /// Empties the query.
    pub fn clear_search(&mut self, now: Instant) {
        if !self.search_input().is_empty() {
            self.dispatch(Action::ClearQuery, now);
        }
    }

    /// Switches to the next type filter.
    pub fn cycle_type_filter(&mut self, now: Instant) {
        let next = self.controller.state().type_filter().next();
        self.dispatch(Action::SetTypeFilter(next), now);
    }

    /// Switches to the next category filter.
    pub fn cycle_category_filter(&mut self, now: Instant) {
        let next = self.controller.state().category_filter().next();
        self.dispatch(Action::SetCategoryFilter(next), now);
    }

    /// Toggles the pinned flag of the selected note.
    pub fn toggle_pin_selected(&mut self, now: Instant) {
        let Some(id) = self.selected_id() else {
            return;
        };
        self.message = match self.controller.toggle_pin(&id, now) {
            Ok(true) => Some("Pinned".to_string()),
            Ok(false) => Some("Unpinned".to_string()),
            Err(e) => Some(e.to_string()),
        };
        self.restore_selection(Some(id));
    }

    /// Removes the selected record from the collection.
    pub fn remove_selected(&mut self, now: Instant) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let index = self.selected_index;
        if self.controller.remove_record(&id, now) {
            self.message = Some(format!("Removed record {id}"));
        }
        let len = self.results().len();
        self.selected_index = match index {
            Some(_) if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => None,
        };
        self.detail_scroll = 0;
    }

    /// Runs a pending debounced search if its timer has fired.
    ///
    /// Returns `true` when the displayed results changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let previous = self.selected_id();
        let published = self.controller.tick(now);
        if published {
            self.restore_selection(previous);
        }
        published
    }

    fn dispatch(&mut self, action: Action, now: Instant) {
        let previous = self.selected_id();
        self.message = None;
        self.controller.dispatch(action, now);
        self.restore_selection(previous);
    }

    fn selected_id(&self) -> Option<RecordId> {
        self.selected_result().map(|r| r.record.id().clone())
    }

    /// Keeps the same record selected across result changes, if it is still shown.
    fn restore_selection(&mut self, previous: Option<RecordId>) {
        let position =
            previous.and_then(|id| self.results().iter().position(|r| r.record.id() == &id));
        if position != self.selected_index {
            self.detail_scroll = 0;
        }
        self.selected_index = position;
    }
}
