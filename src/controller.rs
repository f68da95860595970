use std::time::{Duration, Instant};

use log::debug;

use crate::debounce::Debouncer;
use crate::error::{Error, Result};
use crate::models::{Record, RecordId, RecordKind};
use crate::query::search;
use crate::state::{Action, AppState, reduce};
use crate::store::RecordStore;

/// Single owner of the application state and the search debounce timer.
///
/// Query edits arm the timer; [`Controller::tick`] runs the search once the
/// timer fires. A blank query and collection changes are searched at once.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use lifeorg::{Action, Controller, RecordStore, sample_records};
///
/// let store = RecordStore::from_records(sample_records()).unwrap();
/// let mut controller = Controller::new(store, Duration::from_millis(300));
/// let start = Instant::now();
///
/// controller.dispatch(Action::EditQuery("review".to_string()), start);
/// assert!(!controller.tick(start + Duration::from_millis(100)));
/// assert!(controller.tick(start + Duration::from_millis(300)));
/// assert_eq!(controller.state().results().len(), 2);
/// ```
#[derive(Debug)]
pub struct Controller {
    state: AppState,
    debouncer: Debouncer,
}

impl Controller {
    /// Creates a controller and publishes the initial, unfiltered results.
    pub fn new(store: RecordStore, debounce: Duration) -> Self {
        let mut controller = Self {
            state: AppState::new(store),
            debouncer: Debouncer::new(debounce),
        };
        controller.search_now();
        controller
    }

    /// Returns the current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns whether a debounced search is waiting to run.
    pub fn search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Time until the pending search runs, if one is armed.
    pub fn time_until_search(&self, now: Instant) -> Option<Duration> {
        self.debouncer.remaining(now)
    }

    /// Applies an action and schedules whatever search it calls for.
    pub fn dispatch(&mut self, action: Action, now: Instant) {
        let changes_query = action.changes_query();
        let changes_records = action.changes_records();

        self.apply(action);

        if changes_records {
            self.search_now();
        } else if changes_query {
            if self.state().query_input().trim().is_empty() {
                self.search_now();
            } else {
                self.debouncer.schedule(now);
            }
        }
    }

    /// Runs the pending search if its timer has fired.
    ///
    /// Returns `true` when new results were published.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.debouncer.fire(now) {
            return false;
        }
        self.publish();
        true
    }

    /// Cancels any pending timer, then searches and publishes immediately.
    pub fn search_now(&mut self) {
        self.debouncer.cancel();
        self.publish();
    }

    /// Adds a record after checking its id is free.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateId` if the id is already in use.
    pub fn add_record(&mut self, record: Record, now: Instant) -> Result<()> {
        if self.state().store().contains(record.id()) {
            return Err(Error::DuplicateId(record.id().clone()));
        }
        self.dispatch(Action::InsertRecord(record), now);
        Ok(())
    }

    /// Removes a record, returning whether it existed.
    pub fn remove_record(&mut self, id: &RecordId, now: Instant) -> bool {
        if !self.state().store().contains(id) {
            return false;
        }
        self.dispatch(Action::RemoveRecord(id.clone()), now);
        true
    }

    /// Flips a note's pinned flag and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` or `Error::NotANote` when the record cannot be pinned.
    pub fn toggle_pin(&mut self, id: &RecordId, now: Instant) -> Result<bool> {
        let record = self
            .state
            .store()
            .get(id)
            .ok_or_else(|| Error::NotFound(id.clone()))?;
        if record.kind() != RecordKind::Note {
            return Err(Error::NotANote(id.clone()));
        }
        let pinned = !record.is_pinned();
        self.dispatch(Action::TogglePin(id.clone()), now);
        Ok(pinned)
    }

    fn publish(&mut self) {
        let results = search(self.state.store().records(), &self.state.query());
        debug!(
            "publishing {} results (was {:?})",
            results.len(),
            self.state.status()
        );
        self.apply(Action::Publish(results));
    }

    fn apply(&mut self, action: Action) {
        let state = std::mem::replace(&mut self.state, AppState::new(RecordStore::new()));
        self.state = reduce(state, action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Details, RecordBuilder};
    use crate::query::{CategoryFilter, TypeFilter};
    use crate::state::SearchStatus;
    use crate::sample::sample_records;

    const DELAY: Duration = Duration::from_millis(300);

    fn controller() -> Controller {
        Controller::new(RecordStore::from_records(sample_records()).unwrap(), DELAY)
    }

    fn result_ids(controller: &Controller) -> Vec<String> {
        controller
            .state()
            .results()
            .iter()
            .map(|r| r.record.id().to_string())
            .collect()
    }

    #[test]
    fn starts_with_every_record_published() {
        let controller = controller();

        assert_eq!(controller.state().status(), SearchStatus::Ready);
        assert_eq!(result_ids(&controller), vec!["1", "3", "5", "2", "4", "6"]);
        assert!(!controller.search_pending());
    }

    #[test]
    fn keystrokes_restart_the_timer() {
        let mut controller = controller();
        let start = Instant::now();

        controller.dispatch(Action::EditQuery("c".to_string()), start);
        controller.dispatch(Action::EditQuery("cl".to_string()), start + Duration::from_millis(200));
        controller.dispatch(Action::EditQuery("cli".to_string()), start + Duration::from_millis(400));

        assert!(!controller.tick(start + Duration::from_millis(600)));
        assert_eq!(controller.state().status(), SearchStatus::Pending);

        assert!(controller.tick(start + Duration::from_millis(700)));
        assert_eq!(result_ids(&controller), vec!["3", "5"]);
        assert!(!controller.tick(start + Duration::from_millis(800)));
    }

    #[test]
    fn blank_query_publishes_immediately() {
        let mut controller = controller();
        let start = Instant::now();

        controller.dispatch(Action::EditQuery("zzz-no-match".to_string()), start);
        controller.tick(start + DELAY);
        assert!(controller.state().results().is_empty());

        controller.dispatch(Action::ClearQuery, start + DELAY);

        assert!(!controller.search_pending());
        assert_eq!(controller.state().results().len(), 6);
    }

    #[test]
    fn whitespace_query_runs_at_once_without_trimming() {
        let mut controller = controller();
        let start = Instant::now();

        controller.dispatch(Action::EditQuery("   ".to_string()), start);

        assert!(!controller.search_pending());
        assert_eq!(controller.state().status(), SearchStatus::Ready);
        assert!(controller.state().results().is_empty());
    }

    #[test]
    fn filters_are_debounced_with_text() {
        let mut controller = controller();
        let start = Instant::now();

        controller.dispatch(Action::EditQuery("review".to_string()), start);
        controller.dispatch(
            Action::SetTypeFilter(TypeFilter::Only(RecordKind::Event)),
            start + Duration::from_millis(50),
        );

        assert!(controller.tick(start + Duration::from_millis(350)));
        assert_eq!(result_ids(&controller), vec!["6"]);
    }

    #[test]
    fn filter_change_with_blank_text_applies_at_once() {
        let mut controller = controller();

        controller.dispatch(
            Action::SetCategoryFilter(CategoryFilter::Only(Category::Learning)),
            Instant::now(),
        );

        assert_eq!(result_ids(&controller), vec!["2", "4"]);
    }

    #[test]
    fn add_record_rejects_duplicates_and_searches() {
        let mut controller = controller();
        let now = Instant::now();

        let record = RecordBuilder::new("7", "Morning run", Details::note())
            .category(Category::Health)
            .relevance(0.99)
            .build();
        controller.add_record(record, now).unwrap();
        assert_eq!(result_ids(&controller)[0], "7");

        let duplicate = RecordBuilder::new("7", "Evening run", Details::note()).build();
        assert!(matches!(
            controller.add_record(duplicate, now),
            Err(Error::DuplicateId(_))
        ));
    }

    #[test]
    fn record_change_cancels_pending_timer() {
        let mut controller = controller();
        let start = Instant::now();

        controller.dispatch(Action::EditQuery("project".to_string()), start);
        assert!(controller.search_pending());

        assert!(controller.remove_record(&RecordId::new("1"), start));

        assert!(!controller.search_pending());
        assert_eq!(result_ids(&controller), vec!["3"]);
        assert!(!controller.remove_record(&RecordId::new("1"), start));
    }

    #[test]
    fn toggle_pin_reports_new_flag_and_errors() {
        let mut controller = controller();
        let now = Instant::now();

        assert!(controller.toggle_pin(&RecordId::new("1"), now).unwrap());
        assert!(!controller.toggle_pin(&RecordId::new("1"), now).unwrap());
        assert!(matches!(
            controller.toggle_pin(&RecordId::new("3"), now),
            Err(Error::NotANote(_))
        ));
        assert!(matches!(
            controller.toggle_pin(&RecordId::new("42"), now),
            Err(Error::NotFound(_))
        ));
    }
}
