//! Application state and the pure reducer that advances it.
//!
//! All state lives in [`AppState`]; every change goes through [`reduce`],
//! which takes the old state and an [`Action`] and returns the new state.
//! Timers and searching are the controller's job, not the reducer's.

use log::warn;

use crate::models::{Record, RecordId};
use crate::query::{CategoryFilter, Query, SearchResult, TypeFilter};
use crate::store::RecordStore;

/// Where the published results stand relative to the current query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// No search has been published yet.
    Idle,
    /// The query changed and the published results are stale.
    Pending,
    /// The published results reflect the current query.
    Ready,
}

/// Everything the application knows.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    store: RecordStore,
    query_input: String,
    type_filter: TypeFilter,
    category_filter: CategoryFilter,
    results: Vec<SearchResult>,
    status: SearchStatus,
}

/// A state transition request.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the query input text.
    EditQuery(String),
    SetTypeFilter(TypeFilter),
    SetCategoryFilter(CategoryFilter),
    /// Empty the query input text.
    ClearQuery,
    /// Store the results of a finished search.
    Publish(Vec<SearchResult>),
    InsertRecord(Record),
    RemoveRecord(RecordId),
    TogglePin(RecordId),
}

impl Action {
    /// Returns whether this action changes the query.
    pub fn changes_query(&self) -> bool {
        matches!(
            self,
            Self::EditQuery(_)
                | Self::SetTypeFilter(_)
                | Self::SetCategoryFilter(_)
                | Self::ClearQuery
        )
    }

    /// Returns whether this action changes the record collection.
    pub fn changes_records(&self) -> bool {
        matches!(
            self,
            Self::InsertRecord(_) | Self::RemoveRecord(_) | Self::TogglePin(_)
        )
    }
}

impl AppState {
    /// Creates the initial state over a record collection.
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            query_input: String::new(),
            type_filter: TypeFilter::All,
            category_filter: CategoryFilter::All,
            results: Vec::new(),
            status: SearchStatus::Idle,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Returns the raw query input, untrimmed.
    pub fn query_input(&self) -> &str {
        &self.query_input
    }

    pub fn type_filter(&self) -> &TypeFilter {
        &self.type_filter
    }

    pub fn category_filter(&self) -> &CategoryFilter {
        &self.category_filter
    }

    /// Returns the most recently published results.
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Builds the query described by the current input and filters.
    pub fn query(&self) -> Query {
        Query::new(&self.query_input)
            .with_kind(self.type_filter.clone())
            .with_category(self.category_filter.clone())
    }
}

/// Applies `action` to `state` and returns the new state.
///
/// Total: actions that cannot apply, such as inserting a duplicate id or
/// pinning a task, return the state unchanged.
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::EditQuery(text) => {
            state.query_input = text;
            state.status = SearchStatus::Pending;
        }
        Action::SetTypeFilter(filter) => {
            state.type_filter = filter;
            state.status = SearchStatus::Pending;
        }
        Action::SetCategoryFilter(filter) => {
            state.category_filter = filter;
            state.status = SearchStatus::Pending;
        }
        Action::ClearQuery => {
            state.query_input.clear();
            state.status = SearchStatus::Pending;
        }
        Action::Publish(results) => {
            state.results = results;
            state.status = SearchStatus::Ready;
        }
        Action::InsertRecord(record) => {
            if let Err(e) = state.store.insert(record) {
                warn!("ignoring insert: {e}");
            }
        }
        Action::RemoveRecord(id) => {
            if state.store.remove(&id).is_some() {
                state.results.retain(|r| r.record.id() != &id);
            } else {
                warn!("ignoring removal of unknown record {id}");
            }
        }
        Action::TogglePin(id) => match state.store.toggle_pin(&id) {
            Ok(_) => {
                if let Some(updated) = state.store.get(&id).cloned() {
                    for result in state.results.iter_mut().filter(|r| r.record.id() == &id) {
                        result.record = updated.clone();
                    }
                }
            }
            Err(e) => warn!("ignoring pin toggle: {e}"),
        },
    }
    state
}
