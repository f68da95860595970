//! The mutable record collection behind the application.

use log::debug;
use time::{Date, Time};

use crate::error::{Error, Result};
use crate::models::{Details, Record, RecordId, RecordKind, TaskStatus};
use crate::query::SearchResult;

/// Owns the records and keeps their identifiers unique.
///
/// Records keep their insertion order, which is the tie-break order for
/// search results with equal scores.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<Record>,
}

/// Dashboard counts over the whole collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub notes: usize,
    pub pinned_notes: usize,
    pub tasks: usize,
    pub completed_tasks: usize,
    pub events: usize,
    /// Completed share of tasks as a rounded percentage, 0 with no tasks.
    pub completion_rate: u8,
    /// Events ordered by date, then time.
    pub upcoming: Vec<ScheduledEvent>,
}

/// An event entry in the dashboard summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub id: RecordId,
    pub title: String,
    pub date: Date,
    pub time: Time,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from existing records.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateId` if two records share an identifier.
    pub fn from_records(records: Vec<Record>) -> Result<Self> {
        let mut store = Self::new();
        for record in records {
            store.insert(record)?;
        }
        Ok(store)
    }

    /// Appends a record.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateId` if the identifier is already taken.
    pub fn insert(&mut self, record: Record) -> Result<()> {
        if self.contains(record.id()) {
            return Err(Error::DuplicateId(record.id().clone()));
        }
        debug!("inserting {} record {}", record.kind(), record.id());
        self.records.push(record);
        Ok(())
    }

    /// Removes a record, returning it if it existed.
    pub fn remove(&mut self, id: &RecordId) -> Option<Record> {
        let index = self.records.iter().position(|r| r.id() == id)?;
        debug!("removing record {id}");
        Some(self.records.remove(index))
    }

    /// Flips the pinned flag of a note and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` for an unknown id and `Error::NotANote`
    /// when the record is a task or event.
    pub fn toggle_pin(&mut self, id: &RecordId) -> Result<bool> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| Error::NotFound(id.clone()))?;
        record
            .toggle_pinned()
            .ok_or_else(|| Error::NotANote(id.clone()))
    }

    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Computes the dashboard summary.
    pub fn summary(&self) -> Summary {
        let count = |kind: RecordKind| self.records.iter().filter(|r| r.kind() == kind).count();
        let tasks = count(RecordKind::Task);
        let completed_tasks = self
            .records
            .iter()
            .filter(|r| {
                matches!(
                    r.details(),
                    Details::Task {
                        status: TaskStatus::Completed,
                        ..
                    }
                )
            })
            .count();

        #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
        let completion_rate = if tasks == 0 {
            0
        } else {
            ((completed_tasks as f64 / tasks as f64) * 100.0).round() as u8
        };

        let mut upcoming: Vec<ScheduledEvent> = self
            .records
            .iter()
            .filter_map(|r| match r.details() {
                Details::Event { date, time, .. } => Some(ScheduledEvent {
                    id: r.id().clone(),
                    title: r.title().to_string(),
                    date: *date,
                    time: *time,
                }),
                _ => None,
            })
            .collect();
        upcoming.sort_by_key(|event| (event.date, event.time));

        Summary {
            notes: count(RecordKind::Note),
            pinned_notes: self.records.iter().filter(|r| r.is_pinned()).count(),
            tasks,
            completed_tasks,
            events: count(RecordKind::Event),
            completion_rate,
            upcoming,
        }
    }
}

/// Reorders results so pinned notes come first, keeping relative order otherwise.
pub fn pinned_first(results: Vec<SearchResult>) -> Vec<SearchResult> {
    let (mut pinned, rest): (Vec<_>, Vec<_>) =
        results.into_iter().partition(|r| r.record.is_pinned());
    pinned.extend(rest);
    pinned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecordBuilder, TaskPriority};
    use crate::query::{Query, search};
    use crate::sample::sample_records;
    use time::macros::{date, time};

    fn sample_store() -> RecordStore {
        RecordStore::from_records(sample_records()).expect("sample ids are unique")
    }

    fn task(id: &str, status: TaskStatus) -> Record {
        RecordBuilder::new(id, format!("Task {id}"), Details::task(TaskPriority::Low, status))
            .build()
    }

    #[test]
    fn from_records_rejects_duplicate_ids() {
        let mut records = sample_records();
        records.push(RecordBuilder::new("1", "Copy", Details::note()).build());

        let result = RecordStore::from_records(records);

        assert!(matches!(result, Err(Error::DuplicateId(id)) if id.as_str() == "1"));
    }

    #[test]
    fn insert_appends_and_rejects_duplicates() {
        let mut store = sample_store();
        store
            .insert(RecordBuilder::new("7", "Gym", Details::note()).build())
            .expect("new id is accepted");

        assert_eq!(store.len(), 7);
        assert_eq!(store.records()[6].id().as_str(), "7");

        let again = store.insert(RecordBuilder::new("7", "Gym again", Details::note()).build());
        assert!(matches!(again, Err(Error::DuplicateId(_))));
        assert_eq!(store.len(), 7);
    }

    #[test]
    fn remove_returns_removed_record() {
        let mut store = sample_store();

        let removed = store.remove(&RecordId::new("3"));

        assert_eq!(removed.map(|r| r.title().to_string()).as_deref(), Some("Review project proposal"));
        assert!(!store.contains(&RecordId::new("3")));
        assert!(store.remove(&RecordId::new("3")).is_none());
    }

    #[test]
    fn toggle_pin_flips_note_flag() {
        let mut store = sample_store();
        let id = RecordId::new("2");

        assert!(store.toggle_pin(&id).unwrap());
        assert!(store.get(&id).unwrap().is_pinned());
        assert!(!store.toggle_pin(&id).unwrap());
    }

    #[test]
    fn toggle_pin_rejects_unknown_and_non_note_records() {
        let mut store = sample_store();

        assert!(matches!(
            store.toggle_pin(&RecordId::new("99")),
            Err(Error::NotFound(_))
        ));
        assert!(matches!(
            store.toggle_pin(&RecordId::new("5")),
            Err(Error::NotANote(_))
        ));
    }

    #[test]
    fn summary_counts_sample_collection() {
        let summary = sample_store().summary();

        assert_eq!(summary.notes, 2);
        assert_eq!(summary.pinned_notes, 0);
        assert_eq!(summary.tasks, 2);
        assert_eq!(summary.completed_tasks, 0);
        assert_eq!(summary.events, 2);
        assert_eq!(summary.completion_rate, 0);

        let titles: Vec<&str> = summary.upcoming.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Client Presentation", "Code Review Session"]);
    }

    #[test]
    fn completion_rate_rounds_and_handles_no_tasks() {
        assert_eq!(RecordStore::new().summary().completion_rate, 0);

        let store = RecordStore::from_records(vec![
            task("a", TaskStatus::Completed),
            task("b", TaskStatus::Todo),
            task("c", TaskStatus::InProgress),
        ])
        .unwrap();

        assert_eq!(store.summary().completion_rate, 33);
    }

    #[test]
    fn upcoming_events_sort_by_time_within_a_day() {
        let store = RecordStore::from_records(vec![
            RecordBuilder::new("late", "Late", Details::event(date!(2024 - 02 - 01), time!(18:00), 30))
                .build(),
            RecordBuilder::new("early", "Early", Details::event(date!(2024 - 02 - 01), time!(08:15), 30))
                .build(),
            RecordBuilder::new("prev", "Previous day", Details::event(date!(2024 - 01 - 31), time!(23:00), 30))
                .build(),
        ])
        .unwrap();

        let summary = store.summary();
        let ids: Vec<&str> = summary.upcoming.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["prev", "early", "late"]);
    }

    #[test]
    fn pinned_first_moves_pinned_notes_ahead() {
        let mut store = sample_store();
        store.toggle_pin(&RecordId::new("2")).unwrap();

        let results = pinned_first(search(store.records(), &Query::default()));
        let ids: Vec<&str> = results.iter().map(|r| r.record.id().as_str()).collect();

        assert_eq!(ids, vec!["2", "1", "3", "5", "4", "6"]);
    }
}
