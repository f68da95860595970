use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use time::{Date, Time};

use super::{Category, RecordId, TaskPriority, TaskStatus};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");
time::serde::format_description!(clock_time, Time, "[hour]:[minute]");

/// The type tag of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Note,
    Task,
    Event,
}

impl RecordKind {
    /// All kinds in display order.
    pub const ALL: [RecordKind; 3] = [RecordKind::Note, RecordKind::Task, RecordKind::Event];

    /// Returns the lowercase name used in filters and serialized data.
    pub fn name(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Task => "task",
            Self::Event => "event",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Type-specific fields of a record.
///
/// These are carried along for the presentation layer and the dashboard
/// summary. The query engine only looks at the kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Details {
    Note {
        #[serde(default)]
        pinned: bool,
        #[serde(default)]
        archived: bool,
    },
    Task {
        priority: TaskPriority,
        status: TaskStatus,
        #[serde(default, with = "iso_date::option", skip_serializing_if = "Option::is_none")]
        due_date: Option<Date>,
    },
    Event {
        #[serde(with = "iso_date")]
        date: Date,
        #[serde(with = "clock_time")]
        time: Time,
        #[serde(default)]
        duration_minutes: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<String>,
        #[serde(default)]
        attendees: Vec<String>,
    },
}

impl Details {
    /// An unpinned, unarchived note.
    pub fn note() -> Self {
        Self::Note {
            pinned: false,
            archived: false,
        }
    }

    /// A task without a due date.
    pub fn task(priority: TaskPriority, status: TaskStatus) -> Self {
        Self::Task {
            priority,
            status,
            due_date: None,
        }
    }

    /// An event with no location or attendees.
    pub fn event(date: Date, time: Time, duration_minutes: u32) -> Self {
        Self::Event {
            date,
            time,
            duration_minutes,
            location: None,
            attendees: Vec::new(),
        }
    }

    /// Returns the kind this payload belongs to.
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Note { .. } => RecordKind::Note,
            Self::Task { .. } => RecordKind::Task,
            Self::Event { .. } => RecordKind::Event,
        }
    }
}

/// A note, task, or event entry subject to search and filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    id: RecordId,
    title: String,
    #[serde(default)]
    body: String,
    category: Category,
    #[serde(default)]
    tags: Vec<String>,
    /// Static relevance used as the search score, always in `[0, 1]`.
    #[serde(default, deserialize_with = "deserialize_relevance")]
    relevance: f64,
    #[serde(flatten)]
    details: Details,
}

impl Record {
    /// Returns the record's unique identifier.
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the precomputed relevance, in `[0, 1]`.
    pub fn relevance(&self) -> f64 {
        self.relevance
    }

    pub fn details(&self) -> &Details {
        &self.details
    }

    pub fn kind(&self) -> RecordKind {
        self.details.kind()
    }

    /// Returns whether this record is a pinned note.
    pub fn is_pinned(&self) -> bool {
        matches!(self.details, Details::Note { pinned: true, .. })
    }

    /// Flips the pinned flag of a note.
    ///
    /// Returns the new flag, or `None` if the record is not a note.
    pub(crate) fn toggle_pinned(&mut self) -> Option<bool> {
        match &mut self.details {
            Details::Note { pinned, .. } => {
                *pinned = !*pinned;
                Some(*pinned)
            }
            _ => None,
        }
    }
}

/// Clamps a relevance value into `[0, 1]`; non-finite values become 0.
fn clamp_relevance(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn deserialize_relevance<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(clamp_relevance)
}

/// Builder for constructing `Record` instances with optional fields.
///
/// # Examples
///
/// ```
/// use lifeorg::{Category, Details, RecordBuilder, RecordKind};
///
/// let record = RecordBuilder::new("1", "Project Meeting Notes", Details::note())
///     .body("Discussed new feature requirements")
///     .category(Category::Work)
///     .tags(["meeting", "project"])
///     .relevance(0.95)
///     .build();
///
/// assert_eq!(record.kind(), RecordKind::Note);
/// assert_eq!(record.tags(), &["meeting", "project"]);
/// ```
#[derive(Debug)]
pub struct RecordBuilder {
    id: RecordId,
    title: String,
    body: String,
    category: Category,
    tags: Vec<String>,
    relevance: f64,
    details: Details,
}

impl RecordBuilder {
    /// Creates a builder with the required fields.
    ///
    /// Defaults: empty body, `Work` category, no tags, relevance 0.
    pub fn new(id: impl Into<RecordId>, title: impl Into<String>, details: Details) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: String::new(),
            category: Category::Work,
            tags: Vec::new(),
            relevance: 0.0,
            details,
        }
    }

    /// Sets the body text.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the category.
    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Sets the tags.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the relevance, clamped into `[0, 1]`.
    pub fn relevance(mut self, relevance: f64) -> Self {
        self.relevance = clamp_relevance(relevance);
        self
    }

    /// Builds the `Record`.
    pub fn build(self) -> Record {
        Record {
            id: self.id,
            title: self.title,
            body: self.body,
            category: self.category,
            tags: self.tags,
            relevance: self.relevance,
            details: self.details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, time};

    #[test]
    fn builder_applies_defaults() {
        let record = RecordBuilder::new("1", "Groceries", Details::note()).build();

        assert_eq!(record.id().as_str(), "1");
        assert_eq!(record.body(), "");
        assert_eq!(record.category(), Category::Work);
        assert!(record.tags().is_empty());
        assert_eq!(record.relevance(), 0.0);
        assert!(!record.is_pinned());
    }

    #[test]
    fn relevance_is_clamped_into_unit_interval() {
        let high = RecordBuilder::new("1", "a", Details::note())
            .relevance(1.7)
            .build();
        let low = RecordBuilder::new("2", "b", Details::note())
            .relevance(-0.2)
            .build();
        let nan = RecordBuilder::new("3", "c", Details::note())
            .relevance(f64::NAN)
            .build();

        assert_eq!(high.relevance(), 1.0);
        assert_eq!(low.relevance(), 0.0);
        assert_eq!(nan.relevance(), 0.0);
    }

    #[test]
    fn kind_follows_details() {
        let task = RecordBuilder::new(
            "3",
            "Review project proposal",
            Details::task(TaskPriority::High, TaskStatus::InProgress),
        )
        .build();
        let event = RecordBuilder::new(
            "5",
            "Client Presentation",
            Details::event(date!(2024 - 01 - 16), time!(14:00), 60),
        )
        .build();

        assert_eq!(task.kind(), RecordKind::Task);
        assert_eq!(event.kind(), RecordKind::Event);
    }

    #[test]
    fn toggle_pinned_only_applies_to_notes() {
        let mut note = RecordBuilder::new("1", "a", Details::note()).build();
        let mut task = RecordBuilder::new(
            "2",
            "b",
            Details::task(TaskPriority::Low, TaskStatus::Todo),
        )
        .build();

        assert_eq!(note.toggle_pinned(), Some(true));
        assert!(note.is_pinned());
        assert_eq!(note.toggle_pinned(), Some(false));
        assert_eq!(task.toggle_pinned(), None);
    }

    #[test]
    fn event_record_uses_flat_json_layout() {
        let json = r#"{
            "id": "5",
            "type": "event",
            "title": "Client Presentation",
            "body": "Present quarterly results",
            "category": "Work",
            "date": "2024-01-16",
            "time": "14:00",
            "duration_minutes": 60,
            "location": "Virtual - Zoom",
            "relevance": 0.9
        }"#;

        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.kind(), RecordKind::Event);
        assert_eq!(record.relevance(), 0.9);
        match record.details() {
            Details::Event {
                date: event_date,
                time: event_time,
                location,
                ..
            } => {
                assert_eq!(*event_date, date!(2024 - 01 - 16));
                assert_eq!(*event_time, time!(14:00));
                assert_eq!(location.as_deref(), Some("Virtual - Zoom"));
            }
            other => panic!("expected event details, got {other:?}"),
        }

        let written = serde_json::to_value(&record).unwrap();
        assert_eq!(written["type"], "event");
        assert_eq!(written["time"], "14:00");
    }

    #[test]
    fn deserialized_relevance_is_clamped() {
        let json = r#"{"id":"1","type":"note","title":"t","category":"Health","relevance":3}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.relevance(), 1.0);
    }

    #[test]
    fn unknown_record_type_is_rejected() {
        let json = r#"{"id":"1","type":"memo","title":"t","category":"Work"}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
