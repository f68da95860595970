//! Built-in demo records used when no record file is configured.

use time::macros::{date, time};

use crate::models::{Category, Details, Record, RecordBuilder, TaskPriority, TaskStatus};

/// Returns the six demo records: two notes, two tasks and two events.
pub fn sample_records() -> Vec<Record> {
    vec![
        RecordBuilder::new("1", "Project Meeting Notes", Details::note())
            .body(
                "Discussed new feature requirements and timeline. Key decisions made \
                 regarding the UI redesign and backend architecture.",
            )
            .category(Category::Work)
            .tags(["meeting", "project", "decisions"])
            .relevance(0.95)
            .build(),
        RecordBuilder::new("2", "Learning React Patterns", Details::note())
            .body(
                "Compound components pattern allows you to create flexible and reusable \
                 component APIs. Examples include accordion, tabs, and dropdown menus.",
            )
            .category(Category::Learning)
            .tags(["react", "patterns", "programming"])
            .relevance(0.88)
            .build(),
        RecordBuilder::new(
            "3",
            "Review project proposal",
            Details::Task {
                priority: TaskPriority::High,
                status: TaskStatus::InProgress,
                due_date: Some(date!(2024 - 01 - 16)),
            },
        )
        .body("Go through the new client proposal and provide feedback on technical feasibility")
        .category(Category::Work)
        .relevance(0.92)
        .build(),
        RecordBuilder::new(
            "4",
            "Complete React tutorial",
            Details::Task {
                priority: TaskPriority::Medium,
                status: TaskStatus::InProgress,
                due_date: Some(date!(2024 - 01 - 20)),
            },
        )
        .body("Finish the advanced React patterns course including hooks and context")
        .category(Category::Learning)
        .relevance(0.85)
        .build(),
        RecordBuilder::new(
            "5",
            "Client Presentation",
            Details::Event {
                date: date!(2024 - 01 - 16),
                time: time!(14:00),
                duration_minutes: 60,
                location: Some("Virtual - Zoom".to_string()),
                attendees: Vec::new(),
            },
        )
        .body("Present quarterly results to key client and discuss next phase")
        .category(Category::Work)
        .relevance(0.90)
        .build(),
        RecordBuilder::new(
            "6",
            "Code Review Session",
            Details::Event {
                date: date!(2024 - 01 - 18),
                time: time!(10:30),
                duration_minutes: 90,
                location: Some("Dev Room".to_string()),
                attendees: Vec::new(),
            },
        )
        .body("Review pull requests and discuss code improvements with the team")
        .category(Category::Work)
        .relevance(0.83)
        .build(),
    ]
}
