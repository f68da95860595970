pub mod cli;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod loader;
pub mod logging;
pub mod models;
pub mod query;
pub mod sample;
pub mod state;
pub mod store;
pub mod tui;

pub use config::Config;
pub use controller::Controller;
pub use debounce::Debouncer;
pub use error::{Error, Result};
pub use loader::{load_records, resolve_records_path};
pub use models::{
    Category, Details, Record, RecordBuilder, RecordId, RecordKind, TaskPriority, TaskStatus,
};
pub use query::{
    CategoryFilter, Query, SearchResult, Segment, TypeFilter, highlight, matches, search,
};
pub use sample::sample_records;
pub use state::{Action, AppState, SearchStatus, reduce};
pub use store::{RecordStore, ScheduledEvent, Summary, pinned_first};
