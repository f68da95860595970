//! Cross-entity search over notes, tasks, and events.
//!
//! A [`Query`] combines free text with a type filter and a category filter.
//! [`search`] is a pure function: it scans the records linearly, keeps those
//! that satisfy all three predicates and ranks them by score. [`highlight`]
//! splits display text around matches for the presentation layer.

mod engine;
mod filter;
mod highlight;

pub use engine::{SearchResult, matches, search};
pub use filter::{CategoryFilter, Query, TypeFilter};
pub use highlight::{Segment, highlight};
