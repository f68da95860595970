use log::debug;
use serde::Serialize;

use super::Query;
use crate::models::Record;

/// A record that matched a query, with the score it was ranked by.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub record: Record,
    /// Score in `[0, 1]`; currently the record's static relevance.
    pub score: f64,
}

/// Returns whether `record` satisfies the text predicate and both filters.
///
/// The text matches when it is a substring of the title or the body, or
/// equals one of the tags, all compared case-insensitively. Empty text
/// matches every record.
///
/// # Examples
///
/// ```
/// use lifeorg::{Details, Query, RecordBuilder, matches};
///
/// let record = RecordBuilder::new("1", "Project Meeting Notes", Details::note())
///     .tags(["meeting"])
///     .build();
///
/// assert!(matches(&record, &Query::new("MEETING")));
/// assert!(!matches(&record, &Query::new("standup")));
/// ```
pub fn matches(record: &Record, query: &Query) -> bool {
    query.accepts_filters(record) && matches_text(record, &query.text().to_lowercase())
}

/// Text predicate against an already lowercased needle.
fn matches_text(record: &Record, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    record.title().to_lowercase().contains(needle)
        || record.body().to_lowercase().contains(needle)
        || record.tags().iter().any(|tag| tag.to_lowercase() == needle)
}

/// Filters and ranks `records` against `query`.
///
/// Matches are ordered by score descending. The sort is stable, so records
/// with equal scores keep their input order. The input is never modified.
///
/// # Examples
///
/// ```
/// use lifeorg::{Query, sample_records, search};
///
/// let records = sample_records();
/// let results = search(&records, &Query::new("project"));
///
/// let titles: Vec<&str> = results.iter().map(|r| r.record.title()).collect();
/// assert_eq!(titles, vec!["Project Meeting Notes", "Review project proposal"]);
/// ```
pub fn search(records: &[Record], query: &Query) -> Vec<SearchResult> {
    let needle = query.text().to_lowercase();

    let mut results: Vec<SearchResult> = records
        .iter()
        .filter(|record| query.accepts_filters(record) && matches_text(record, &needle))
        .map(|record| SearchResult {
            score: record.relevance(),
            record: record.clone(),
        })
        .collect();

    results.sort_by(|a, b| b.score.total_cmp(&a.score));

    debug!(
        "search {:?} (type {}, category {}) matched {} of {} records",
        query.text(),
        query.kind(),
        query.category(),
        results.len(),
        records.len()
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Details, RecordBuilder, RecordKind, TaskPriority, TaskStatus};
    use crate::query::{CategoryFilter, TypeFilter};
    use crate::sample::sample_records;

    fn ids(results: &[SearchResult]) -> Vec<&str> {
        results.iter().map(|r| r.record.id().as_str()).collect()
    }

    #[test]
    fn empty_query_returns_everything_ranked_by_relevance() {
        let records = sample_records();
        let results = search(&records, &Query::default());

        assert_eq!(results.len(), records.len());
        assert_eq!(ids(&results), vec!["1", "3", "5", "2", "4", "6"]);
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let records: Vec<Record> = ["a", "b", "c", "d"]
            .into_iter()
            .map(|id| {
                RecordBuilder::new(id, format!("Record {id}"), Details::note())
                    .relevance(0.5)
                    .build()
            })
            .collect();

        let results = search(&records, &Query::new("record"));

        assert_eq!(ids(&results), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn matches_body_substring() {
        let records = sample_records();
        let results = search(&records, &Query::new("QUARTERLY results"));

        assert_eq!(ids(&results), vec!["5"]);
    }

    #[test]
    fn tags_match_by_equality_not_substring() {
        let record = RecordBuilder::new("1", "Weekly plan", Details::note())
            .tags(["programming"])
            .build();

        assert!(matches(&record, &Query::new("Programming")));
        assert!(!matches(&record, &Query::new("program")));
    }

    #[test]
    fn type_filter_excludes_other_kinds() {
        let records = sample_records();
        let query = Query::new("").with_kind(TypeFilter::Only(RecordKind::Task));

        let results = search(&records, &query);

        assert_eq!(ids(&results), vec!["3", "4"]);
        assert!(results.iter().all(|r| r.record.kind() == RecordKind::Task));
    }

    #[test]
    fn category_filter_combines_with_text() {
        let records = sample_records();
        let query = Query::new("react").with_category(CategoryFilter::Only(Category::Learning));

        let results = search(&records, &query);

        assert_eq!(ids(&results), vec!["2", "4"]);
    }

    #[test]
    fn unrecognized_filters_produce_no_results() {
        let records = sample_records();

        let by_type = Query::new("").with_kind(TypeFilter::parse("memo"));
        let by_category = Query::new("").with_category(CategoryFilter::parse("Finance"));

        assert!(search(&records, &by_type).is_empty());
        assert!(search(&records, &by_category).is_empty());
    }

    #[test]
    fn surrounding_whitespace_is_part_of_the_text() {
        let records = sample_records();

        let results = search(&records, &Query::new(" project"));

        assert_eq!(ids(&results), vec!["3"]);
    }

    #[test]
    fn wrong_case_filter_values_match_nothing() {
        let records = sample_records();

        let query = Query::from_raw(None, Some("TASK"), Some("work"));

        assert!(search(&records, &query).is_empty());
        assert_eq!(
            ids(&search(&records, &Query::from_raw(None, Some("task"), Some("Work")))),
            vec!["3"]
        );
    }

    #[test]
    fn empty_collection_yields_empty_result() {
        assert!(search(&[], &Query::new("anything")).is_empty());
    }

    #[test]
    fn search_does_not_modify_input() {
        let records = sample_records();
        let before = records.clone();

        let _ = search(&records, &Query::new("review"));

        assert_eq!(records, before);
    }

    #[test]
    fn score_is_the_static_relevance() {
        let record = RecordBuilder::new(
            "9",
            "File taxes",
            Details::task(TaskPriority::Urgent, TaskStatus::Todo),
        )
        .relevance(0.42)
        .build();

        let results = search(std::slice::from_ref(&record), &Query::new("taxes"));

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 0.42);
    }
}
