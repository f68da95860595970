/// Integration tests for the query engine against the built-in records.
///
/// These tests check the search contract end to end:
/// - Empty queries return every record in ranked, stable order
/// - Title substrings find their record in any letter case
/// - Type and category filters are ANDed with the text predicate
/// - Unknown filter values and absent categories yield nothing
///
/// To run locally:
/// ```bash
/// cargo test --test search_properties
/// ```
use lifeorg::{
    Category, CategoryFilter, Details, Query, Record, RecordBuilder, RecordKind, TypeFilter,
    sample_records, search,
};

fn ids(records: &[Record], query: &Query) -> Vec<String> {
    search(records, query)
        .into_iter()
        .map(|result| result.record.id().to_string())
        .collect()
}

#[test]
fn empty_query_returns_every_record() {
    let records = sample_records();

    let results = search(&records, &Query::default());

    assert_eq!(results.len(), records.len());
    let scores: Vec<f64> = results.iter().map(|r| r.score).collect();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn equal_scores_keep_input_order() {
    let records: Vec<Record> = ["a", "b", "c"]
        .into_iter()
        .map(|id| {
            RecordBuilder::new(id, format!("Record {id}"), Details::note())
                .relevance(0.5)
                .build()
        })
        .collect();

    assert_eq!(ids(&records, &Query::default()), ["a", "b", "c"]);
}

#[test]
fn title_substring_finds_record_in_any_case() {
    let records = sample_records();

    for record in &records {
        let title = record.title();
        let start = title.len() / 3;
        let fragment = &title[start..start + 4];
        for text in [fragment.to_uppercase(), fragment.to_lowercase()] {
            let found = ids(&records, &Query::new(&text));
            assert!(
                found.contains(&record.id().to_string()),
                "{text:?} should find record {}",
                record.id()
            );
        }
    }
}

#[test]
fn task_filter_never_returns_other_kinds() {
    let records = sample_records();

    for text in ["", "project", "react", "review"] {
        let query = Query::new(text).with_kind(TypeFilter::Only(RecordKind::Task));
        for result in search(&records, &query) {
            assert_eq!(result.record.kind(), RecordKind::Task);
        }
    }
}

#[test]
fn absent_category_returns_nothing() {
    let query = Query::default().with_category(CategoryFilter::Only(Category::Health));

    assert!(search(&sample_records(), &query).is_empty());
}

#[test]
fn search_is_idempotent() {
    let records = sample_records();
    let query = Query::from_raw(Some("re"), Some("all"), Some("All"));

    assert_eq!(search(&records, &query), search(&records, &query));
}

#[test]
fn project_query_ranks_by_relevance() {
    let query = Query::from_raw(Some("project"), Some("all"), Some("All"));

    assert_eq!(ids(&sample_records(), &query), ["1", "3"]);
}

#[test]
fn unmatched_text_returns_nothing() {
    let query = Query::from_raw(Some("zzz-no-match"), Some("all"), Some("All"));

    assert!(search(&sample_records(), &query).is_empty());
}

#[test]
fn tags_match_whole_words_only() {
    let records = sample_records();

    assert_eq!(ids(&records, &Query::new("Decisions")), ["1"]);
    assert!(ids(&records, &Query::new("programm")).is_empty());
}

#[test]
fn unknown_filter_values_match_nothing() {
    let records = sample_records();

    assert!(search(&records, &Query::from_raw(None, Some("reminder"), None)).is_empty());
    assert!(search(&records, &Query::from_raw(None, None, Some("Finance"))).is_empty());
}
