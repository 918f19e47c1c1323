//! Tests for SearchState, SearchQuery and the filter pass.

use super::*;

fn inventory() -> Table {
    Table::from_strs(
        &["Name", "Category"],
        &[
            &["Blue Widget", "Hardware"],
            &["Gadget", "Electronics"],
            &["WIDGET Pro", "Hardware"],
            &["Sprocket", "widgets"],
        ],
    )
}

// ===== SearchQuery::new Tests =====

#[test]
fn search_query_new_accepts_non_empty_string() {
    assert!(SearchQuery::new("test").is_some());
}

#[test]
fn search_query_new_rejects_empty_string() {
    assert!(SearchQuery::new("").is_none());
}

#[test]
fn search_query_new_rejects_whitespace_only() {
    assert!(SearchQuery::new("   ").is_none());
    assert!(SearchQuery::new("\t\t").is_none());
}

#[test]
fn search_query_preserves_raw_text() {
    let query = SearchQuery::new("  Widget  ").expect("valid query");

    assert_eq!(query.as_str(), "  Widget  ");
    assert_eq!(query.needle(), "widget");
}

#[test]
fn search_query_matches_case_insensitively() {
    let query = SearchQuery::new("WiDgEt").expect("valid query");

    assert!(query.matches("Blue widget"));
    assert!(query.matches("WIDGETS"));
    assert!(!query.matches("Gadget"));
}

// ===== SearchState Tests =====

#[test]
fn default_state_is_inactive() {
    let state = SearchState::default();

    assert!(!state.is_active());
    assert_eq!(state.query(), None);
    assert_eq!(state.match_count(), 0);
}

#[test]
fn active_state_reports_query_and_matches() {
    let state = SearchState::Active {
        query: SearchQuery::new("widget").expect("valid query"),
        matches: vec![RowId::new(0), RowId::new(2)],
    };

    assert!(state.is_active());
    assert_eq!(state.query().map(SearchQuery::as_str), Some("widget"));
    assert_eq!(state.match_count(), 2);
}

// ===== filter_rows Tests =====

#[test]
fn filter_matches_any_cell() {
    let table = inventory();
    let order: Vec<RowId> = table.row_ids().collect();
    let query = SearchQuery::new("widget").expect("valid query");

    let matches = filter_rows(&table, &order, &query);

    // Row 3 matches through its category cell
    assert_eq!(matches, vec![RowId::new(0), RowId::new(2), RowId::new(3)]);
}

#[test]
fn filter_keeps_display_order() {
    let table = inventory();
    let order = vec![RowId::new(3), RowId::new(2), RowId::new(1), RowId::new(0)];
    let query = SearchQuery::new("hardware").expect("valid query");

    let matches = filter_rows(&table, &order, &query);

    assert_eq!(matches, vec![RowId::new(2), RowId::new(0)]);
}

#[test]
fn filter_with_no_matches_is_empty() {
    let table = inventory();
    let order: Vec<RowId> = table.row_ids().collect();
    let query = SearchQuery::new("zzzznomatch").expect("valid query");

    assert!(filter_rows(&table, &order, &query).is_empty());
}

#[test]
fn filter_can_span_adjacent_cells() {
    let table = inventory();
    let order: Vec<RowId> = table.row_ids().collect();
    let query = SearchQuery::new("gadget electronics").expect("valid query");

    assert_eq!(filter_rows(&table, &order, &query), vec![RowId::new(1)]);
}

// ===== NoResultsBanner Tests =====

#[test]
fn banner_message_quotes_query() {
    let banner = NoResultsBanner::new("zzzznomatch");
    assert_eq!(banner.message(), "No results found for \"zzzznomatch\"");
    assert_eq!(banner.query(), "zzzznomatch");
}
