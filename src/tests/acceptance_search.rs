//! Acceptance tests for debounced search and the no-results banner.

use crate::state::{InputMode, PaginationView};
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;
use std::time::Duration;

const ORDERS: &str = "tests/fixtures/orders.json";
const DEBOUNCE: Duration = Duration::from_millis(300);

fn search(harness: &mut AcceptanceTestHarness, text: &str) {
    harness.send_key(KeyCode::Char('/'));
    harness.type_text(text);
}

#[test]
fn query_waits_for_debounce() {
    let mut harness = AcceptanceTestHarness::from_fixture(ORDERS).expect("fixture loads");
    search(&mut harness, "ada");

    harness.advance(Duration::from_millis(290));
    assert!(!harness.state().controller.search().is_active());

    harness.advance(Duration::from_millis(10));
    assert_eq!(harness.state().controller.search().match_count(), 5);
}

#[test]
fn each_keystroke_restarts_the_timer() {
    let mut harness = AcceptanceTestHarness::from_fixture(ORDERS).expect("fixture loads");
    harness.send_key(KeyCode::Char('/'));

    harness.type_text("gr");
    harness.advance(Duration::from_millis(200));
    harness.type_text("ace");
    harness.advance(Duration::from_millis(200));
    assert!(!harness.state().controller.search().is_active());

    harness.advance(Duration::from_millis(100));
    let query = harness.state().controller.search().query().map(|q| q.as_str().to_string());
    assert_eq!(query.as_deref(), Some("grace"));
}

#[test]
fn matches_span_every_page() {
    let mut harness = AcceptanceTestHarness::from_fixture(ORDERS).expect("fixture loads");
    search(&mut harness, "refunded");
    harness.advance(DEBOUNCE);

    let output = harness.render_to_string();
    assert!(output.contains("ORD-1005"));
    assert!(output.contains("ORD-1025"), "rows from the last page are shown");
    assert!(output.contains("Search active - pagination disabled"));
    assert_eq!(
        harness.state().controller.pagination_view(),
        PaginationView::Suspended
    );
}

#[test]
fn paging_during_search_is_refused() {
    let mut harness = AcceptanceTestHarness::from_fixture(ORDERS).expect("fixture loads");
    search(&mut harness, "ada");
    harness.send_key(KeyCode::Enter);

    harness.send_key(KeyCode::Char('n'));

    let output = harness.render_to_string();
    assert!(output.contains("Notice"));
    assert_eq!(harness.state().controller.pagination().current_page(), 1);
}

#[test]
fn no_results_banner_names_the_query() {
    let mut harness = AcceptanceTestHarness::from_fixture(ORDERS).expect("fixture loads");
    search(&mut harness, "  nobody ");
    harness.advance(DEBOUNCE);

    let output = harness.render_to_string();
    assert!(output.contains("No results found for \"nobody\""));
}

#[test]
fn banner_can_be_dismissed_while_search_stays_active() {
    let mut harness = AcceptanceTestHarness::from_fixture(ORDERS).expect("fixture loads");
    search(&mut harness, "nobody");
    harness.send_keys(&[KeyCode::Enter, KeyCode::Char('x')]);

    assert!(harness.state().controller.banner().is_none());
    assert!(harness.state().controller.search().is_active());
}

#[test]
fn escape_clears_search_and_restores_page() {
    let mut harness = AcceptanceTestHarness::from_fixture(ORDERS).expect("fixture loads");
    harness.send_key(KeyCode::Char('n'));
    search(&mut harness, "ada");
    harness.advance(DEBOUNCE);

    harness.send_key(KeyCode::Esc);

    let state = harness.state();
    assert_eq!(state.mode, InputMode::Browse);
    assert!(!state.controller.search().is_active());
    assert_eq!(state.controller.pagination().current_page(), 2);
}

#[test]
fn clearing_with_backspace_restores_browsing() {
    let mut harness = AcceptanceTestHarness::from_fixture(ORDERS).expect("fixture loads");
    search(&mut harness, "ab");
    harness.advance(DEBOUNCE);
    assert!(harness.state().controller.search().is_active());

    harness.send_keys(&[KeyCode::Backspace, KeyCode::Backspace]);
    harness.advance(DEBOUNCE);

    assert!(!harness.state().controller.search().is_active());
}
