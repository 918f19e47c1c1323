//! Property-based tests for the table controller.
//!
//! Tests validate:
//! 1. Sorting permutes rows and double-toggling reverses exactly, including
//!    columns that mix numbers and text
//! 2. Pagination covers every row exactly once across pages
//! 3. Search results are a subset in display order, and clearing restores
//!    the paginated view

use admintable::model::{Cell, Command, Outcome, Row, RowId, Table};
use admintable::state::{ControllerOptions, SearchState, TableController};
use proptest::prelude::*;
use std::collections::HashSet;

fn cell_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z ]{0,8}",
        (-500i32..500).prop_map(|n| n.to_string()),
        (0u32..10_000).prop_map(|n| format!("${}.{:02}", n / 100, n % 100)),
        Just(String::new()),
        mixed_cell_text(),
    ]
}

/// Cells whose text sorts between numbers: leading `.`, `/` or `-`, some
/// numeric (".5", "-3") and some not ("/", "-x").
fn mixed_cell_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[./-][a-z0-9]{0,3}",
        (0u32..10).prop_map(|d| format!("0.{d}")),
        (0u32..10).prop_map(|d| format!(".{d}")),
    ]
}

fn single_column(cells: Vec<String>) -> Table {
    Table::new(
        "",
        vec!["Score".to_string()],
        cells
            .into_iter()
            .map(|text| Row::new(vec![Cell::new(text)]))
            .collect(),
    )
}

fn table_strategy() -> impl Strategy<Value = Table> {
    (1usize..4).prop_flat_map(|columns| {
        prop::collection::vec(prop::collection::vec(cell_text(), columns), 0..40).prop_map(
            move |rows| {
                Table::new(
                    "",
                    (0..columns).map(|c| format!("Col{c}")).collect(),
                    rows.into_iter()
                        .map(|cells| Row::new(cells.into_iter().map(Cell::new).collect()))
                        .collect(),
                )
            },
        )
    })
}

fn controller(table: Table, page_size: usize) -> TableController {
    TableController::new(
        table,
        ControllerOptions {
            page_size,
            ..ControllerOptions::default()
        },
    )
}

// ===== Property 1: Sorting =====

proptest! {
    #[test]
    fn sort_is_a_permutation(table in table_strategy(), column in 0usize..3) {
        let columns = table.column_count();
        let rows = table.row_count();
        let mut ctl = controller(table, 10);

        let outcome = ctl.dispatch(Command::SortBy(column));

        if column < columns {
            prop_assert_eq!(outcome, Outcome::Applied);
        } else {
            prop_assert!(outcome.is_rejected());
        }
        let ids: HashSet<RowId> = ctl.order().iter().copied().collect();
        prop_assert_eq!(ids.len(), rows);
    }

    #[test]
    fn descending_is_exact_reverse_of_ascending(table in table_strategy()) {
        let mut ctl = controller(table, 10);

        ctl.dispatch(Command::SortBy(0));
        let ascending = ctl.order().to_vec();
        ctl.dispatch(Command::SortBy(0));
        let mut descending = ctl.order().to_vec();
        descending.reverse();

        prop_assert_eq!(ascending, descending);
    }

    #[test]
    fn mixed_column_sort_is_total(cells in prop::collection::vec(mixed_cell_text(), 20..220)) {
        let rows = cells.len();
        let mut ctl = controller(single_column(cells), 10);

        prop_assert_eq!(ctl.dispatch(Command::SortBy(0)), Outcome::Applied);
        let ascending = ctl.order().to_vec();
        prop_assert_eq!(ctl.dispatch(Command::SortBy(0)), Outcome::Applied);
        let mut descending = ctl.order().to_vec();
        descending.reverse();

        prop_assert_eq!(ascending.len(), rows);
        prop_assert_eq!(ascending, descending);
    }
}

// ===== Property 2: Pagination =====

proptest! {
    #[test]
    fn pages_cover_every_row_once(table in table_strategy(), page_size in 1usize..15) {
        let rows = table.row_count();
        let mut ctl = controller(table, page_size);
        let pages = ctl.pagination().page_count();

        let mut seen = Vec::new();
        for page in 1..=pages {
            ctl.dispatch(Command::GoToPage(page));
            let visible = ctl.visible_ids();
            if ctl.pagination().is_enabled() {
                prop_assert!(visible.len() <= page_size);
            }
            seen.extend(visible);
            if !ctl.pagination().is_enabled() {
                break;
            }
        }

        let unique: HashSet<RowId> = seen.iter().copied().collect();
        prop_assert_eq!(unique.len(), rows);
        prop_assert_eq!(seen.len(), rows);
    }

    #[test]
    fn current_page_stays_in_range(
        table in table_strategy(),
        moves in prop::collection::vec(0u8..4, 0..20),
    ) {
        let mut ctl = controller(table, 5);
        for m in moves {
            let command = match m {
                0 => Command::NextPage,
                1 => Command::PrevPage,
                2 => Command::GoToPage(1),
                _ => Command::GoToPage(ctl.pagination().page_count()),
            };
            ctl.dispatch(command);
            let page = ctl.pagination().current_page();
            prop_assert!(page >= 1 && page <= ctl.pagination().page_count());
        }
    }
}

// ===== Property 3: Search =====

proptest! {
    #[test]
    fn search_matches_are_ordered_subset(table in table_strategy(), query in "[a-z0-9]{1,2}") {
        let mut ctl = controller(table, 5);
        ctl.dispatch(Command::SortBy(0));
        let order = ctl.order().to_vec();

        ctl.dispatch(Command::SetQuery(query.clone()));

        let matches = ctl.visible_ids();
        let positions: Vec<usize> = matches
            .iter()
            .map(|id| order.iter().position(|o| o == id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        for id in &matches {
            let text = ctl.table().row(*id).unwrap().full_text().to_lowercase();
            prop_assert!(text.contains(&query));
        }
        prop_assert_eq!(ctl.banner().is_some(), matches.is_empty());
    }

    #[test]
    fn clearing_search_restores_page_view(table in table_strategy(), query in "[a-z]{1,2}") {
        let mut ctl = controller(table, 5);
        let before = ctl.visible_ids();

        ctl.dispatch(Command::SetQuery(query));
        ctl.dispatch(Command::ClearQuery);

        prop_assert_eq!(ctl.search(), &SearchState::Inactive);
        prop_assert!(ctl.banner().is_none());
        prop_assert_eq!(ctl.visible_ids(), before);
    }
}
