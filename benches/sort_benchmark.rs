//! Sort and search performance benchmarks.
//!
//! Sorting a column and filtering by a query both run on every keystroke or
//! header click, so they must stay well under a frame even for large exports.
//!
//! Run with: cargo bench --bench sort_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use admintable::model::{Cell, Command, Row, RowId, Table};
use admintable::state::search::filter_rows;
use admintable::state::sort::sort_rows;
use admintable::state::{ControllerOptions, SearchQuery, SortDirection, TableController};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const CUSTOMERS: [&str; 5] = ["Ada", "Grace", "Alan", "Edsger", "Barbara"];
const STATUSES: [&str; 4] = ["Paid", "Pending", "Shipped", "Refunded"];

/// Generate an order export with `rows` rows in a scrambled order.
fn generate_table(rows: usize) -> Table {
    let rows = (0..rows)
        .map(|i| {
            // Multiplicative hash keeps totals unsorted but deterministic.
            let cents = (i * 7919) % 100_000;
            Row::new(vec![
                Cell::new(format!("ORD-{i:06}")),
                Cell::new(CUSTOMERS[i % CUSTOMERS.len()]),
                Cell::new(STATUSES[i % STATUSES.len()]),
                Cell::new(format!("${}.{:02}", cents / 100, cents % 100)),
            ])
        })
        .collect();
    Table::new(
        "Orders",
        vec![
            "Order".to_string(),
            "Customer".to_string(),
            "Status".to_string(),
            "Total".to_string(),
        ],
        rows,
    )
}

fn benchmark_sort_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_rows");

    for size in [1_000, 10_000, 100_000] {
        let table = generate_table(size);
        let ids: Vec<RowId> = table.row_ids().collect();

        group.bench_with_input(BenchmarkId::new("numeric", size), &size, |b, _| {
            b.iter(|| {
                let mut order = ids.clone();
                sort_rows(&table, &mut order, 3, SortDirection::Ascending);
                black_box(order)
            })
        });

        group.bench_with_input(BenchmarkId::new("text", size), &size, |b, _| {
            b.iter(|| {
                let mut order = ids.clone();
                sort_rows(&table, &mut order, 1, SortDirection::Descending);
                black_box(order)
            })
        });
    }

    group.finish();
}

fn benchmark_filter_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_rows");

    for size in [1_000, 10_000, 100_000] {
        let table = generate_table(size);
        let ids: Vec<RowId> = table.row_ids().collect();
        let Some(query) = SearchQuery::new("refunded") else {
            return;
        };

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(filter_rows(&table, &ids, &query)))
        });
    }

    group.finish();
}

/// Full controller round trip: sort, then search, then clear.
fn benchmark_controller_dispatch(c: &mut Criterion) {
    let table = generate_table(10_000);

    c.bench_function("controller_sort_search_clear", |b| {
        b.iter(|| {
            let mut controller = TableController::new(table.clone(), ControllerOptions::default());
            controller.dispatch(Command::SortBy(3));
            controller.dispatch(Command::SetQuery("grace".to_string()));
            controller.dispatch(Command::ClearQuery);
            black_box(controller.visible_ids())
        })
    });
}

criterion_group!(
    benches,
    benchmark_sort_scaling,
    benchmark_filter_scaling,
    benchmark_controller_dispatch
);
criterion_main!(benches);
