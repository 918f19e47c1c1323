//! Sort engine: cell comparator, sort state and display reordering.
//!
//! Sorting never touches the [`Table`]; it permutes the display order, a
//! `Vec<RowId>` owned by the controller.

use crate::model::{Cell, RowId, Table};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

// ===== SortDirection =====

/// Order applied to the active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// The other direction.
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header indicator appended to the active column label.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

// ===== SortState =====

/// Per-table sort memory. At most one column is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    column: Option<usize>,
    direction: SortDirection,
}

impl SortState {
    /// Active column, if the table has been sorted.
    pub fn column(&self) -> Option<usize> {
        self.column
    }

    /// Direction of the active column.
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Select `column` for sorting.
    ///
    /// The active column flips direction; any other column becomes active
    /// ascending. Returns the direction to sort with.
    pub fn toggle(&mut self, column: usize) -> SortDirection {
        if self.column == Some(column) {
            self.direction = self.direction.reversed();
        } else {
            self.column = Some(column);
            self.direction = SortDirection::Ascending;
        }
        self.direction
    }

    /// Header text for `column` with the indicator on the active column only.
    pub fn header_label(&self, column: usize, label: &str) -> String {
        if self.column == Some(column) {
            format!("{} {}", label, self.direction.indicator())
        } else {
            label.to_string()
        }
    }
}

// ===== Comparator =====

/// Precomputed ordering key for one cell.
///
/// Cells with a numeric reading rank before text cells, so a column that
/// mixes both still has a total order: numbers by value, then text by
/// [`locale_compare`].
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    /// Numeric reading of the cell.
    Number(f64),
    /// Collation keys of a cell with no numeric reading.
    Text(TextKey),
}

/// Collation keys for locale-aware comparison, strongest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextKey {
    primary: String,
    secondary: String,
    raw: String,
}

impl TextKey {
    /// Build the keys for `text`.
    pub fn new(text: &str) -> Self {
        Self {
            primary: primary_key(text),
            secondary: text.to_lowercase(),
            raw: text.to_string(),
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.primary
            .cmp(&other.primary)
            .then_with(|| self.secondary.cmp(&other.secondary))
            // lowercase first
            .then_with(|| other.raw.cmp(&self.raw))
    }
}

impl SortKey {
    /// Key for `cell`.
    pub fn of(cell: &Cell) -> Self {
        match cell.numeric_value() {
            Some(n) => SortKey::Number(n),
            None => SortKey::Text(TextKey::new(cell.sort_text())),
        }
    }

    /// Total order over keys.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(x), SortKey::Number(y)) => x.total_cmp(y),
            (SortKey::Text(x), SortKey::Text(y)) => x.compare(y),
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        }
    }
}

/// Compare two cells the way a sortable admin table does.
///
/// Numeric when both cells have a numeric reading, locale-aware text
/// comparison when neither does. A number always sorts before text.
pub fn compare_cells(a: &Cell, b: &Cell) -> Ordering {
    SortKey::of(a).compare(&SortKey::of(b))
}

/// Locale-aware ordering approximating a collator's default strength.
///
/// Primary: base letters, ignoring case and accents.
/// Secondary: accents.
/// Tertiary: case, lowercase first.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    TextKey::new(a).compare(&TextKey::new(b))
}

fn primary_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Reorder `order` by `column` of `table`.
///
/// Keys are computed once per row. Ties are broken by [`RowId`], so the
/// descending order is exactly the reverse of the ascending one. Rows
/// without the column sort first.
pub fn sort_rows(table: &Table, order: &mut [RowId], column: usize, direction: SortDirection) {
    let mut keyed: Vec<(Option<SortKey>, RowId)> = order
        .iter()
        .map(|id| {
            let key = table.row(*id).and_then(|r| r.cell(column)).map(SortKey::of);
            (key, *id)
        })
        .collect();

    keyed.sort_by(|(key_a, a), (key_b, b)| {
        let ordering = match (key_a, key_b) {
            (Some(x), Some(y)) => x.compare(y),
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
        }
        .then_with(|| a.cmp(b));

        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    for (slot, (_, id)) in order.iter_mut().zip(keyed) {
        *slot = id;
    }
}

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
