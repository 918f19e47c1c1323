//! Table data: headers, rows and cells.
//!
//! A `Table` is immutable once loaded. Display order, visibility and sort
//! indicators live in the state layer; rows here are addressed by their
//! position in the source document.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Everything except ASCII digits, minus sign and decimal point.
static NON_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.\-]").expect("static pattern is valid"));

/// Longest leading float accepted by a lenient parser.
static LEADING_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)").expect("static pattern is valid")
});

// ===== RowId =====

/// Identity of a row: its index in the source document.
///
/// Stable across sorting and filtering; never a display position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(usize);

impl RowId {
    /// Id of the row at `index` in the source document.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Zero-based position in the source document.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0 + 1)
    }
}

// ===== Cell =====

/// A display string with an opportunistic numeric reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell(String);

impl Cell {
    /// Wrap display text. Numeric readings are derived on demand.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Raw display text.
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Text used for comparisons (surrounding whitespace removed).
    pub fn sort_text(&self) -> &str {
        self.0.trim()
    }

    /// Numeric reading of the cell, if any.
    ///
    /// Strips every character that is not an ASCII digit, `-` or `.`, then
    /// parses the longest leading float. `"$1,250.00"` reads as `1250.0`,
    /// `"12.5.3"` as `12.5`, and `"N/A"` has no numeric value.
    pub fn numeric_value(&self) -> Option<f64> {
        parse_numeric(self.sort_text())
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Lenient numeric extraction shared by cells and tests.
pub fn parse_numeric(text: &str) -> Option<f64> {
    let stripped = NON_NUMERIC.replace_all(text, "");
    let leading = LEADING_FLOAT.find(&stripped)?;
    leading.as_str().parse::<f64>().ok()
}

// ===== Row =====

/// One record of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// Row from its cells, in column order.
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// All cells in column order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at `column`, if the row has one.
    pub fn cell(&self, column: usize) -> Option<&Cell> {
        self.cells.get(column)
    }

    /// Full row text as searched by the filter: cells joined by one space.
    pub fn full_text(&self) -> String {
        self.cells
            .iter()
            .map(Cell::text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ===== Table =====

/// Loaded table: a title, column headers and rows.
///
/// Every row has exactly `headers.len()` cells; the parser enforces this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    title: String,
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Assemble a table. Callers keep every row as wide as `headers`.
    pub fn new(title: impl Into<String>, headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self {
            title: title.into(),
            headers,
            rows,
        }
    }

    /// Convenience constructor used heavily in tests.
    pub fn from_strs(headers: &[&str], rows: &[&[&str]]) -> Self {
        Self::new(
            "",
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|cells| Row::new(cells.iter().map(|c| Cell::from(*c)).collect()))
                .collect(),
        )
    }

    /// Document title; empty when the input has none.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Column headers in order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of rows in the document.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Row for `id`, if it belongs to this table.
    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.get(id.index())
    }

    /// Rows in source order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row ids in source order.
    pub fn row_ids(&self) -> impl Iterator<Item = RowId> + '_ {
        (0..self.rows.len()).map(RowId::new)
    }
}
