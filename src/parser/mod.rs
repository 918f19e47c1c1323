//! JSON parser for exported admin tables.
//!
//! Pure parsing functions converting a table document into a validated
//! [`Table`]. The accepted shape is:
//!
//! ```json
//! {
//!   "title": "Products",
//!   "columns": ["Name", "Price", "Stock"],
//!   "rows": [["Widget", "$120.50", 4], ["Gadget", "$45.00", null]]
//! }
//! ```
//!
//! Scalars become display strings: numbers and booleans through their JSON
//! text, `null` as an empty cell.

use crate::model::{Cell, ParseError, Row, Table};
use serde::Deserialize;
use serde_json::Value;

/// Raw JSON structure for deserializing a table document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTable {
    #[serde(default)]
    title: Option<String>,
    columns: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<Value>>,
}

/// Parse a table document.
///
/// # Errors
///
/// - `ParseError::InvalidJson` for syntax errors or a wrong document shape
/// - `ParseError::NoColumns` when `columns` is empty
/// - `ParseError::RaggedRow` when a row's cell count differs from the column count
/// - `ParseError::NonScalarCell` when a cell is an array or an object
pub fn parse_table(input: &str) -> Result<Table, ParseError> {
    let raw: RawTable = serde_json::from_str(input).map_err(|e| ParseError::InvalidJson {
        message: e.to_string(),
    })?;

    if raw.columns.is_empty() {
        return Err(ParseError::NoColumns);
    }

    let expected = raw.columns.len();
    let rows = raw
        .rows
        .into_iter()
        .enumerate()
        .map(|(index, cells)| convert_row(index + 1, expected, cells))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Table::new(
        raw.title.unwrap_or_default(),
        raw.columns,
        rows,
    ))
}

fn convert_row(row: usize, expected: usize, cells: Vec<Value>) -> Result<Row, ParseError> {
    if cells.len() != expected {
        return Err(ParseError::RaggedRow {
            row,
            expected,
            found: cells.len(),
        });
    }

    cells
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            scalar_text(value)
                .map(Cell::new)
                .ok_or(ParseError::NonScalarCell {
                    row,
                    column: index + 1,
                })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Row::new)
}

/// Display text of a scalar JSON value; `None` for arrays and objects.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}
