//! Error types for the admintable application.
//!
//! This module defines the error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all domain-specific failures
//!   - [`InputError`] - Table file/stdin reading failures (file not found, IO)
//!   - [`ParseError`] - Table document parsing failures (malformed JSON, ragged rows)
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # Not Errors
//!
//! Denying a sort or a page change while a search is active is a policy decision,
//! not a fault. Those outcomes are modelled as [`crate::model::Rejection`] values
//! and never travel through this hierarchy.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// All domain-specific error types (`InputError`, `ParseError`) convert to `AppError`
/// via `From`, enabling clean error propagation with the `?` operator.
///
/// # Examples
///
/// ```no_run
/// use admintable::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError automatically converts to AppError via From
///     let _input = read_table_file()?;
///     Ok(())
/// }
/// # fn read_table_file() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read input from file or stdin.
    ///
    /// Fatal: the viewer cannot start without table data.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// The table document could not be parsed.
    ///
    /// Fatal: the whole table is loaded up front, so a broken document
    /// leaves nothing to show.
    #[error("Failed to parse table: {0}")]
    Parse(#[from] ParseError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading table input from files or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified table file does not exist at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use admintable::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.json")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// No input source was provided and stdin is an interactive terminal.
    ///
    /// # Examples
    ///
    /// ```
    /// use admintable::model::error::InputError;
    ///
    /// let msg = InputError::NoInput.to_string();
    /// assert!(msg.contains("file path or pipe data to stdin"));
    /// ```
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// Generic I/O error reading from input source.
    ///
    /// Converted automatically from `std::io::Error`:
    ///
    /// ```no_run
    /// use std::fs::File;
    /// use admintable::model::error::InputError;
    ///
    /// fn open_table(path: &str) -> Result<File, InputError> {
    ///     Ok(File::open(path)?)
    /// }
    /// ```
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when parsing a table document.
///
/// Row numbers are 1-based, matching how users count records in the export.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The document is not syntactically valid JSON, or does not have the
    /// `{"columns": [...], "rows": [[...]]}` shape.
    ///
    /// ```
    /// use admintable::model::error::ParseError;
    ///
    /// let err = ParseError::InvalidJson {
    ///     message: "expected value at line 1 column 1".to_string()
    /// };
    /// assert!(err.to_string().contains("expected value"));
    /// ```
    #[error("Invalid JSON: {message}")]
    InvalidJson {
        /// Extracted from `serde_json::Error::to_string()`.
        message: String,
    },

    /// The document declares no columns.
    #[error("Table has no columns")]
    NoColumns,

    /// A row has a different number of cells than there are columns.
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// 1-based row number.
        row: usize,
        /// Number of columns declared in the header.
        expected: usize,
        /// Number of cells actually present.
        found: usize,
    },

    /// A cell holds a nested array or object, which has no display text.
    #[error("Row {row}, column {column}: cell must be a string, number, boolean or null")]
    NonScalarCell {
        /// 1-based row number.
        row: usize,
        /// 1-based column number.
        column: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn input_error_file_not_found_display() {
        let err = InputError::FileNotFound {
            path: PathBuf::from("/tmp/missing.json"),
        };
        let msg = err.to_string();
        assert!(msg.contains("File not found"));
        assert!(msg.contains("/tmp/missing.json"));
    }

    #[test]
    fn input_error_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let input_err: InputError = io_err.into();
        let msg = input_err.to_string();
        assert!(msg.contains("IO error"));
        assert!(msg.contains("access denied"));
    }

    #[test]
    fn parse_error_ragged_row_display() {
        let err = ParseError::RaggedRow {
            row: 7,
            expected: 4,
            found: 3,
        };
        assert_eq!(err.to_string(), "Row 7 has 3 cells, expected 4");
    }

    #[test]
    fn parse_error_non_scalar_cell_names_position() {
        let err = ParseError::NonScalarCell { row: 2, column: 5 };
        let msg = err.to_string();
        assert!(msg.contains("Row 2"));
        assert!(msg.contains("column 5"));
    }

    #[test]
    fn app_error_from_input_error() {
        let app_err: AppError = InputError::NoInput.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Failed to read input"));
        assert!(msg.contains("No input source"));
    }

    #[test]
    fn app_error_from_parse_error() {
        let app_err: AppError = ParseError::NoColumns.into();
        assert_eq!(app_err.to_string(), "Failed to parse table: Table has no columns");
    }

    #[test]
    fn app_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe broken");
        let app_err: AppError = io_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Terminal error"));
        assert!(msg.contains("pipe broken"));
    }

    #[test]
    fn app_error_nested_io_through_input_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let input_err: InputError = io_err.into();
        let app_err: AppError = input_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Failed to read input"));
        assert!(msg.contains("IO error"));
        assert!(msg.contains("file not found"));
    }
}
