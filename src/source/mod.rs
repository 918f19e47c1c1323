//! Table input sources.
//!
//! This module provides input sources for table documents:
//! - File loading for a path argument
//! - Stdin for piped input
//! - Unified InputSource enum for both

use crate::model::error::{AppError, InputError};
use crate::model::Table;
use crate::parser;
use std::path::PathBuf;
use tracing::info;

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Unified input source for table documents.
///
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum InputSource {
    /// File source - read on construction
    File(FileSource),
    /// Stdin source - reads piped stdin to EOF
    Stdin(StdinSource<std::io::Stdin>),
}

impl InputSource {
    /// Load and parse the table (parse at boundary).
    ///
    /// # Errors
    ///
    /// Returns `AppError::InputRead` for I/O failures, `AppError::Parse` for a
    /// malformed document. A source that was already consumed yields
    /// `InputError::NoInput`.
    pub fn load_table(&mut self) -> Result<Table, AppError> {
        let contents = match self {
            InputSource::File(f) => f.take_contents(),
            InputSource::Stdin(s) => s.read_to_end()?,
        }
        .ok_or(InputError::NoInput)?;

        let table = parser::parse_table(&contents)?;
        info!(
            rows = table.row_count(),
            columns = table.column_count(),
            "Table loaded"
        );
        Ok(table)
    }

    /// Short label for the status bar.
    pub fn label(&self) -> String {
        match self {
            InputSource::File(f) => f.path().display().to_string(),
            InputSource::Stdin(_) => "<stdin>".to_string(),
        }
    }
}

/// Detect and create appropriate input source.
///
/// # Logic:
/// 1. If file path is provided: create FileSource (reads on construction)
/// 2. Else: use StdinSource, which rejects an interactive terminal
///
/// # Errors
///
/// Returns `InputError::NoInput` if no file is provided and stdin is not piped.
/// Returns `InputError::FileNotFound` if file does not exist.
/// Returns `InputError::Io` for I/O errors during file reading.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}
