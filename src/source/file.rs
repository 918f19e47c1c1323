//! File-based table source.
//!
//! Tables are static exports, so the file is read once on construction.

use crate::model::error::InputError;
use std::path::{Path, PathBuf};

/// Read-once table file.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    contents: Option<String>,
}

impl FileSource {
    /// Open and read the whole file.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    /// Returns `InputError::Io` for other I/O errors.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            contents: Some(contents),
        })
    }

    /// Path the table was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Take the document text. Returns `None` on every call after the first.
    pub fn take_contents(&mut self) -> Option<String> {
        self.contents.take()
    }
}
