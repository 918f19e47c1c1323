//! Stdin-based table source for piped input.
//!
//! `cat products.json | admintable` reads the whole document before the
//! terminal UI starts.

use crate::model::error::InputError;
use std::io::{IsTerminal, Read};

/// Stdin source for a piped table document.
pub struct StdinSource<R: Read> {
    reader: R,
    complete: bool,
}

impl std::fmt::Debug for StdinSource<std::io::Stdin> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StdinSource")
            .field("complete", &self.complete)
            .finish()
    }
}

impl StdinSource<std::io::Stdin> {
    /// Create a new StdinSource from stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is a TTY, so the viewer never
    /// blocks waiting for a document the user forgot to pipe.
    pub fn new() -> Result<Self, InputError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self {
            reader: stdin,
            complete: false,
        })
    }
}

impl<R: Read> StdinSource<R> {
    /// Create StdinSource from any reader (bypasses the TTY check).
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            complete: false,
        }
    }

    /// Read everything up to EOF.
    ///
    /// Returns `None` once the stream has already been consumed.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for I/O errors, including invalid UTF-8.
    pub fn read_to_end(&mut self) -> Result<Option<String>, InputError> {
        if self.complete {
            return Ok(None);
        }
        let mut contents = String::new();
        self.reader.read_to_string(&mut contents)?;
        self.complete = true;
        Ok(Some(contents))
    }

    /// Check if EOF has been reached.
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}
