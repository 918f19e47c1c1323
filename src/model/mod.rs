//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod command;
pub mod error;
pub mod key_action;
pub mod table;

// Re-export for convenience
pub use command::{Command, Outcome, Rejection};
pub use error::{AppError, InputError, ParseError};
pub use key_action::KeyAction;
pub use table::{parse_numeric, Cell, Row, RowId, Table};
