//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the title line (table title plus stat counters).
pub const TITLE_BAR_HEIGHT: u16 = 1;

/// Height of the search input widget in lines (border + text).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the no-results banner (border + message).
pub const BANNER_HEIGHT: u16 = 3;

/// Height of the pagination controls line.
pub const PAGINATION_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for the latest alert and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Rows of the table area not used for data: two borders and the header.
pub const TABLE_CHROME_HEIGHT: u16 = 3;

/// Blank columns between table columns.
pub const COLUMN_SPACING: u16 = 2;

/// Widest a column grows before its cells are truncated.
pub const MAX_COLUMN_WIDTH: u16 = 40;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width of the blocking notice and page size dialog.
pub const DIALOG_WIDTH: u16 = 50;
