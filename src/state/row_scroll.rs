//! Vertical scrolling through the visible rows.
//!
//! A page or a search can hold more rows than the table area shows. The
//! offset is the first row drawn; the shell passes in how many body rows fit
//! so the last row can be brought on screen but never scrolled past.

use crate::model::KeyAction;
use crate::state::AppState;

/// Largest useful offset for `row_count` rows in a viewport of
/// `viewport_rows`.
pub fn max_offset(row_count: usize, viewport_rows: usize) -> usize {
    row_count.saturating_sub(viewport_rows)
}

/// Apply a scroll action to `state`. Non-scroll actions are ignored.
///
/// # Arguments
/// * `state` - Application state to update
/// * `action` - `ScrollUp` or `ScrollDown`
/// * `viewport_rows` - Body rows that fit in the table area
pub fn handle_scroll_action(state: &mut AppState, action: KeyAction, viewport_rows: usize) {
    let rows = state.controller.visible_ids().len();
    let limit = max_offset(rows, viewport_rows);
    state.row_offset = match action {
        KeyAction::ScrollDown => (state.row_offset + 1).min(limit),
        KeyAction::ScrollUp => state.row_offset.saturating_sub(1).min(limit),
        _ => return,
    };
}
