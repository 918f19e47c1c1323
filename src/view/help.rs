//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by
//! category. Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::layout::centered_rect;
use super::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut groups as (category, [(keys, description)]).
const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Sorting",
        &[
            ("h/← l/→", "Move column cursor"),
            ("s/Enter", "Sort by selected column"),
            ("1-9", "Sort by column number"),
        ],
    ),
    (
        "Rows",
        &[("j/↓", "Scroll down"), ("k/↑", "Scroll up")],
    ),
    (
        "Pagination",
        &[
            ("n/PgDn/]", "Next page"),
            ("p/PgUp/[", "Previous page"),
            ("g/Home", "First page"),
            ("G/End", "Last page"),
            ("o", "Reload current page link"),
            ("z", "Change rows per page"),
        ],
    ),
    (
        "Search",
        &[
            ("//Ctrl+f", "Focus search box"),
            ("Enter", "Apply search now"),
            ("Esc", "Clear search"),
            ("c", "Clear search"),
            ("x", "Dismiss no-results banner"),
        ],
    ),
    (
        "Application",
        &[
            ("t", "Toggle light/dark theme"),
            ("d", "Dismiss latest alert"),
            ("?", "Show this help"),
            ("q/Ctrl+c", "Quit"),
        ],
    ),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, palette: &Palette) {
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, frame.area());

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(palette))
        .style(palette.base)
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(palette.title),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint sits on the bottom border
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        palette.muted.add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

fn build_help_content(palette: &Palette) -> Vec<Line<'static>> {
    let key_style = palette.header;
    let desc_style = palette.base;

    let mut lines = Vec::new();
    for (index, (category, keys)) in SHORTCUTS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(*category, palette.title)));
        for (key, description) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<12}"), key_style),
                Span::styled(*description, desc_style),
            ]));
        }
    }
    lines
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
