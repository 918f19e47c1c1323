//! Tests for help overlay widget

use super::*;
use crate::state::Theme;
use crate::view::styles::ColorConfig;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn render_to_string(width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let palette = Palette::new(Theme::Dark, ColorConfig::enabled(true));

    terminal
        .draw(|frame| render_help_overlay(frame, &palette))
        .unwrap();

    let buffer = terminal.backend().buffer();
    let area = buffer.area();
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn render_help_overlay_shows_titled_modal() {
    let rendered = render_to_string(100, 40);

    assert!(rendered.contains("Keyboard Shortcuts"));
    assert!(rendered.contains('┌'));
}

#[test]
fn render_help_overlay_lists_every_category() {
    let rendered = render_to_string(100, 40);

    for category in ["Sorting", "Rows", "Pagination", "Search", "Application"] {
        assert!(rendered.contains(category), "missing category {category}");
    }
}

#[test]
fn render_help_overlay_describes_page_and_theme_keys() {
    let rendered = render_to_string(100, 40);

    assert!(rendered.contains("Change rows per page"));
    assert!(rendered.contains("Toggle light/dark theme"));
    assert!(rendered.contains("Dismiss no-results banner"));
    assert!(rendered.contains("Scroll down"));
}

#[test]
fn render_help_overlay_shows_dismissal_hint() {
    let rendered = render_to_string(100, 40);
    assert!(rendered.contains("Press Esc or ? to close"));
}

#[test]
fn render_help_overlay_survives_tiny_terminal() {
    let rendered = render_to_string(10, 4);
    assert_eq!(rendered.lines().count(), 4);
}

#[test]
fn help_content_starts_with_category_header() {
    let palette = Palette::new(Theme::Light, ColorConfig::enabled(false));
    let lines = build_help_content(&palette);

    assert_eq!(lines[0].to_string(), "Sorting");
    assert!(lines[1].to_string().contains("Move column cursor"));
}
