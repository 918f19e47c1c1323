//! Search input widget for rendering the search bar.

use super::styles::Palette;
use crate::state::SearchBox;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search input widget.
///
/// Shows the cursor only while the box has focus. An unfocused empty box
/// shows a placeholder hint instead.
pub struct SearchInput<'a> {
    search_box: &'a SearchBox,
    focused: bool,
    palette: &'a Palette,
}

impl<'a> SearchInput<'a> {
    /// Search box widget. The cursor shows only when `focused`.
    pub fn new(search_box: &'a SearchBox, focused: bool, palette: &'a Palette) -> Self {
        Self {
            search_box,
            focused,
            palette,
        }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = self.palette;
        let text = self.search_box.text();

        let line = if self.focused {
            // Split text around the cursor so the cursor cell can be styled
            let cursor = self.search_box.cursor();
            let before: String = text.chars().take(cursor).collect();
            let mut after = text.chars().skip(cursor);
            let cursor_char = after.next().map_or_else(|| " ".to_string(), String::from);
            let rest: String = after.collect();

            Line::from(vec![
                Span::raw(before),
                Span::styled(cursor_char, palette.cursor),
                Span::raw(rest),
            ])
        } else if text.is_empty() {
            Line::from(Span::styled("Press / to search", palette.muted))
        } else {
            Line::from(text.to_string())
        };

        let border_style = if self.focused {
            palette.title
        } else {
            palette.border
        };

        Paragraph::new(line)
            .style(palette.base)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(" Search "),
            )
            .render(area, buf);
    }
}
