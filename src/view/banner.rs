//! No-results banner shown below the table.

use super::styles::Palette;
use crate::state::NoResultsBanner;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// No-results banner shown below the table.
pub struct BannerView<'a> {
    banner: &'a NoResultsBanner,
    palette: &'a Palette,
}

impl<'a> BannerView<'a> {
    /// Banner widget for `banner`.
    pub fn new(banner: &'a NoResultsBanner, palette: &'a Palette) -> Self {
        Self { banner, palette }
    }
}

impl Widget for BannerView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = self.palette;
        let line = Line::from(vec![
            Span::styled(self.banner.message(), palette.banner),
            Span::styled("   c: clear search  x: dismiss", palette.muted),
        ]);

        Paragraph::new(line)
            .style(palette.base)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(palette.banner),
            )
            .render(area, buf);
    }
}
