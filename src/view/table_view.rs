//! Table body widget.
//!
//! Renders the header row (with sort indicator and column cursor) and the
//! rows the controller reports as visible, in display order, starting at the
//! scroll offset.

use super::constants::{COLUMN_SPACING, MAX_COLUMN_WIDTH, TABLE_CHROME_HEIGHT};
use super::styles::Palette;
use crate::model::Row;
use crate::state::TableController;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    widgets::{
        Block, Borders, Cell as TuiCell, Row as TuiRow, StatefulWidget, Table as TuiTable,
        TableState, Widget,
    },
};
use unicode_width::UnicodeWidthStr;

/// Display width of each column: widest of header and visible cells.
///
/// Clamped to `1..=MAX_COLUMN_WIDTH` so an empty column still shows and a
/// single long cell cannot push the rest off screen.
pub fn column_widths(headers: &[String], rows: &[&Row]) -> Vec<u16> {
    headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            let widest_cell = rows
                .iter()
                .filter_map(|row| row.cell(column))
                .map(|cell| cell.text().width())
                .max()
                .unwrap_or(0);
            let widest = header.width().max(widest_cell);
            u16::try_from(widest)
                .unwrap_or(u16::MAX)
                .clamp(1, MAX_COLUMN_WIDTH)
        })
        .collect()
}

/// Bordered table of the controller's visible rows.
pub struct TableView<'a> {
    controller: &'a TableController,
    selected_column: usize,
    row_offset: usize,
    palette: &'a Palette,
}

impl<'a> TableView<'a> {
    /// Create a table view.
    ///
    /// # Arguments
    /// * `controller` - Source of headers and visible rows
    /// * `selected_column` - Column under the header cursor
    /// * `row_offset` - First visible row to draw
    /// * `palette` - Colors for the current theme
    pub fn new(
        controller: &'a TableController,
        selected_column: usize,
        row_offset: usize,
        palette: &'a Palette,
    ) -> Self {
        Self {
            controller,
            selected_column,
            row_offset,
            palette,
        }
    }
}

impl Widget for TableView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = self.palette;
        let headers = self.controller.header_labels();
        let visible = self.controller.visible_rows();
        let rows: Vec<&Row> = visible.iter().map(|(_, row)| *row).collect();
        let widths = column_widths(&headers, &rows);
        let body_rows = usize::from(area.height.saturating_sub(TABLE_CHROME_HEIGHT));
        let offset = self.row_offset.min(rows.len().saturating_sub(body_rows));

        let header = TuiRow::new(headers.into_iter().enumerate().map(|(column, label)| {
            let style = if column == self.selected_column {
                palette.header_selected
            } else {
                palette.header
            };
            TuiCell::from(label).style(style)
        }));

        let body = rows.iter().enumerate().map(|(position, row)| {
            let style = if position % 2 == 1 {
                palette.stripe
            } else {
                palette.base
            };
            TuiRow::new(row.cells().iter().map(|cell| TuiCell::from(cell.text()))).style(style)
        });

        let title = match self.controller.table().title() {
            "" => String::new(),
            title => format!(" {title} "),
        };

        let table = TuiTable::new(body, widths.into_iter().map(Constraint::Length))
            .header(header)
            .column_spacing(COLUMN_SPACING)
            .style(palette.base)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(palette.border)
                    .title(title)
                    .title_style(palette.title),
            );
        let mut state = TableState::default().with_offset(offset);
        StatefulWidget::render(table, area, buf, &mut state);
    }
}
