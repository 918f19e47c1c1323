//! Modal dialogs: the blocking notice and the page size form.

use super::constants::DIALOG_WIDTH;
use super::layout::fixed_rect;
use super::styles::Palette;
use crate::state::{Form, Notice};
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a rejection notice. Input is blocked until it is acknowledged.
pub fn render_notice(frame: &mut Frame, notice: &Notice, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled(notice.message.as_str(), palette.notice)),
        Line::default(),
        Line::from(Span::styled("Press Enter to continue", palette.muted)),
    ];
    // Borders plus the lines above; long messages wrap onto one extra line
    let area = fixed_rect(DIALOG_WIDTH, 6, frame.area());

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .style(palette.base)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(palette.notice)
                    .title(" Notice "),
            ),
        area,
    );
}

/// Render the page size form with its inline validation errors.
pub fn render_page_size_dialog(frame: &mut Frame, form: &Form, palette: &Palette) {
    let mut lines = Vec::new();
    for field in form.fields() {
        let marker = if field.is_required() { " *" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("{}{marker}: ", field.label()), palette.header),
            Span::raw(field.value().to_string()),
            Span::styled(" ", palette.cursor),
        ]));
        if let Some(error) = field.error() {
            lines.push(Line::from(Span::styled(error.to_string(), palette.field_error)));
        }
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Enter: apply  Esc: cancel",
        palette.muted,
    )));

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = fixed_rect(DIALOG_WIDTH, height, frame.area());

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).style(palette.base).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.title)
                .title(" Page Size "),
        ),
        area,
    );
}
