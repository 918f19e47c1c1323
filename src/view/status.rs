//! Title line (counters) and status bar (alerts and hints).

use super::styles::Palette;
use crate::state::{AlertPhase, AppState, CounterKind, InputMode};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// `Rows 25 · Visible 10 · Pages 3`
pub fn counters_text(state: &AppState) -> String {
    CounterKind::ALL
        .iter()
        .map(|kind| format!("{} {}", kind.label(), state.counters.value(*kind)))
        .collect::<Vec<_>>()
        .join(" · ")
}

/// Hint for the active input mode, shown when no alert is up.
fn mode_hint(mode: InputMode) -> &'static str {
    match mode {
        InputMode::Browse => "/ search  s sort  n/p page  z page size  t theme  ? help  q quit",
        InputMode::Search => "Type to filter  Enter apply  Esc clear",
        InputMode::PageSizeDialog => "Digits edit  Enter apply  Esc cancel",
    }
}

/// Title line: app name, input label and the counters.
pub struct TitleBar<'a> {
    state: &'a AppState,
    source_label: &'a str,
    palette: &'a Palette,
}

impl<'a> TitleBar<'a> {
    /// Title bar for `state`, labelled with the input source.
    pub fn new(state: &'a AppState, source_label: &'a str, palette: &'a Palette) -> Self {
        Self {
            state,
            source_label,
            palette,
        }
    }
}

impl Widget for TitleBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = self.palette;
        Paragraph::new(Line::from(vec![
            Span::styled(" admintable ", palette.title),
            Span::styled(self.source_label.to_string(), palette.muted),
        ]))
        .style(palette.base)
        .render(area, buf);

        // Counters overlay the right edge of the same line
        Paragraph::new(Span::styled(
            format!("{} ", counters_text(self.state)),
            palette.header,
        ))
        .alignment(Alignment::Right)
        .render(area, buf);
    }
}

/// Bottom line: latest alert, or key hints for the current mode.
pub struct StatusBar<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> StatusBar<'a> {
    /// Status bar for `state`.
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = self.palette;
        let line = match self.state.alerts.alerts().last() {
            Some(alert) => {
                let mut style = palette.alert(alert.kind());
                if alert.phase() == AlertPhase::Fading {
                    style = style.add_modifier(Modifier::DIM);
                }
                let more = self.state.alerts.alerts().len() - 1;
                let mut spans = vec![Span::styled(format!(" {}", alert.message()), style)];
                if more > 0 {
                    spans.push(Span::styled(format!("  (+{more})"), palette.muted));
                }
                spans.push(Span::styled("  d dismiss", palette.muted));
                Line::from(spans)
            }
            None => Line::from(Span::styled(
                format!(" {}", mode_hint(self.state.mode)),
                palette.muted,
            )),
        };
        Paragraph::new(line).style(palette.base).render(area, buf);
    }
}
