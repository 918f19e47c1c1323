//! Theme palettes.
//!
//! One [`Palette`] per [`Theme`]. When colors are disabled every style
//! collapses to the terminal default plus modifiers, so the active page,
//! the header cursor and the sort column stay distinguishable.

use crate::state::{AlertKind, Theme};
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Whether colors are emitted at all.
///
/// Disabled when the `NO_COLOR` environment variable is set to anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Colors unless `NO_COLOR` is set.
    pub fn from_env() -> Self {
        Self {
            enabled: std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Explicit setting, for tests and `--no-color`.
    pub fn enabled(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether styles may use colors.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Styles for every screen element under one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Default text and background.
    pub base: Style,
    /// Titles and category headings.
    pub title: Style,
    /// Column headers and key names.
    pub header: Style,
    /// Header cell under the column cursor.
    pub header_selected: Style,
    /// Every other body row.
    pub stripe: Style,
    /// Block borders.
    pub border: Style,
    /// Secondary text such as hints.
    pub muted: Style,
    /// Current page button.
    pub page_active: Style,
    /// Prev or next at either end.
    pub page_disabled: Style,
    /// No-results banner.
    pub banner: Style,
    /// Blocking notice popup.
    pub notice: Style,
    /// Validation message in a form.
    pub field_error: Style,
    /// Search box cursor.
    pub cursor: Style,
    info: Style,
    success: Style,
    warning: Style,
    error: Style,
}

impl Palette {
    /// Palette for `theme`, or the monochrome one when colors are off.
    pub fn new(theme: Theme, colors: ColorConfig) -> Self {
        if !colors.colors_enabled() {
            return Self::monochrome();
        }
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }

    fn light() -> Self {
        let base = Style::default().fg(Color::Black).bg(Color::White);
        Self {
            base,
            title: base.fg(Color::Blue).add_modifier(Modifier::BOLD),
            header: base.fg(Color::Black).add_modifier(Modifier::BOLD),
            header_selected: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            stripe: base.bg(Color::Gray),
            border: base.fg(Color::DarkGray),
            muted: base.fg(Color::DarkGray),
            page_active: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            page_disabled: base.fg(Color::Gray),
            banner: base.fg(Color::Red),
            notice: base.fg(Color::Red).add_modifier(Modifier::BOLD),
            field_error: base.fg(Color::Red),
            cursor: Style::default().fg(Color::White).bg(Color::Black),
            info: base.fg(Color::Blue),
            success: base.fg(Color::Green),
            warning: base.fg(Color::Magenta),
            error: base.fg(Color::Red),
        }
    }

    fn dark() -> Self {
        let base = Style::default().fg(Color::White).bg(Color::Black);
        Self {
            base,
            title: base.fg(Color::Cyan).add_modifier(Modifier::BOLD),
            header: base.fg(Color::Yellow).add_modifier(Modifier::BOLD),
            header_selected: Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            stripe: base.bg(Color::DarkGray),
            border: base.fg(Color::Gray),
            muted: base.fg(Color::Gray),
            page_active: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            page_disabled: base.fg(Color::DarkGray),
            banner: base.fg(Color::LightRed),
            notice: base.fg(Color::LightRed).add_modifier(Modifier::BOLD),
            field_error: base.fg(Color::LightRed),
            cursor: Style::default().fg(Color::Black).bg(Color::White),
            info: base.fg(Color::LightBlue),
            success: base.fg(Color::LightGreen),
            warning: base.fg(Color::LightYellow),
            error: base.fg(Color::LightRed),
        }
    }

    fn monochrome() -> Self {
        let base = Style::default();
        let bold = base.add_modifier(Modifier::BOLD);
        let reversed = base.add_modifier(Modifier::REVERSED);
        Self {
            base,
            title: bold,
            header: bold,
            header_selected: reversed.add_modifier(Modifier::BOLD),
            stripe: base,
            border: base,
            muted: base.add_modifier(Modifier::DIM),
            page_active: reversed,
            page_disabled: base.add_modifier(Modifier::DIM),
            banner: bold,
            notice: bold,
            field_error: bold,
            cursor: reversed,
            info: base,
            success: base,
            warning: bold,
            error: bold,
        }
    }

    /// Style for an alert of `kind`.
    pub fn alert(&self, kind: AlertKind) -> Style {
        match kind {
            AlertKind::Info => self.info,
            AlertKind::Success => self.success,
            AlertKind::Warning => self.warning,
            AlertKind::Error => self.error,
        }
    }
}
