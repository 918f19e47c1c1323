//! Screen layout.
//!
//! Pure layout logic - splits the frame into title, search box, table,
//! banner, pagination and status areas, then renders each widget into its
//! area. Overlays (notice, page size dialog, help) are drawn last.

use super::banner::BannerView;
use super::constants::{
    BANNER_HEIGHT, PAGINATION_HEIGHT, SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT, TITLE_BAR_HEIGHT,
};
use super::dialogs::{render_notice, render_page_size_dialog};
use super::help::render_help_overlay;
use super::pagination_bar::PaginationBar;
use super::search_input::SearchInput;
use super::status::{StatusBar, TitleBar};
use super::styles::Palette;
use super::table_view::TableView;
use crate::state::{AppState, InputMode, PaginationView};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Areas for each screen region. Optional regions are `None` when hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title line with the counters.
    pub title: Rect,
    /// Search box.
    pub search: Rect,
    /// Table, header and borders included.
    pub table: Rect,
    /// No-results banner.
    pub banner: Option<Rect>,
    /// Pagination controls or the suspended notice.
    pub pagination: Option<Rect>,
    /// Status line.
    pub status: Rect,
}

/// Split `area` top to bottom. The table takes whatever is left.
pub fn calculate_layout(area: Rect, show_banner: bool, show_pagination: bool) -> ScreenLayout {
    let mut constraints = vec![
        Constraint::Length(TITLE_BAR_HEIGHT),
        Constraint::Length(SEARCH_INPUT_HEIGHT),
        Constraint::Min(0),
    ];
    if show_banner {
        constraints.push(Constraint::Length(BANNER_HEIGHT));
    }
    if show_pagination {
        constraints.push(Constraint::Length(PAGINATION_HEIGHT));
    }
    constraints.push(Constraint::Length(STATUS_BAR_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut next = 3;
    let mut take = |shown: bool| {
        shown.then(|| {
            let rect = chunks[next];
            next += 1;
            rect
        })
    };
    let banner = take(show_banner);
    let pagination = take(show_pagination);

    ScreenLayout {
        title: chunks[0],
        search: chunks[1],
        table: chunks[2],
        banner,
        pagination,
        status: chunks[chunks.len() - 1],
    }
}

/// Render the whole screen for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, source_label: &str, palette: &Palette) {
    let banner = state.controller.banner();
    let pagination_view = state.controller.pagination_view();
    let show_pagination = pagination_view != PaginationView::Hidden;
    let layout = calculate_layout(frame.area(), banner.is_some(), show_pagination);

    frame.render_widget(TitleBar::new(state, source_label, palette), layout.title);
    frame.render_widget(
        SearchInput::new(&state.search_box, state.mode == InputMode::Search, palette),
        layout.search,
    );
    frame.render_widget(
        TableView::new(
            &state.controller,
            state.selected_column,
            state.row_offset,
            palette,
        ),
        layout.table,
    );
    if let (Some(banner), Some(area)) = (banner, layout.banner) {
        frame.render_widget(BannerView::new(banner, palette), area);
    }
    if let Some(area) = layout.pagination {
        frame.render_widget(PaginationBar::new(&pagination_view, palette), area);
    }
    frame.render_widget(StatusBar::new(state, palette), layout.status);

    if let Some(form) = &state.page_size_form {
        render_page_size_dialog(frame, form, palette);
    }
    if state.help_visible {
        render_help_overlay(frame, palette);
    }
    // The notice blocks everything else, so it goes on top
    if let Some(notice) = &state.notice {
        render_notice(frame, notice, palette);
    }
}

/// A rect of `percent_x` by `percent_y` of `area`, centered in it.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    fixed_rect(width, height, area)
}

/// A `width` by `height` rect centered in `area`, shrunk to fit.
pub fn fixed_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
