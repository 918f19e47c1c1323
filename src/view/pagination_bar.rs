//! Pagination controls line.

use super::styles::Palette;
use crate::state::controller::SEARCH_SUSPENDS_PAGINATION;
use crate::state::{PageButton, PageControls, PaginationView};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Page buttons kept on either side of the current page.
const BUTTON_RADIUS: usize = 2;

/// One slot of the button strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSlot {
    /// A page number button.
    Page(PageButton),
    /// Skipped pages, drawn as `…`.
    Gap,
}

/// First, last and the pages around the current one, with gaps between.
pub fn button_slots(controls: &PageControls) -> Vec<ButtonSlot> {
    let mut slots = Vec::new();
    let mut last_shown = 0;
    for button in &controls.buttons {
        let near = button.number.abs_diff(controls.current_page) <= BUTTON_RADIUS;
        if button.number == 1 || button.number == controls.page_count || near {
            if last_shown != 0 && button.number > last_shown + 1 {
                slots.push(ButtonSlot::Gap);
            }
            slots.push(ButtonSlot::Page(*button));
            last_shown = button.number;
        }
    }
    slots
}

/// Prev/next buttons, page numbers and the page info line.
pub struct PaginationBar<'a> {
    view: &'a PaginationView,
    palette: &'a Palette,
}

impl<'a> PaginationBar<'a> {
    /// Bar for `view`.
    pub fn new(view: &'a PaginationView, palette: &'a Palette) -> Self {
        Self { view, palette }
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = self.palette;
        let line = match self.view {
            PaginationView::Hidden => return,
            PaginationView::Suspended => {
                Line::from(Span::styled(SEARCH_SUSPENDS_PAGINATION, palette.muted))
            }
            PaginationView::Controls(controls) => {
                let arrow = |label: &'static str, disabled: bool| {
                    let style = if disabled {
                        palette.page_disabled
                    } else {
                        palette.base
                    };
                    Span::styled(label, style)
                };

                let mut spans = vec![arrow("« Prev", controls.prev_disabled), Span::raw(" ")];
                for slot in button_slots(controls) {
                    spans.push(match slot {
                        ButtonSlot::Page(button) if button.active => {
                            Span::styled(format!(" {} ", button.number), palette.page_active)
                        }
                        ButtonSlot::Page(button) => {
                            Span::styled(format!(" {} ", button.number), palette.base)
                        }
                        ButtonSlot::Gap => Span::styled(" … ", palette.muted),
                    });
                }
                spans.push(Span::raw(" "));
                spans.push(arrow("Next »", controls.next_disabled));
                spans.push(Span::styled(format!("   {}", controls.info()), palette.muted));
                Line::from(spans)
            }
        };
        Paragraph::new(line).style(palette.base).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PaginationState;

    fn controls(rows: usize, page: usize) -> PageControls {
        let mut state = PaginationState::new(rows, 10, 10);
        state.go_to(page).unwrap();
        state.controls().unwrap()
    }

    fn numbers(slots: &[ButtonSlot]) -> Vec<Option<usize>> {
        slots
            .iter()
            .map(|slot| match slot {
                ButtonSlot::Page(button) => Some(button.number),
                ButtonSlot::Gap => None,
            })
            .collect()
    }

    #[test]
    fn few_pages_show_every_button() {
        let slots = button_slots(&controls(25, 2));
        assert_eq!(numbers(&slots), vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn many_pages_collapse_into_gaps() {
        let slots = button_slots(&controls(200, 10));
        assert_eq!(
            numbers(&slots),
            vec![
                Some(1),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                None,
                Some(20)
            ]
        );
    }

    #[test]
    fn active_button_matches_current_page() {
        let slots = button_slots(&controls(200, 1));
        let active: Vec<_> = slots
            .iter()
            .filter_map(|slot| match slot {
                ButtonSlot::Page(button) if button.active => Some(button.number),
                _ => None,
            })
            .collect();
        assert_eq!(active, vec![1]);
    }
}
