//! Pagination state machine.
//!
//! Partitions the display order into fixed-size pages and reports which
//! slice is visible. Pages are 1-based throughout, matching the page
//! buttons and the `page` query parameter.

use crate::model::Rejection;
use std::ops::Range;

/// Rows per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pagination only kicks in above this many rows.
pub const DEFAULT_PAGINATION_THRESHOLD: usize = 10;

/// Result of a page move that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMove {
    /// The current page changed.
    Moved,
    /// Already on the requested page.
    Stayed,
}

/// Per-table pagination state.
///
/// Invariant: `1 <= current_page <= page_count()` and `page_size >= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    page_size: usize,
    current_page: usize,
    row_count: usize,
    threshold: usize,
}

impl PaginationState {
    /// Create pagination for `row_count` rows starting on page 1.
    ///
    /// A zero page size is clamped to 1.
    pub fn new(row_count: usize, page_size: usize, threshold: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
            row_count,
            threshold,
        }
    }

    /// Rows per page, at least 1.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// One-based current page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Rows being paginated.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Row count at or below which pagination is off.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Whether the table is large enough to be paginated at all.
    pub fn is_enabled(&self) -> bool {
        self.row_count > self.threshold
    }

    /// Number of pages; at least 1 even for an empty table.
    pub fn page_count(&self) -> usize {
        self.row_count.div_ceil(self.page_size).max(1)
    }

    /// Whether the current page is page 1.
    pub fn is_first_page(&self) -> bool {
        self.current_page == 1
    }

    /// Whether the current page is the last one.
    pub fn is_last_page(&self) -> bool {
        self.current_page == self.page_count()
    }

    /// Zero-based display positions shown on the current page.
    ///
    /// Every position when pagination is disabled.
    pub fn visible_range(&self) -> Range<usize> {
        if !self.is_enabled() {
            return 0..self.row_count;
        }
        let start = (self.current_page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.row_count);
        start.min(end)..end
    }

    /// Jump to a 1-based page.
    pub fn go_to(&mut self, page: usize) -> Result<PageMove, Rejection> {
        let pages = self.page_count();
        if page == 0 || page > pages {
            return Err(Rejection::PageOutOfRange {
                requested: page,
                pages,
            });
        }
        if page == self.current_page {
            return Ok(PageMove::Stayed);
        }
        self.current_page = page;
        Ok(PageMove::Moved)
    }

    /// Next page; stays put on the last page.
    pub fn next(&mut self) -> PageMove {
        if self.is_last_page() {
            PageMove::Stayed
        } else {
            self.current_page += 1;
            PageMove::Moved
        }
    }

    /// Previous page; stays put on the first page.
    pub fn prev(&mut self) -> PageMove {
        if self.is_first_page() {
            PageMove::Stayed
        } else {
            self.current_page -= 1;
            PageMove::Moved
        }
    }

    /// Change the page size and return to page 1.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), Rejection> {
        if page_size == 0 {
            return Err(Rejection::InvalidPageSize);
        }
        self.page_size = page_size;
        self.current_page = 1;
        Ok(())
    }

    /// Control surface for the current page; `None` when pagination is off.
    pub fn controls(&self) -> Option<PageControls> {
        if !self.is_enabled() {
            return None;
        }
        let pages = self.page_count();
        Some(PageControls {
            current_page: self.current_page,
            page_count: pages,
            row_count: self.row_count,
            prev_disabled: self.is_first_page(),
            next_disabled: self.is_last_page(),
            buttons: (1..=pages)
                .map(|number| PageButton {
                    number,
                    active: number == self.current_page,
                })
                .collect(),
        })
    }
}

/// Rendered pagination controls, regenerated on every page change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    /// One-based current page.
    pub current_page: usize,
    /// Total pages.
    pub page_count: usize,
    /// Rows across all pages.
    pub row_count: usize,
    /// On the first page.
    pub prev_disabled: bool,
    /// On the last page.
    pub next_disabled: bool,
    /// One button per page, in order.
    pub buttons: Vec<PageButton>,
}

impl PageControls {
    /// `Page 2 of 3 (25 rows)`
    pub fn info(&self) -> String {
        format!(
            "Page {} of {} ({} rows)",
            self.current_page, self.page_count, self.row_count
        )
    }
}

/// One direct-jump page button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    /// One-based page number.
    pub number: usize,
    /// Whether this is the current page.
    pub active: bool,
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
