//! Table view controller.
//!
//! Owns the table and the three display modes over it (sorted order,
//! paginated visibility, filtered visibility) and enforces that only one of
//! browse or search is effective at a time. All mutation goes through
//! [`TableController::dispatch`].

use crate::model::{Command, Outcome, Rejection, Row, RowId, Table};
use crate::state::navigation::{
    default_base_url, page_link_url, page_size_url, usize_param, PAGE_PARAM, PAGE_SIZE_PARAM,
};
use crate::state::pagination::{
    PageControls, PageMove, PaginationState, DEFAULT_PAGE_SIZE, DEFAULT_PAGINATION_THRESHOLD,
};
use crate::state::search::{filter_rows, NoResultsBanner, SearchQuery, SearchState};
use crate::state::sort::{sort_rows, SortState};
use tracing::{debug, info};
use url::Url;

/// Shown in place of the pagination controls while a search is active.
pub const SEARCH_SUSPENDS_PAGINATION: &str = "Search active - pagination disabled";

/// Construction parameters for a [`TableController`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Rows per page.
    pub page_size: usize,
    /// Row count at or below which pagination is hidden.
    pub pagination_threshold: usize,
    /// Location that page-size changes and page links navigate from.
    pub base_url: Url,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            pagination_threshold: DEFAULT_PAGINATION_THRESHOLD,
            base_url: default_base_url(),
        }
    }
}

/// What the pagination area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationView {
    /// Table is at or below the threshold.
    Hidden,
    /// A search is active; controls are replaced by a notice.
    Suspended,
    /// Buttons and page info.
    Controls(PageControls),
}

/// Owner of the sort, pagination and search state of one table.
///
/// Every change goes through [`TableController::dispatch`], which either
/// applies a [`Command`] completely or rejects it without touching anything.
#[derive(Debug, Clone)]
pub struct TableController {
    table: Table,
    /// Display order; a permutation of the table's row ids.
    order: Vec<RowId>,
    sort: SortState,
    pagination: PaginationState,
    search: SearchState,
    banner: Option<NoResultsBanner>,
    location: Url,
}

impl TableController {
    /// Controller over `table` in source order, on page 1, unsorted.
    pub fn new(table: Table, options: ControllerOptions) -> Self {
        let order: Vec<RowId> = table.row_ids().collect();
        let pagination = PaginationState::new(
            order.len(),
            options.page_size,
            options.pagination_threshold,
        );
        Self {
            table,
            order,
            sort: SortState::default(),
            pagination,
            search: SearchState::default(),
            banner: None,
            location: options.base_url,
        }
    }

    // ===== Accessors =====

    /// The loaded table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Current display order of every row.
    pub fn order(&self) -> &[RowId] {
        &self.order
    }

    /// Active sort column and direction.
    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Page size and current page.
    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    /// Applied search, if any.
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Banner for the last zero-result search, unless dismissed.
    pub fn banner(&self) -> Option<&NoResultsBanner> {
        self.banner.as_ref()
    }

    /// The URL the current view was loaded from.
    pub fn location(&self) -> &Url {
        &self.location
    }

    /// Rows currently shown, in display order.
    ///
    /// Every match while a search is active, the current page otherwise.
    pub fn visible_ids(&self) -> Vec<RowId> {
        match &self.search {
            SearchState::Active { matches, .. } => matches.clone(),
            SearchState::Inactive => self.order[self.pagination.visible_range()].to_vec(),
        }
    }

    /// [`Self::visible_ids`] paired with their rows.
    pub fn visible_rows(&self) -> Vec<(RowId, &Row)> {
        self.visible_ids()
            .into_iter()
            .filter_map(|id| self.table.row(id).map(|row| (id, row)))
            .collect()
    }

    /// Header labels with the sort indicator on the active column.
    pub fn header_labels(&self) -> Vec<String> {
        self.table
            .headers()
            .iter()
            .enumerate()
            .map(|(column, label)| self.sort.header_label(column, label))
            .collect()
    }

    /// What the pagination area should show.
    pub fn pagination_view(&self) -> PaginationView {
        if !self.pagination.is_enabled() {
            PaginationView::Hidden
        } else if self.search.is_active() {
            PaginationView::Suspended
        } else {
            self.pagination
                .controls()
                .map_or(PaginationView::Hidden, PaginationView::Controls)
        }
    }

    // ===== Commands =====

    /// Apply one command. Rejected commands leave every piece of state as it
    /// was.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        let outcome = match command {
            Command::SortBy(column) => self.sort_by(column),
            Command::GoToPage(page) => self.page_move(|p| p.go_to(page)),
            Command::NextPage => self.page_move(|p| Ok(p.next())),
            Command::PrevPage => self.page_move(|p| Ok(p.prev())),
            Command::SetPageSize(page_size) => self.set_page_size(page_size),
            Command::FollowPageLink(page) => self.follow_page_link(page),
            Command::SetQuery(text) => match SearchQuery::new(text) {
                Some(query) => self.apply_query(query),
                None => self.clear_query(),
            },
            Command::ClearQuery => self.clear_query(),
            Command::DismissBanner => {
                if self.banner.take().is_some() {
                    Outcome::Applied
                } else {
                    Outcome::Unchanged
                }
            }
        };
        if let Outcome::Rejected(rejection) = &outcome {
            debug!(%rejection, "command rejected");
        }
        outcome
    }

    fn sort_by(&mut self, column: usize) -> Outcome {
        if self.search.is_active() {
            return Outcome::Rejected(Rejection::SortDuringSearch);
        }
        let columns = self.table.column_count();
        if column >= columns {
            return Outcome::Rejected(Rejection::ColumnOutOfRange { column, columns });
        }
        let direction = self.sort.toggle(column);
        sort_rows(&self.table, &mut self.order, column, direction);
        debug!(column, ?direction, "sorted");
        Outcome::Applied
    }

    fn page_move(
        &mut self,
        step: impl FnOnce(&mut PaginationState) -> Result<PageMove, Rejection>,
    ) -> Outcome {
        if self.search.is_active() {
            return Outcome::Rejected(Rejection::PageDuringSearch);
        }
        if !self.pagination.is_enabled() {
            return Outcome::Unchanged;
        }
        match step(&mut self.pagination) {
            Ok(PageMove::Moved) => {
                debug!(page = self.pagination.current_page(), "page changed");
                Outcome::Applied
            }
            Ok(PageMove::Stayed) => Outcome::Unchanged,
            Err(rejection) => Outcome::Rejected(rejection),
        }
    }

    fn set_page_size(&mut self, page_size: usize) -> Outcome {
        if self.search.is_active() {
            return Outcome::Rejected(Rejection::PageSizeDuringSearch);
        }
        if page_size == 0 {
            return Outcome::Rejected(Rejection::InvalidPageSize);
        }
        Outcome::Navigate(page_size_url(&self.location, page_size))
    }

    fn follow_page_link(&mut self, page: usize) -> Outcome {
        if self.search.is_active() {
            return Outcome::Rejected(Rejection::PageDuringSearch);
        }
        let pages = self.pagination.page_count();
        if page == 0 || page > pages {
            return Outcome::Rejected(Rejection::PageOutOfRange {
                requested: page,
                pages,
            });
        }
        Outcome::Navigate(page_link_url(&self.location, page))
    }

    fn apply_query(&mut self, query: SearchQuery) -> Outcome {
        let matches = filter_rows(&self.table, &self.order, &query);
        let banner = matches
            .is_empty()
            .then(|| NoResultsBanner::new(query.as_str().trim()));
        let search = SearchState::Active { query, matches };

        if search == self.search && banner == self.banner {
            return Outcome::Unchanged;
        }
        debug!(matches = search.match_count(), "filter pass");
        self.search = search;
        self.banner = banner;
        Outcome::Applied
    }

    fn clear_query(&mut self) -> Outcome {
        if !self.search.is_active() && self.banner.is_none() {
            return Outcome::Unchanged;
        }
        self.search = SearchState::Inactive;
        self.banner = None;
        debug!("search cleared");
        Outcome::Applied
    }

    // ===== Navigation =====

    /// Load `url` as the new location, the way a page reload would.
    ///
    /// `page_size` and `page` parameters rebuild the pagination; missing or
    /// invalid values keep the current page size and fall back to page 1.
    /// Display order and sort state carry over; a search does not.
    pub fn navigate_to(&mut self, url: Url) {
        let page_size = usize_param(&url, PAGE_SIZE_PARAM).unwrap_or(self.pagination.page_size());
        let page = usize_param(&url, PAGE_PARAM).unwrap_or(1);

        if let Err(rejection) = self.pagination.set_page_size(page_size) {
            debug!(%rejection, "keeping current page size");
        }
        self.search = SearchState::Inactive;
        self.banner = None;
        if self.pagination.go_to(page).is_err() {
            debug!(page, "requested page out of range, staying on page 1");
        }
        info!(url = %url, page_size, page = self.pagination.current_page(), "navigated");
        self.location = url;
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
