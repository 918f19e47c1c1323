//! Commands consumed by the table controller and the outcomes it reports.

use thiserror::Error;
use url::Url;

/// A discrete user action against the table view.
///
/// Every interaction is expressed as one of these; the controller's
/// `dispatch` is the single state-transition function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Sort by the given zero-based column. Toggles direction if the column
    /// is already active.
    SortBy(usize),
    /// Jump to a 1-based page.
    GoToPage(usize),
    /// Next page; no-op on the last page.
    NextPage,
    /// Previous page; no-op on the first page.
    PrevPage,
    /// Change rows per page. Produces a navigation to page 1.
    SetPageSize(usize),
    /// Follow a server-side pagination link to a 1-based page.
    FollowPageLink(usize),
    /// Run a filter pass with this query. An empty (after trim) query clears.
    SetQuery(String),
    /// Clear the search and restore browsing.
    ClearQuery,
    /// Close the no-results banner.
    DismissBanner,
}

/// Result of dispatching a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed.
    Applied,
    /// Accepted but nothing changed (e.g. "next" on the last page).
    Unchanged,
    /// Refused by policy; state is untouched. Surface to the user.
    Rejected(Rejection),
    /// The action is a full navigation to this URL.
    Navigate(Url),
}

impl Outcome {
    /// Whether the command was refused by policy.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }
}

/// Policy refusals. The `Display` text is what the blocking notice shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Sorting was requested while a search is active.
    #[error("The table cannot be sorted during a search. Clear the search first.")]
    SortDuringSearch,

    /// A page move was requested while a search is active.
    #[error("Pages cannot be browsed during a search. Clear the search first.")]
    PageDuringSearch,

    /// A page size change was requested while a search is active.
    #[error("The page size cannot be changed during a search. Clear the search first.")]
    PageSizeDuringSearch,

    /// The sort column is past the last column.
    #[error("Column {column} does not exist (table has {columns} columns)")]
    ColumnOutOfRange {
        /// Zero-based column requested.
        column: usize,
        /// Columns the table has.
        columns: usize,
    },

    /// The requested page is outside `1..=pages`.
    #[error("Page {requested} does not exist (there are {pages} pages)")]
    PageOutOfRange {
        /// One-based page requested.
        requested: usize,
        /// Pages available.
        pages: usize,
    },

    /// A page size of zero.
    #[error("Page size must be a positive number")]
    InvalidPageSize,
}
