//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Column selection and sorting
    /// Move the column cursor left. Default: h/←
    ColumnLeft,
    /// Move the column cursor right. Default: l/→
    ColumnRight,
    /// Sort by the column under the cursor. Default: s/Enter
    SortSelected,
    /// Sort by a 1-based column number. Default: 1-9
    SortColumn(usize),

    // Row scrolling
    /// Scroll the table body up one row. Default: k/↑
    ScrollUp,
    /// Scroll the table body down one row. Default: j/↓
    ScrollDown,

    // Pagination
    /// Next page. Default: n/PageDown/]
    NextPage,
    /// Previous page. Default: p/PageUp/[
    PrevPage,
    /// Jump to the first page. Default: g/Home
    FirstPage,
    /// Jump to the last page. Default: G/End
    LastPage,
    /// Open the page size dialog. Default: z
    ChangePageSize,
    /// Follow the server-side link of the current page. Default: o
    OpenPageLink,

    // Search
    /// Focus the search box. Default: //Ctrl+f
    StartSearch,
    /// Clear the search query. Default: c
    ClearSearch,
    /// Close the no-results banner. Default: x
    DismissBanner,

    // Application
    /// Toggle light/dark theme. Default: t
    ToggleTheme,
    /// Close the newest flash alert. Default: d
    DismissAlert,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
