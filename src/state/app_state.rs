//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. It wraps the
//! [`TableController`] with everything the terminal shell needs around it:
//! the search box and its debounce timer, the blocking notice, the page
//! size dialog, flash alerts, stat counters and the theme.
//!
//! Time is always passed in. Nothing here reads the clock or touches the
//! terminal.

use crate::model::{Command, KeyAction, Outcome};
use crate::state::alerts::{AlertKind, AlertQueue, DEFAULT_ALERT_TIMEOUT};
use crate::state::controller::{PaginationView, TableController};
use crate::state::counter::{CounterKind, StatCounters};
use crate::state::form::{Form, FormField};
use crate::state::search_input::{
    handle_backspace, handle_char_input, handle_clear, handle_cursor_left, handle_cursor_right,
    QueryDebouncer, SearchBox, DEFAULT_DEBOUNCE,
};
use crate::state::theme::Theme;
use std::time::{Duration, Instant};
use tracing::debug;

/// Timing and appearance settings resolved from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppSettings {
    /// Idle time before a typed search is applied.
    pub search_debounce: Duration,
    /// Time a flash alert stays fully visible.
    pub alert_timeout: Duration,
    /// Theme at startup.
    pub theme: Theme,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            search_debounce: DEFAULT_DEBOUNCE,
            alert_timeout: DEFAULT_ALERT_TIMEOUT,
            theme: Theme::default(),
        }
    }
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # Input modes
///
/// - **Browse**: keys map to [`KeyAction`]s (sort, page, search, theme)
/// - **Search**: keys edit the search box; every edit re-arms the debounce
/// - **PageSizeDialog**: keys edit the page size form
///
/// A pending [`Notice`] sits above every mode and swallows input until it
/// is acknowledged.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Sort, pagination and search over the loaded table.
    pub controller: TableController,

    /// Which input surface receives keystrokes.
    pub mode: InputMode,

    /// Text typed into the search box. Applied to the controller only after
    /// the debounce delay.
    pub search_box: SearchBox,

    /// Cancel-and-restart timer between the search box and the filter pass.
    pub debouncer: QueryDebouncer,

    /// Blocking message for a rejected action. Must be acknowledged.
    pub notice: Option<Notice>,

    /// Page size form, present while the dialog is open.
    pub page_size_form: Option<Form>,

    /// Flash alerts shown in the status area.
    pub alerts: AlertQueue,

    /// Animated row, visible and page counters.
    pub counters: StatCounters,

    /// Active color theme.
    pub theme: Theme,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,

    /// Zero-based column under the header cursor.
    pub selected_column: usize,

    /// First visible row drawn at the top of the table body. Reset whenever
    /// the set or order of visible rows changes.
    pub row_offset: usize,
}

/// Which surface receives keyboard input. Sum type, exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys map to bound actions.
    #[default]
    Browse,
    /// Keys edit the search box.
    Search,
    /// Keys edit the page size form.
    PageSizeDialog,
}

/// A rejection the user has to acknowledge before continuing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Text of the rejection.
    pub message: String,
}

/// Side effects the shell performs after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing for the shell to do.
    None,
    /// Exit the application.
    Quit,
    /// Theme changed; persist it.
    ThemeChanged(Theme),
}

impl AppState {
    /// Create state around a loaded controller. Counters start animating
    /// from zero toward the table's figures.
    pub fn new(controller: TableController, settings: AppSettings, now: Instant) -> Self {
        let mut state = Self {
            controller,
            mode: InputMode::Browse,
            search_box: SearchBox::default(),
            debouncer: QueryDebouncer::new(settings.search_debounce),
            notice: None,
            page_size_form: None,
            alerts: AlertQueue::new(settings.alert_timeout),
            counters: StatCounters::default(),
            theme: settings.theme,
            help_visible: false,
            selected_column: 0,
            row_offset: 0,
        };
        state.refresh_counters(now);
        state
    }

    /// Apply a search immediately, bypassing the search box debounce.
    pub fn apply_initial_query(&mut self, query: &str, now: Instant) {
        self.search_box = SearchBox::with_text(query);
        self.dispatch(Command::SetQuery(query.to_string()), now);
    }

    // ===== Dispatch =====

    /// Run a command through the controller and react to its outcome.
    ///
    /// Rejections raise the blocking notice. Navigation is performed right
    /// away, the way a browser would load the new URL.
    pub fn dispatch(&mut self, command: Command, now: Instant) -> Outcome {
        let sorting = matches!(command, Command::SortBy(_));
        let outcome = self.controller.dispatch(command);
        if matches!(outcome, Outcome::Applied | Outcome::Navigate(_)) {
            self.row_offset = 0;
        }
        match &outcome {
            Outcome::Rejected(rejection) => {
                self.notice = Some(Notice {
                    message: rejection.to_string(),
                });
            }
            Outcome::Navigate(url) => {
                self.controller.navigate_to(url.clone());
                self.search_box = SearchBox::default();
                self.debouncer.cancel();
                self.alerts.push(
                    now,
                    AlertKind::Info,
                    format!(
                        "Showing {} rows per page",
                        self.controller.pagination().page_size()
                    ),
                );
            }
            Outcome::Applied if sorting => {
                if let Some(column) = self.controller.sort().column() {
                    let label = self.controller.header_labels().swap_remove(column);
                    self.alerts
                        .push(now, AlertKind::Success, format!("Sorted by {label}"));
                }
            }
            Outcome::Applied | Outcome::Unchanged => {}
        }
        self.refresh_counters(now);
        outcome
    }

    fn refresh_counters(&mut self, now: Instant) {
        let table_rows = self.controller.table().row_count();
        let visible = self.controller.visible_ids().len();
        let pages = match self.controller.pagination_view() {
            PaginationView::Controls(controls) => controls.page_count,
            PaginationView::Hidden | PaginationView::Suspended => 1,
        };
        self.counters.set_target(now, CounterKind::Rows, table_rows);
        self.counters.set_target(now, CounterKind::Visible, visible);
        self.counters.set_target(now, CounterKind::Pages, pages);
    }

    // ===== Browse mode =====

    /// Handle a bound key action in browse mode.
    pub fn apply_action(&mut self, action: KeyAction, now: Instant) -> Effect {
        let columns = self.controller.table().column_count();
        match action {
            KeyAction::ColumnLeft => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyAction::ColumnRight => {
                if self.selected_column + 1 < columns {
                    self.selected_column += 1;
                }
            }
            KeyAction::SortSelected => {
                self.dispatch(Command::SortBy(self.selected_column), now);
            }
            KeyAction::SortColumn(number) => {
                let column = number.saturating_sub(1);
                if self.dispatch(Command::SortBy(column), now) == Outcome::Applied {
                    self.selected_column = column;
                }
            }
            // Needs the viewport height; the shell routes these through
            // `row_scroll::handle_scroll_action`
            KeyAction::ScrollUp | KeyAction::ScrollDown => {}
            KeyAction::NextPage => {
                self.dispatch(Command::NextPage, now);
            }
            KeyAction::PrevPage => {
                self.dispatch(Command::PrevPage, now);
            }
            KeyAction::FirstPage => {
                self.dispatch(Command::GoToPage(1), now);
            }
            KeyAction::LastPage => {
                let last = self.controller.pagination().page_count();
                self.dispatch(Command::GoToPage(last), now);
            }
            KeyAction::OpenPageLink => {
                let page = self.controller.pagination().current_page();
                self.dispatch(Command::FollowPageLink(page), now);
            }
            KeyAction::ChangePageSize => self.open_page_size_dialog(),
            KeyAction::StartSearch => {
                self.mode = InputMode::Search;
            }
            KeyAction::ClearSearch => self.clear_search(now),
            KeyAction::DismissBanner => {
                self.dispatch(Command::DismissBanner, now);
            }
            KeyAction::ToggleTheme => {
                self.theme = self.theme.toggled();
                self.alerts
                    .push(now, AlertKind::Info, format!("Theme: {}", self.theme.as_str()));
                return Effect::ThemeChanged(self.theme);
            }
            KeyAction::DismissAlert => {
                self.alerts.dismiss_latest();
            }
            KeyAction::Help => {
                self.help_visible = !self.help_visible;
            }
            KeyAction::Quit => return Effect::Quit,
        }
        Effect::None
    }

    /// Empty the search box and restore browsing immediately.
    pub fn clear_search(&mut self, now: Instant) {
        self.search_box = handle_clear(std::mem::take(&mut self.search_box));
        self.debouncer.cancel();
        self.mode = InputMode::Browse;
        self.dispatch(Command::ClearQuery, now);
    }

    /// Close the pending notice.
    pub fn acknowledge_notice(&mut self) {
        self.notice = None;
    }

    // ===== Search mode =====

    /// Type `ch` at the cursor and re-arm the debounce.
    pub fn search_char(&mut self, ch: char, now: Instant) {
        self.search_box = handle_char_input(std::mem::take(&mut self.search_box), ch);
        self.debouncer.keystroke(now, self.search_box.text());
    }

    /// Delete before the cursor. Re-arms the debounce only if text changed.
    pub fn search_backspace(&mut self, now: Instant) {
        let before = self.search_box.text().len();
        self.search_box = handle_backspace(std::mem::take(&mut self.search_box));
        if self.search_box.text().len() != before {
            self.debouncer.keystroke(now, self.search_box.text());
        }
    }

    /// Move the search cursor one character left.
    pub fn search_cursor_left(&mut self) {
        self.search_box = handle_cursor_left(std::mem::take(&mut self.search_box));
    }

    /// Move the search cursor one character right.
    pub fn search_cursor_right(&mut self) {
        self.search_box = handle_cursor_right(std::mem::take(&mut self.search_box));
    }

    /// Leave the search box, applying a pending query right away.
    pub fn submit_search(&mut self, now: Instant) {
        self.mode = InputMode::Browse;
        if self.debouncer.is_pending() {
            self.debouncer.cancel();
            self.dispatch(Command::SetQuery(self.search_box.text().to_string()), now);
        }
    }

    // ===== Page size dialog =====

    fn open_page_size_dialog(&mut self) {
        let current = self.controller.pagination().page_size();
        self.page_size_form = Some(Form::new(vec![
            FormField::required("Rows per page").with_value(current.to_string())
        ]));
        self.mode = InputMode::PageSizeDialog;
    }

    /// Append a digit to the page size field.
    pub fn page_size_input(&mut self, ch: char) {
        if let Some(field) = self.page_size_form.as_mut().and_then(|f| f.field_mut(0)) {
            field.value_mut().push(ch);
        }
    }

    /// Delete the last character of the page size field.
    pub fn page_size_backspace(&mut self) {
        if let Some(field) = self.page_size_form.as_mut().and_then(|f| f.field_mut(0)) {
            field.value_mut().pop();
        }
    }

    /// Close the dialog without changing anything.
    pub fn cancel_page_size_dialog(&mut self) {
        self.page_size_form = None;
        self.mode = InputMode::Browse;
    }

    /// Validate the dialog and request the page size change.
    ///
    /// The dialog stays open while the form is invalid. A rejected change
    /// closes it and keeps the previous page size.
    pub fn submit_page_size(&mut self, now: Instant) -> Option<Outcome> {
        let form = self.page_size_form.as_mut()?;
        if form.validate().is_err() {
            return None;
        }
        let field = form.field_mut(0)?;
        let page_size = match field.value().trim().parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                field.set_error("Enter a positive whole number");
                return None;
            }
        };
        self.cancel_page_size_dialog();
        debug!(page_size, "page size submitted");
        Some(self.dispatch(Command::SetPageSize(page_size), now))
    }

    // ===== Timers =====

    /// Run every timer due at `now`. Returns true if anything visible
    /// changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if let Some(query) = self.debouncer.poll(now) {
            changed |= self.dispatch(Command::SetQuery(query), now) != Outcome::Unchanged;
        }
        changed |= self.alerts.tick(now);
        changed |= self.counters.tick(now);
        changed
    }

    /// Earliest moment a timer needs servicing.
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.debouncer.next_deadline(),
            self.alerts.next_deadline(),
            self.counters.next_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
