//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod banner;
mod dialogs;
mod help;
mod layout;
mod pagination_bar;
mod search_input;
mod status;
mod styles;
mod table_view;

pub use banner::BannerView;
pub use help::render_help_overlay;
pub use layout::{calculate_layout, render_layout, ScreenLayout};
pub use pagination_bar::PaginationBar;
pub use search_input::SearchInput;
pub use status::{counters_text, StatusBar, TitleBar};
pub use styles::{ColorConfig, Palette};
pub use table_view::{column_widths, TableView};

use crate::config::keybindings::KeyBindings;
use crate::config::ResolvedConfig;
use crate::model::{AppError, KeyAction};
use crate::source::InputSource;
use crate::state::row_scroll::handle_scroll_action;
use crate::state::theme::{load_theme, save_theme};
use crate::state::{
    AppSettings, AppState, ControllerOptions, Effect, FilePreferenceStore, InputMode,
    MemoryPreferenceStore, PaginationView, PreferenceStore, TableController, Theme,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use constants::TABLE_CHROME_HEIGHT;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Longest the event loop sleeps when no timer is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error
    #[error("Input error: {0}")]
    Input(#[from] crate::model::InputError),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    /// Where the theme choice is persisted.
    preferences: Box<dyn PreferenceStore>,
    colors: ColorConfig,
    /// File path or `<stdin>`, shown in the title line.
    source_label: String,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        app_state: AppState,
        preferences: Box<dyn PreferenceStore>,
        source_label: String,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            preferences,
            colors: ColorConfig::from_env(),
            source_label,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Sleeps until the next key
    /// press or the next timer deadline, whichever comes first, and only
    /// redraws when something changed.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let now = Instant::now();
            let timeout = self
                .app_state
                .next_deadline()
                .map_or(IDLE_POLL, |deadline| deadline.saturating_duration_since(now))
                .min(IDLE_POLL);

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key, Instant::now()) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(..) => self.draw()?,
                    _ => {}
                }
            }

            if self.app_state.tick(Instant::now()) {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Route one key press. Returns true if the app should quit.
    ///
    /// Priority: notice, help overlay, then the active input mode.
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            return true;
        }

        // A pending notice swallows everything until acknowledged
        if self.app_state.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.app_state.acknowledge_notice();
            }
            return false;
        }

        if self.app_state.help_visible {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.app_state.help_visible = false;
            }
            return false;
        }

        match self.app_state.mode {
            InputMode::Search => self.handle_search_key(key, now),
            InputMode::PageSizeDialog => self.handle_dialog_key(key, now),
            InputMode::Browse => {
                let Some(action) = self.key_bindings.get(key) else {
                    return false;
                };
                if matches!(action, KeyAction::ScrollUp | KeyAction::ScrollDown) {
                    let viewport = self.table_viewport_rows();
                    handle_scroll_action(&mut self.app_state, action, viewport);
                    return false;
                }
                match self.app_state.apply_action(action, now) {
                    Effect::Quit => return true,
                    Effect::ThemeChanged(theme) => self.persist_theme(theme),
                    Effect::None => {}
                }
            }
        }
        false
    }

    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.app_state.search_char(ch, now);
            }
            KeyCode::Backspace => self.app_state.search_backspace(now),
            KeyCode::Left => self.app_state.search_cursor_left(),
            KeyCode::Right => self.app_state.search_cursor_right(),
            KeyCode::Enter => self.app_state.submit_search(now),
            KeyCode::Esc => self.app_state.clear_search(now),
            _ => {}
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char(ch) if ch.is_ascii_digit() => self.app_state.page_size_input(ch),
            KeyCode::Backspace => self.app_state.page_size_backspace(),
            KeyCode::Enter => {
                if let Some(outcome) = self.app_state.submit_page_size(now) {
                    debug!(?outcome, "page size dialog submitted");
                }
            }
            KeyCode::Esc => self.app_state.cancel_page_size_dialog(),
            _ => {}
        }
    }

    /// Body rows the table area holds at the current terminal size.
    fn table_viewport_rows(&self) -> usize {
        let size = match self.terminal.size() {
            Ok(size) => size,
            Err(error) => {
                debug!(%error, "terminal size unavailable, not scrolling");
                return 0;
            }
        };
        let controller = &self.app_state.controller;
        let layout = calculate_layout(
            Rect::new(0, 0, size.width, size.height),
            controller.banner().is_some(),
            controller.pagination_view() != PaginationView::Hidden,
        );
        usize::from(layout.table.height.saturating_sub(TABLE_CHROME_HEIGHT))
    }

    fn persist_theme(&mut self, theme: Theme) {
        save_theme(self.preferences.as_mut(), theme);
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        let palette = Palette::new(self.app_state.theme, self.colors);
        let state = &self.app_state;
        let label = self.source_label.as_str();
        self.terminal
            .draw(|frame| render_layout(frame, state, label, &palette))?;
        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp with a provided terminal (test-only)
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        preferences: Box<dyn PreferenceStore>,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            preferences,
            colors: ColorConfig::enabled(true),
            source_label: "orders.json".to_string(),
        }
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn preferences(&self) -> &dyn PreferenceStore {
        self.preferences.as_ref()
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent, now: Instant) -> bool {
        self.handle_key(key, now)
    }

    /// Fire every timer due at `now` (test-only)
    pub(crate) fn tick_test(&mut self, now: Instant) -> bool {
        self.app_state.tick(now)
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

// ===== CLI Arguments =====

/// Startup settings handed from `main` to the TUI.
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Page size, threshold and base URL.
    pub options: ControllerOptions,
    /// Idle time before a typed search is applied.
    pub search_debounce: Duration,
    /// Time a flash alert stays visible.
    pub alert_timeout: Duration,
    /// Explicit theme from flags, env or config. `None` uses the saved
    /// preference.
    pub theme: Option<Theme>,
    /// Search applied before the first frame.
    pub search: Option<String>,
}

impl CliArgs {
    /// Settings from resolved configuration plus an initial search.
    pub fn from_config(config: &ResolvedConfig, search: Option<String>) -> Self {
        Self {
            options: ControllerOptions {
                page_size: config.page_size,
                pagination_threshold: config.pagination_threshold,
                base_url: config.base_url.clone(),
            },
            search_debounce: config.search_debounce,
            alert_timeout: config.alert_timeout,
            theme: config.theme,
            search,
        }
    }
}

/// Preference store in the user's state directory, or memory if none.
fn open_preferences() -> Box<dyn PreferenceStore> {
    match FilePreferenceStore::open_default() {
        Some(store) => {
            debug!(path = %store.path().display(), "Using preference file");
            Box::new(store)
        }
        None => Box::new(MemoryPreferenceStore::default()),
    }
}

/// Load the table, then initialize and run the TUI
///
/// The table is parsed before the terminal switches to raw mode, so a bad
/// document is reported on a normal screen.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(mut input_source: InputSource, args: CliArgs) -> Result<(), TuiError> {
    let table = input_source.load_table()?;
    let preferences = open_preferences();
    let theme = args
        .theme
        .unwrap_or_else(|| load_theme(preferences.as_ref()));

    let now = Instant::now();
    let controller = TableController::new(table, args.options);
    let settings = AppSettings {
        search_debounce: args.search_debounce,
        alert_timeout: args.alert_timeout,
        theme,
    };
    let mut app_state = AppState::new(controller, settings, now);
    if let Some(query) = args.search.as_deref() {
        app_state.apply_initial_query(query, now);
    }
    info!(theme = theme.as_str(), source = %input_source.label(), "Starting TUI");

    let mut app = TuiApp::new(app_state, preferences, input_source.label())?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
