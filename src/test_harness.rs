//! Drives a `TuiApp<TestBackend>` from a JSON fixture, one key at a time.
//!
//! The driver owns a virtual clock. Timers (search debounce, alert fades,
//! counter ticks) only fire when a test calls [`AcceptanceTestHarness::advance`].

use crate::source::{FileSource, InputSource};
use crate::state::{
    AppSettings, AppState, ControllerOptions, MemoryPreferenceStore, PreferenceStore,
    TableController,
};
use crate::view::{TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::{Duration, Instant};

/// Screen text with trailing blanks trimmed and blank rows dropped.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .map(|row| row.trim_end().to_string())
        .filter(|row| !row.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Keyboard-level driver used by the acceptance suites.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    now: Instant,
    running: bool,
}

impl AcceptanceTestHarness {
    /// 100x30 screen, default options.
    pub fn from_fixture(path: &str) -> Result<Self, TuiError> {
        Self::from_fixture_with(path, ControllerOptions::default(), 100, 30)
    }

    /// Harness over a fixture with explicit options and screen size.
    pub fn from_fixture_with(
        path: &str,
        options: ControllerOptions,
        width: u16,
        height: u16,
    ) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;

        let mut source = InputSource::File(FileSource::new(path)?);
        let table = source.load_table()?;

        let now = Instant::now();
        let controller = TableController::new(table, options);
        let app_state = AppState::new(controller, AppSettings::default(), now);
        let preferences: Box<dyn PreferenceStore> = Box::new(MemoryPreferenceStore::default());

        Ok(Self {
            app: TuiApp::new_for_test(terminal, app_state, preferences),
            now,
            running: true,
        })
    }

    /// Press one key. Returns true once the app has quit.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Press one key with modifiers. Returns true once the app has quit.
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if self.running && self.app.handle_key_test(KeyEvent::new(key, mods), self.now) {
            self.running = false;
        }
        !self.running
    }

    /// Press each key in turn, stopping if the app quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        let _ = keys.iter().any(|key| self.send_key(*key));
    }

    /// One `Char` press per character, at the current virtual instant.
    pub fn type_text(&mut self, text: &str) {
        let _ = text.chars().any(|ch| self.send_key(KeyCode::Char(ch)));
    }

    /// Move the virtual clock forward and fire every timer that came due.
    ///
    /// Steps in small increments so periodic timers run once per period.
    pub fn advance(&mut self, by: Duration) {
        const STEP: Duration = Duration::from_millis(10);
        let end = self.now + by;
        while self.now < end {
            self.now = (self.now + STEP).min(end);
            self.app.tick_test(self.now);
        }
    }

    /// Application state after the keys sent so far.
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Preference store the app writes to.
    pub fn preferences(&self) -> &dyn PreferenceStore {
        self.app.preferences()
    }

    /// False once a key has quit the app.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Draw a frame and return it as text.
    pub fn render_to_string(&mut self) -> String {
        self.app.render_test().expect("TestBackend draw failed");
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
