//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to browse-mode actions.
///
/// Provides default vim-style bindings. Search and dialog modes read raw
/// keys and never consult this map.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, modifiers: KeyModifiers, action: KeyAction| {
            bindings.insert(KeyEvent::new(code, modifiers), action);
        };

        // Column cursor and sorting
        bind(KeyCode::Char('h'), KeyModifiers::NONE, KeyAction::ColumnLeft);
        bind(KeyCode::Left, KeyModifiers::NONE, KeyAction::ColumnLeft);
        bind(KeyCode::Char('l'), KeyModifiers::NONE, KeyAction::ColumnRight);
        bind(KeyCode::Right, KeyModifiers::NONE, KeyAction::ColumnRight);
        bind(KeyCode::Char('s'), KeyModifiers::NONE, KeyAction::SortSelected);
        bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::SortSelected);
        for (digit, number) in ('1'..='9').zip(1usize..) {
            bind(
                KeyCode::Char(digit),
                KeyModifiers::NONE,
                KeyAction::SortColumn(number),
            );
        }

        // Row scrolling
        bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::ScrollUp);
        bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::ScrollUp);
        bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::ScrollDown);
        bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::ScrollDown);

        // Pagination
        bind(KeyCode::Char('n'), KeyModifiers::NONE, KeyAction::NextPage);
        bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::NextPage);
        bind(KeyCode::Char(']'), KeyModifiers::NONE, KeyAction::NextPage);
        bind(KeyCode::Char('p'), KeyModifiers::NONE, KeyAction::PrevPage);
        bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PrevPage);
        bind(KeyCode::Char('['), KeyModifiers::NONE, KeyAction::PrevPage);
        bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::FirstPage);
        bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::FirstPage);
        bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::LastPage);
        bind(KeyCode::End, KeyModifiers::NONE, KeyAction::LastPage);
        bind(KeyCode::Char('z'), KeyModifiers::NONE, KeyAction::ChangePageSize);
        bind(KeyCode::Char('o'), KeyModifiers::NONE, KeyAction::OpenPageLink);

        // Search
        bind(KeyCode::Char('/'), KeyModifiers::NONE, KeyAction::StartSearch);
        bind(KeyCode::Char('f'), KeyModifiers::CONTROL, KeyAction::StartSearch);
        bind(KeyCode::Char('c'), KeyModifiers::NONE, KeyAction::ClearSearch);
        bind(KeyCode::Char('x'), KeyModifiers::NONE, KeyAction::DismissBanner);

        // Application
        bind(KeyCode::Char('t'), KeyModifiers::NONE, KeyAction::ToggleTheme);
        bind(KeyCode::Char('d'), KeyModifiers::NONE, KeyAction::DismissAlert);
        bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);
        bind(KeyCode::Char('?'), KeyModifiers::SHIFT, KeyAction::Help);
        bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        Self { bindings }
    }
}
