//! Search box editing and debounced query submission.
//!
//! Editing functions are pure state transitions on [`SearchBox`]. Every edit
//! re-arms the [`QueryDebouncer`]; the filter pass only runs once typing has
//! paused for the debounce delay.

use crate::state::scheduler::{Scheduler, TaskHandle};
use std::time::{Duration, Instant};

/// Idle time before a typed query is applied.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

// ===== SearchBox =====

/// Text and cursor of the search input. The cursor counts characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBox {
    text: String,
    cursor: usize,
}

impl SearchBox {
    /// Box holding `text` with the cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(offset, _)| offset)
    }
}

/// Insert a character at the cursor and advance it.
pub fn handle_char_input(mut input: SearchBox, ch: char) -> SearchBox {
    let offset = input.byte_offset(input.cursor);
    input.text.insert(offset, ch);
    input.cursor += 1;
    input
}

/// Delete the character before the cursor. No-op at position 0.
pub fn handle_backspace(mut input: SearchBox) -> SearchBox {
    if input.cursor == 0 {
        return input;
    }
    let offset = input.byte_offset(input.cursor - 1);
    input.text.remove(offset);
    input.cursor -= 1;
    input
}

/// Move cursor left by one position, saturating at 0.
pub fn handle_cursor_left(mut input: SearchBox) -> SearchBox {
    input.cursor = input.cursor.saturating_sub(1);
    input
}

/// Move cursor right by one position, saturating at the text length.
pub fn handle_cursor_right(mut input: SearchBox) -> SearchBox {
    input.cursor = (input.cursor + 1).min(input.text.chars().count());
    input
}

/// Empty the box.
pub fn handle_clear(_input: SearchBox) -> SearchBox {
    SearchBox::default()
}

// ===== QueryDebouncer =====

/// Cancel-and-restart timer for query submission.
///
/// Only the latest text is kept; each keystroke pushes the one pending
/// deadline back rather than queueing another submission.
#[derive(Debug, Clone)]
pub struct QueryDebouncer {
    delay: Duration,
    scheduler: Scheduler<()>,
    pending: Option<TaskHandle>,
    text: String,
}

impl Default for QueryDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl QueryDebouncer {
    /// Debouncer that submits after `delay` of idle input.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            scheduler: Scheduler::new(),
            pending: None,
            text: String::new(),
        }
    }

    /// Idle time before a submission.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record an edit. The delay restarts from `now` with the latest text.
    pub fn keystroke(&mut self, now: Instant, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        let rearmed = match self.pending {
            Some(handle) => self.scheduler.reschedule(handle, now, self.delay),
            None => false,
        };
        if !rearmed {
            self.pending = Some(self.scheduler.schedule(now, self.delay, ()));
        }
    }

    /// Drop any pending submission.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }

    /// Whether a submission is waiting for the delay to pass.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending submission fires, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// The query to apply, once input has been idle for the delay.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        self.scheduler.drain_due(now).pop()?;
        self.pending = None;
        Some(std::mem::take(&mut self.text))
    }
}

#[cfg(test)]
#[path = "search_input_tests.rs"]
mod tests;
