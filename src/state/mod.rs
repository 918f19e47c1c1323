//! Table view state machines (pure).
//!
//! All state transitions are pure functions testable without a terminal.
//! Timers take the current instant as an argument.

pub mod alerts;
pub mod app_state;
pub mod controller;
pub mod counter;
pub mod form;
pub mod navigation;
pub mod pagination;
pub mod row_scroll;
pub mod scheduler;
pub mod search;
pub mod search_input;
pub mod sort;
pub mod theme;

// Re-export for convenience
pub use alerts::{Alert, AlertId, AlertKind, AlertPhase, AlertQueue};
pub use app_state::{AppSettings, AppState, Effect, InputMode, Notice};
pub use controller::{ControllerOptions, PaginationView, TableController};
pub use counter::{CounterKind, StatCounters};
pub use form::{Form, FormField, ValidationError};
pub use pagination::{PageButton, PageControls, PaginationState};
pub use scheduler::{Scheduler, TaskHandle};
pub use search::{NoResultsBanner, SearchQuery, SearchState};
pub use search_input::{QueryDebouncer, SearchBox};
pub use sort::{SortDirection, SortState};
pub use theme::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceError, PreferenceStore, Theme,
};
