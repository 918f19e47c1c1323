//! Animated stat counters for the summary line.
//!
//! Each counter walks one unit per tick toward its target and stops its
//! ticker once it gets there.

use crate::state::scheduler::{Scheduler, TaskHandle};
use std::time::{Duration, Instant};

/// Time between counter steps.
pub const COUNTER_TICK: Duration = Duration::from_millis(50);

/// Figures shown in the title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterKind {
    /// Rows in the table.
    Rows,
    /// Rows currently shown.
    Visible,
    /// Page count.
    Pages,
}

impl CounterKind {
    /// Every counter in display order.
    pub const ALL: [CounterKind; 3] = [CounterKind::Rows, CounterKind::Visible, CounterKind::Pages];

    /// Title bar label.
    pub fn label(self) -> &'static str {
        match self {
            CounterKind::Rows => "Rows",
            CounterKind::Visible => "Visible",
            CounterKind::Pages => "Pages",
        }
    }

    fn index(self) -> usize {
        match self {
            CounterKind::Rows => 0,
            CounterKind::Visible => 1,
            CounterKind::Pages => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Counter {
    current: usize,
    target: usize,
    ticker: Option<TaskHandle>,
}

/// Row, visible and page counters that animate toward their targets.
#[derive(Debug, Clone)]
pub struct StatCounters {
    counters: [Counter; 3],
    scheduler: Scheduler<CounterKind>,
}

impl Default for StatCounters {
    fn default() -> Self {
        Self {
            counters: [Counter::default(); 3],
            scheduler: Scheduler::new(),
        }
    }
}

impl StatCounters {
    /// Value currently displayed.
    pub fn value(&self, kind: CounterKind) -> usize {
        self.counters[kind.index()].current
    }

    /// Value the counter is heading for.
    pub fn target(&self, kind: CounterKind) -> usize {
        self.counters[kind.index()].target
    }

    /// Whether any counter is still stepping.
    pub fn is_animating(&self) -> bool {
        !self.scheduler.is_empty()
    }

    /// When the next step is due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Point `kind` at a new target, continuing from its current value.
    pub fn set_target(&mut self, now: Instant, kind: CounterKind, target: usize) {
        let counter = &mut self.counters[kind.index()];
        counter.target = target;
        match counter.ticker {
            Some(handle) if counter.current == target => {
                self.scheduler.cancel(handle);
                counter.ticker = None;
            }
            None if counter.current != target => {
                counter.ticker = Some(self.scheduler.schedule_repeating(now, COUNTER_TICK, kind));
            }
            _ => {}
        }
    }

    /// Advance every ticker due at `now`. Returns true if a value changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for (handle, kind) in self.scheduler.drain_due(now) {
            let counter = &mut self.counters[kind.index()];
            if counter.current == counter.target {
                continue;
            }
            if counter.current < counter.target {
                counter.current += 1;
            } else {
                counter.current -= 1;
            }
            changed = true;
            if counter.current == counter.target {
                self.scheduler.cancel(handle);
                counter.ticker = None;
            }
        }
        changed
    }
}
