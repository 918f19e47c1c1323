//! Flash alerts with timed auto-dismissal.
//!
//! An alert is visible for the timeout, fades for a short period and is then
//! removed. Closing it by hand skips both steps.

use crate::state::scheduler::{Scheduler, TaskHandle};
use std::time::{Duration, Instant};

/// Time an alert stays fully visible.
pub const DEFAULT_ALERT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Time between starting the fade and removal.
pub const ALERT_FADE: Duration = Duration::from_millis(300);

/// Identity of one pushed alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlertId(u64);

/// Severity, which picks the alert style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// Neutral information.
    Info,
    /// A completed action.
    Success,
    /// Something the user may want to check.
    Warning,
    /// A failed action.
    Error,
}

/// Where an alert is in its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertPhase {
    /// Shown at full strength.
    Visible,
    /// About to be removed.
    Fading,
}

/// One flash alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    id: AlertId,
    kind: AlertKind,
    message: String,
    phase: AlertPhase,
    fade_at: Instant,
    pending: TaskHandle,
}

impl Alert {
    /// Identity used to dismiss this alert.
    pub fn id(&self) -> AlertId {
        self.id
    }

    /// Severity of the alert.
    pub fn kind(&self) -> AlertKind {
        self.kind
    }

    /// Text shown in the status line.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Current lifetime phase.
    pub fn phase(&self) -> AlertPhase {
        self.phase
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AlertTask {
    Fade(AlertId),
    Remove(AlertId),
}

/// Alerts currently on screen, oldest first.
#[derive(Debug, Clone)]
pub struct AlertQueue {
    next_id: u64,
    timeout: Duration,
    alerts: Vec<Alert>,
    scheduler: Scheduler<AlertTask>,
}

impl Default for AlertQueue {
    fn default() -> Self {
        Self::new(DEFAULT_ALERT_TIMEOUT)
    }
}

impl AlertQueue {
    /// Queue whose alerts stay visible for `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self {
            next_id: 0,
            timeout,
            alerts: Vec::new(),
            scheduler: Scheduler::new(),
        }
    }

    /// Show a new alert and start its timeout.
    pub fn push(&mut self, now: Instant, kind: AlertKind, message: impl Into<String>) -> AlertId {
        let id = AlertId(self.next_id);
        self.next_id += 1;
        let pending = self.scheduler.schedule(now, self.timeout, AlertTask::Fade(id));
        self.alerts.push(Alert {
            id,
            kind,
            message: message.into(),
            phase: AlertPhase::Visible,
            fade_at: now + self.timeout,
            pending,
        });
        id
    }

    /// Close an alert immediately. Returns false if it is already gone.
    pub fn dismiss(&mut self, id: AlertId) -> bool {
        match self.alerts.iter().position(|a| a.id == id) {
            Some(index) => {
                let alert = self.alerts.remove(index);
                self.scheduler.cancel(alert.pending);
                true
            }
            None => false,
        }
    }

    /// Close the newest alert, if any.
    pub fn dismiss_latest(&mut self) -> bool {
        match self.alerts.last().map(Alert::id) {
            Some(id) => self.dismiss(id),
            None => false,
        }
    }

    /// Alerts on screen, oldest first.
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Whether no alert is on screen.
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Earliest pending fade or removal.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Advance fades and removals due at `now`. Returns true if anything
    /// changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        loop {
            let due = self.scheduler.drain_due(now);
            if due.is_empty() {
                return changed;
            }
            changed = true;
            for (_, task) in due {
                match task {
                    AlertTask::Fade(id) => self.start_fade(id),
                    AlertTask::Remove(id) => self.alerts.retain(|a| a.id != id),
                }
            }
        }
    }

    fn start_fade(&mut self, id: AlertId) {
        let Some(alert) = self.alerts.iter_mut().find(|a| a.id == id) else {
            return;
        };
        alert.phase = AlertPhase::Fading;
        // Timed from the fade deadline so a late tick does not stretch it
        alert.pending = self
            .scheduler
            .schedule(alert.fade_at, ALERT_FADE, AlertTask::Remove(id));
    }
}
