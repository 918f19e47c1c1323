//! Cancellable scheduled tasks over an explicit clock.
//!
//! The scheduler never reads the system clock. Callers pass `now` in, which
//! keeps debounce, alert and animation timing deterministic under test. The
//! event loop asks for [`Scheduler::next_deadline`] to size its poll timeout
//! and calls [`Scheduler::drain_due`] after every wake-up.

use std::time::{Duration, Instant};

/// Handle to a scheduled task, used to cancel or re-arm it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug, Clone)]
struct Scheduled<T> {
    handle: TaskHandle,
    deadline: Instant,
    interval: Option<Duration>,
    task: T,
}

/// A set of pending timed tasks.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    next_id: u64,
    pending: Vec<Scheduled<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<T: Clone> Scheduler<T> {
    /// Scheduler with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` once, `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, task: T) -> TaskHandle {
        self.push(now + delay, None, task)
    }

    /// Run `task` every `interval`, first `interval` after `now`, until cancelled.
    ///
    /// A zero interval is treated as one millisecond so a repeating task can
    /// never fire unboundedly within a single drain.
    pub fn schedule_repeating(&mut self, now: Instant, interval: Duration, task: T) -> TaskHandle {
        let interval = interval.max(Duration::from_millis(1));
        self.push(now + interval, Some(interval), task)
    }

    fn push(&mut self, deadline: Instant, interval: Option<Duration>, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled {
            handle,
            deadline,
            interval,
            task,
        });
        handle
    }

    /// Cancel a pending task. Returns false if it already ran or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.handle != handle);
        self.pending.len() != before
    }

    /// Move a pending task's deadline to `delay` after `now`.
    ///
    /// Returns false if the task is no longer pending.
    pub fn reschedule(&mut self, handle: TaskHandle, now: Instant, delay: Duration) -> bool {
        match self.pending.iter_mut().find(|s| s.handle == handle) {
            Some(scheduled) => {
                scheduled.deadline = now + delay;
                true
            }
            None => false,
        }
    }

    /// Whether `handle` is still waiting to run.
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.pending.iter().any(|s| s.handle == handle)
    }

    /// Whether no task is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|s| s.deadline).min()
    }

    /// Remove and return every task due at `now`, earliest first.
    ///
    /// One-shot tasks are dropped; repeating tasks are re-armed one interval
    /// after their deadline and may be returned several times if the caller
    /// fell behind.
    pub fn drain_due(&mut self, now: Instant) -> Vec<(TaskHandle, T)> {
        let mut fired: Vec<(Instant, TaskHandle, T)> = Vec::new();

        let mut index = 0;
        while index < self.pending.len() {
            if self.pending[index].deadline > now {
                index += 1;
                continue;
            }
            match self.pending[index].interval {
                Some(interval) => {
                    let scheduled = &mut self.pending[index];
                    while scheduled.deadline <= now {
                        fired.push((scheduled.deadline, scheduled.handle, scheduled.task.clone()));
                        scheduled.deadline += interval;
                    }
                    index += 1;
                }
                None => {
                    let scheduled = self.pending.swap_remove(index);
                    fired.push((scheduled.deadline, scheduled.handle, scheduled.task));
                }
            }
        }

        fired.sort_by_key(|(deadline, handle, _)| (*deadline, handle.0));
        fired
            .into_iter()
            .map(|(_, handle, task)| (handle, task))
            .collect()
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
