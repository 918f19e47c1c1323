//! Tests for Scheduler.

use super::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn task_is_not_due_before_deadline() {
    let t0 = Instant::now();
    let mut scheduler = Scheduler::new();
    scheduler.schedule(t0, ms(300), "filter");

    assert!(scheduler.drain_due(t0 + ms(299)).is_empty());
    assert!(!scheduler.is_empty());
}

#[test]
fn one_shot_task_fires_once_at_deadline() {
    let t0 = Instant::now();
    let mut scheduler = Scheduler::new();
    let handle = scheduler.schedule(t0, ms(300), "filter");

    let fired = scheduler.drain_due(t0 + ms(300));

    assert_eq!(fired, vec![(handle, "filter")]);
    assert!(scheduler.drain_due(t0 + ms(10_000)).is_empty());
    assert!(!scheduler.is_pending(handle));
}

#[test]
fn cancelled_task_never_fires() {
    let t0 = Instant::now();
    let mut scheduler = Scheduler::new();
    let handle = scheduler.schedule(t0, ms(300), "filter");

    assert!(scheduler.cancel(handle));
    assert!(!scheduler.cancel(handle), "second cancel is a no-op");
    assert!(scheduler.drain_due(t0 + ms(1_000)).is_empty());
}

#[test]
fn reschedule_moves_deadline() {
    let t0 = Instant::now();
    let mut scheduler = Scheduler::new();
    let handle = scheduler.schedule(t0, ms(300), "filter");

    assert!(scheduler.reschedule(handle, t0 + ms(200), ms(300)));

    assert!(scheduler.drain_due(t0 + ms(300)).is_empty());
    assert_eq!(scheduler.drain_due(t0 + ms(500)), vec![(handle, "filter")]);
}

#[test]
fn reschedule_after_fire_reports_false() {
    let t0 = Instant::now();
    let mut scheduler = Scheduler::new();
    let handle = scheduler.schedule(t0, ms(10), "x");
    scheduler.drain_due(t0 + ms(10));

    assert!(!scheduler.reschedule(handle, t0, ms(10)));
}

#[test]
fn due_tasks_are_returned_in_deadline_order() {
    let t0 = Instant::now();
    let mut scheduler = Scheduler::new();
    scheduler.schedule(t0, ms(300), "late");
    scheduler.schedule(t0, ms(100), "early");
    scheduler.schedule(t0, ms(200), "middle");

    let tasks: Vec<&str> = scheduler
        .drain_due(t0 + ms(300))
        .into_iter()
        .map(|(_, task)| task)
        .collect();

    assert_eq!(tasks, vec!["early", "middle", "late"]);
}

#[test]
fn repeating_task_fires_each_interval_until_cancelled() {
    let t0 = Instant::now();
    let mut scheduler = Scheduler::new();
    let handle = scheduler.schedule_repeating(t0, ms(50), "tick");

    assert!(scheduler.drain_due(t0 + ms(49)).is_empty());
    assert_eq!(scheduler.drain_due(t0 + ms(50)).len(), 1);
    assert_eq!(scheduler.drain_due(t0 + ms(100)).len(), 1);

    scheduler.cancel(handle);
    assert!(scheduler.drain_due(t0 + ms(1_000)).is_empty());
}

#[test]
fn repeating_task_catches_up_when_caller_falls_behind() {
    let t0 = Instant::now();
    let mut scheduler = Scheduler::new();
    scheduler.schedule_repeating(t0, ms(50), "tick");

    // 50, 100, 150, 200
    assert_eq!(scheduler.drain_due(t0 + ms(220)).len(), 4);
    assert_eq!(scheduler.next_deadline(), Some(t0 + ms(250)));
}

#[test]
fn next_deadline_is_earliest_pending() {
    let t0 = Instant::now();
    let mut scheduler = Scheduler::new();
    assert_eq!(scheduler.next_deadline(), None);

    scheduler.schedule(t0, ms(5_000), "alert");
    scheduler.schedule(t0, ms(300), "filter");

    assert_eq!(scheduler.next_deadline(), Some(t0 + ms(300)));
}

#[test]
fn handles_are_unique() {
    let t0 = Instant::now();
    let mut scheduler = Scheduler::new();
    let a = scheduler.schedule(t0, ms(1), ());
    let b = scheduler.schedule(t0, ms(1), ());
    assert_ne!(a, b);
}
