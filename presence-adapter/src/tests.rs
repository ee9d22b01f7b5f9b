use crate::*;

use presence::{ExitCompletion, Node, ReconcilerOptions};

fn msg(key: u64, content: &'static str) -> Node<&'static str, u64> {
    Node::item(key, content)
}

#[test]
fn controller_drives_exit_lifecycle_with_timers() {
    let mut c: Controller<&'static str, u64> = Controller::new(ReconcilerOptions::new(), 500);
    c.render(vec![msg(1, "a")], 0);

    let out = c.render(Vec::new(), 10);
    assert!(!out[0].flags.shown);
    assert_eq!(c.pending_exits(), 1);

    // Hide animation still playing at 509 (began at 10, lasts 500).
    assert!(!c.tick(509));
    assert_eq!(c.reconciler().exiting_len(), 1);

    assert!(c.tick(510));
    assert_eq!(c.pending_exits(), 0);
    assert_eq!(c.reconciler().exiting_len(), 0);

    let out = c.render(Vec::new(), 511);
    assert!(out.is_empty());
}

#[test]
fn rerender_does_not_restart_hide_animation() {
    let mut c: Controller<&'static str, u64> = Controller::new(ReconcilerOptions::new(), 500);
    c.render(vec![msg(1, "a")], 0);
    c.render(Vec::new(), 100);

    // An unrelated re-render while the exit is in flight keeps the original timer.
    c.render(Vec::new(), 300);
    assert_eq!(c.schedule().timer(&1), Some(ExitTimer::new(100, 500)));

    assert!(!c.tick(599));
    assert!(c.tick(600));
}

#[test]
fn reentry_cancels_scheduled_exit() {
    let mut c: Controller<&'static str, u64> = Controller::new(ReconcilerOptions::new(), 500);
    c.render(vec![msg(1, "a")], 0);
    c.render(Vec::new(), 10);
    assert_eq!(c.pending_exits(), 1);

    let out = c.render(vec![msg(1, "a")], 20);
    assert!(out[0].flags.shown);
    assert_eq!(c.pending_exits(), 0);

    // Nothing fires later; the item stays present.
    assert!(!c.tick(10_000));
    assert_eq!(c.reconciler().exiting_len(), 0);
    assert_eq!(c.reconciler().present_keys(), &[1][..]);
}

#[test]
fn exclusive_swap_workflow() {
    let mut c: Controller<&'static str, u64> =
        Controller::new(ReconcilerOptions::new().with_exit_before_enter(true), 200);
    c.render(vec![msg(1, "one")], 0);

    let out = c.render(vec![msg(2, "two")], 0);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].key, 1);
    assert!(!out[0].flags.shown);

    assert!(c.tick(200));
    let out = c.render(vec![msg(2, "two")], 201);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].key, 2);
    assert!(out[0].flags.shown);
}

#[test]
fn manual_completion_bypasses_timers() {
    let mut c: Controller<&'static str, u64> = Controller::new(ReconcilerOptions::new(), 500);
    c.render(vec![msg(1, "a")], 0);
    c.render(Vec::new(), 0);

    assert_eq!(c.complete_exit(&1), ExitCompletion::Drained);
    assert_eq!(c.pending_exits(), 0);
    assert!(c.needs_render());
    assert!(!c.needs_render());
}

#[test]
fn schedule_tracks_timers_by_key() {
    let mut s: ExitSchedule<u64> = ExitSchedule::new();
    assert!(s.begin(1, 0, 100));
    assert!(!s.begin(1, 50, 100));
    assert!(s.begin(2, 10, 100));
    assert_eq!(s.len(), 2);
    assert!(s.is_scheduled(&1));
    assert_eq!(s.timer(&1), Some(ExitTimer::new(0, 100)));

    let mut done = Vec::new();
    s.drain_elapsed(105, |key| done.push(key));
    assert_eq!(done, vec![1]);
    assert_eq!(s.len(), 1);

    assert!(s.cancel(&2));
    assert!(!s.cancel(&2));
    assert!(s.is_empty());
}

#[test]
fn exit_timer_progress_and_completion() {
    let t = ExitTimer::new(100, 200);
    assert_eq!(t.progress(0), 0.0);
    assert_eq!(t.progress(100), 0.0);
    assert_eq!(t.progress(200), 0.5);
    assert_eq!(t.progress(400), 1.0);
    assert!(!t.is_done(299));
    assert!(t.is_done(300));

    // Zero durations are clamped to one tick.
    let t = ExitTimer::new(0, 0);
    assert!(!t.is_done(0));
    assert!(t.is_done(1));
}
