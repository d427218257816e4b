//! Integration tests for Periodic

mod common;
use common::*;

use every::{Anchor, Periodic, TimeSource};

type Timer<'t> = Periodic<'t, TestInstant, MockTimeSource>;

#[test]
fn fires_on_first_poll() {
    let clock = MockTimeSource::new();
    let mut timer = Timer::new(TestDuration(50), &clock);

    assert!(timer.poll());
    assert!(!timer.poll());
}

#[test]
fn repeats_every_interval() {
    let clock = MockTimeSource::new();
    let mut timer = Timer::new(TestDuration(50), &clock);

    let fired = fire_times(&clock, 100, || timer.poll());
    assert_eq!(fired, vec![0, 50, 100]);
}

#[test]
fn assigning_anchor_resynchronises() {
    let clock = MockTimeSource::starting_at(1_000);
    let mut timer = Timer::new(TestDuration(50), &clock);

    // Make it go off half an interval from now
    timer.anchor = Anchor::backdated(clock.now(), TestDuration(25));

    let fired = fire_times(&clock, 1_100, || timer.poll());
    assert_eq!(fired, vec![1_025, 1_075]);
}

#[test]
fn rearm_skips_immediate_firing() {
    let clock = MockTimeSource::new();
    let mut unchanged = Timer::new(TestDuration(50), &clock);
    let mut changed = Timer::new(TestDuration(50), &clock);
    changed.interval = TestDuration(100);
    changed.rearm();

    let mut unchanged_hits = Vec::new();
    let mut changed_hits = Vec::new();
    while clock.now_millis() <= 125 {
        if unchanged.poll() {
            unchanged_hits.push(clock.now_millis());
        }
        if changed.poll() {
            changed_hits.push(clock.now_millis());
        }
        clock.advance(TestDuration(1));
    }

    assert_eq!(unchanged_hits, vec![0, 50, 100]);
    assert_eq!(changed_hits, vec![100]);
}

#[test]
fn late_poll_keeps_ideal_schedule() {
    let clock = MockTimeSource::starting_at(500);
    let mut timer = Timer::new(TestDuration(100), &clock);
    assert!(timer.poll());

    clock.advance(TestDuration(140));
    assert!(timer.poll());
    assert_eq!(timer.last_fired(), Some(TestInstant(600)));
    assert_eq!(timer.time_until_next(), Some(TestDuration(60)));

    clock.advance(TestDuration(59));
    assert!(!timer.poll());
    clock.advance(TestDuration(1));
    assert!(timer.poll());
}

#[test]
fn zero_interval_never_fires() {
    let clock = MockTimeSource::new();
    let mut timer = Timer::new(TestDuration(0), &clock);

    assert!(fire_times(&clock, 100, || timer.poll()).is_empty());
    assert_eq!(timer.time_until_next(), None);
}
