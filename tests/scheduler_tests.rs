// Host-side tests for the frame clock state machine.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod scheduler {
    include!("../src/core/scheduler.rs");
}

use constants::*;
use scheduler::*;
use std::time::Duration;

#[test]
fn idle_clock_produces_no_frames() {
    let clock = FrameClock::new();
    assert_eq!(clock.state(), LoopState::Idle);
    assert_eq!(clock.frame_dt(Duration::from_millis(16)), None);
}

#[test]
fn start_moves_idle_to_running_once() {
    let mut clock = FrameClock::new();
    assert!(clock.start());
    assert!(clock.is_running());
    assert!(!clock.start());
    assert_eq!(clock.state(), LoopState::Running);
}

#[test]
fn one_sixtieth_of_a_second_is_one_tick() {
    let mut clock = FrameClock::new();
    clock.start();
    let dt = clock.frame_dt(Duration::from_micros(16_667)).unwrap();
    assert!((dt - 1.0).abs() < 1e-3, "dt {}", dt);
    let dt = clock.frame_dt(Duration::from_micros(33_333)).unwrap();
    assert!((dt - 2.0).abs() < 1e-3, "dt {}", dt);
}

#[test]
fn long_gaps_are_clamped() {
    let mut clock = FrameClock::new();
    clock.start();
    let capped = MAX_FRAME_MS / TARGET_FRAME_MS;
    let dt = clock.frame_dt(Duration::from_secs(30)).unwrap();
    assert!((dt - capped).abs() < 1e-4);
    assert_eq!(normalize_elapsed(Duration::ZERO), 0.0);
}

#[test]
fn stopped_is_terminal() {
    let mut clock = FrameClock::new();
    clock.start();
    clock.stop();
    assert_eq!(clock.state(), LoopState::Stopped);
    assert_eq!(clock.frame_dt(Duration::from_millis(16)), None);
    assert!(!clock.start());
    assert_eq!(clock.state(), LoopState::Stopped);
}

#[test]
fn stop_before_start_also_terminal() {
    let mut clock = FrameClock::new();
    clock.stop();
    assert!(!clock.start());
    assert!(!clock.is_running());
}

#[test]
fn teardown_runs_queued_cleanups_once_newest_first() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let log = Rc::new(RefCell::new(Vec::new()));
    let mut teardown = Teardown::new();
    for name in ["pointer", "resize"] {
        let log = log.clone();
        teardown.defer(move || log.borrow_mut().push(name));
    }
    assert!(log.borrow().is_empty());

    assert_eq!(teardown.run(), 2);
    assert_eq!(*log.borrow(), vec!["resize", "pointer"]);

    assert_eq!(teardown.run(), 0);
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn cleanup_queued_after_teardown_runs_immediately() {
    use std::cell::Cell;
    use std::rc::Rc;

    let detached = Rc::new(Cell::new(false));
    let mut teardown = Teardown::new();
    teardown.run();
    let flag = detached.clone();
    teardown.defer(move || flag.set(true));
    assert!(detached.get());
}
