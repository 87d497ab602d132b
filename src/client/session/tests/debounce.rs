//! Tests for the activity debounce generation counter.

use crate::client::session::ActivityDebounce;

/// Each bump yields a new generation.
#[test]
fn bump_advances_generation() {
    let mut debounce = ActivityDebounce::default();
    let first = debounce.bump();
    let second = debounce.bump();
    assert!(second > first);
}

/// The most recent generation is current, so its pending renewal may fire.
#[test]
fn latest_generation_is_current() {
    let mut debounce = ActivityDebounce::default();
    let generation = debounce.bump();
    assert!(debounce.is_current(generation));
}

/// A later activity event invalidates an older pending renewal: only the
/// timer armed by the last event fires.
#[test]
fn bump_invalidates_older_generations() {
    let mut debounce = ActivityDebounce::default();
    let stale = debounce.bump();
    let fresh = debounce.bump();
    assert!(!debounce.is_current(stale));
    assert!(debounce.is_current(fresh));
}
