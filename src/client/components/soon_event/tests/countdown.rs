//! Tests for splitting a remaining duration into countdown fields.

use chrono::Duration;

use crate::client::components::soon_event::countdown_parts;

/// Splits a mixed duration into days, hours, minutes, and seconds.
#[test]
fn splits_mixed_duration() {
    let remaining = Duration::days(2) + Duration::hours(3) + Duration::minutes(4) + Duration::seconds(5);
    let parts = countdown_parts(remaining);
    assert_eq!(parts.days, 2);
    assert_eq!(parts.hours, 3);
    assert_eq!(parts.minutes, 4);
    assert_eq!(parts.seconds, 5);
}

/// Exactly zero remaining reads as over.
#[test]
fn zero_duration_is_over() {
    assert!(countdown_parts(Duration::zero()).is_over());
}

/// Elapsed targets clamp to zero instead of going negative.
#[test]
fn negative_duration_clamps_to_zero() {
    let parts = countdown_parts(Duration::seconds(-30));
    assert_eq!(parts, countdown_parts(Duration::zero()));
    assert!(parts.is_over());
}

/// One second remaining is not yet over.
#[test]
fn one_second_is_not_over() {
    assert!(!countdown_parts(Duration::seconds(1)).is_over());
}
