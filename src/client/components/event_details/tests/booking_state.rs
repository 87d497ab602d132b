//! Tests for the booking action state.

use crate::client::components::event_details::BookingState;

/// An event outside the booked set can be booked.
#[test]
fn unbooked_event_is_bookable() {
    let state = BookingState::from_booked_set(&[2, 3], 1);
    assert!(state.can_book());
}

/// An event already in the booked set starts disabled.
#[test]
fn booked_event_starts_disabled() {
    let state = BookingState::from_booked_set(&[1, 2], 1);
    assert!(!state.can_book());
}

/// After a successful booking the action stays disabled for the session.
#[test]
fn successful_booking_disables_permanently() {
    let mut state = BookingState::from_booked_set(&[], 7);
    assert!(state.can_book());
    state.mark_booked();
    assert!(!state.can_book());
    state.mark_booked();
    assert!(!state.can_book());
}
