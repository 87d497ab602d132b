//! Tests for the search response staleness guard.

use crate::client::components::search_header::SearchSequence;

/// The only outstanding request may apply its response.
#[test]
fn single_request_applies() {
    let mut sequence = SearchSequence::default();
    let seq = sequence.begin();
    assert!(sequence.may_apply(seq));
}

/// A response from a superseded request is discarded even if it arrives
/// after the newer one was issued.
#[test]
fn stale_response_is_discarded() {
    let mut sequence = SearchSequence::default();
    let first = sequence.begin();
    let second = sequence.begin();
    assert!(!sequence.may_apply(first));
    assert!(sequence.may_apply(second));
}

/// Out-of-order arrival keeps only the latest request's response: the stale
/// one is rejected no matter when it lands.
#[test]
fn out_of_order_arrival_keeps_latest() {
    let mut sequence = SearchSequence::default();
    let old = sequence.begin();
    let new = sequence.begin();
    // Newer response lands first.
    assert!(sequence.may_apply(new));
    // The older one arriving later must not overwrite it.
    assert!(!sequence.may_apply(old));
}
