//! Tests for the capped preference toggles.

use crate::client::components::preferences_drawer::toggle_limited;

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Selecting a new value adds it.
#[test]
fn adds_when_under_cap() {
    let selected = toggle_limited(owned(&["Sports"]), "Concerts", 2);
    assert_eq!(selected, owned(&["Sports", "Concerts"]));
}

/// Selecting an already chosen value removes it.
#[test]
fn removes_existing_value() {
    let selected = toggle_limited(owned(&["Sports", "Concerts"]), "Sports", 2);
    assert_eq!(selected, owned(&["Concerts"]));
}

/// Once the cap is reached, further additions are ignored.
#[test]
fn ignores_additions_at_cap() {
    let selected = toggle_limited(owned(&["Sports", "Concerts"]), "Theater", 2);
    assert_eq!(selected, owned(&["Sports", "Concerts"]));
}

/// Removal still works at the cap, making room for a different choice.
#[test]
fn removal_frees_a_slot_at_cap() {
    let selected = toggle_limited(owned(&["Sports", "Concerts"]), "Concerts", 2);
    let selected = toggle_limited(selected, "Theater", 2);
    assert_eq!(selected, owned(&["Sports", "Theater"]));
}
