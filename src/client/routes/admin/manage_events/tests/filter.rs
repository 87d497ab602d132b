//! Tests for the management table's text filter.

use crate::client::routes::admin::manage_events::filter_events;
use crate::model::event::Event;

fn event(id: i64, title: &str, location: &str, category: &str) -> Event {
    Event {
        event_id: id,
        title: title.to_string(),
        description: String::new(),
        date_time: String::new(),
        location: location.to_string(),
        category: category.to_string(),
        price: "0".to_string(),
        event_photo: None,
    }
}

fn ids(events: &[Event]) -> Vec<i64> {
    events.iter().map(|e| e.event_id).collect()
}

/// An empty query keeps every event.
#[test]
fn empty_query_keeps_everything() {
    let events = vec![event(1, "A", "B", "C"), event(2, "D", "E", "F")];
    assert_eq!(ids(&filter_events(&events, "")), vec![1, 2]);
    assert_eq!(ids(&filter_events(&events, "   ")), vec![1, 2]);
}

/// Matching is case-insensitive on the title.
#[test]
fn matches_title_case_insensitively() {
    let events = vec![
        event(1, "Jazz Night", "Riyadh", "concerts"),
        event(2, "Food Truck Friday", "Jeddah", "restaurants"),
    ];
    assert_eq!(ids(&filter_events(&events, "jazz")), vec![1]);
    assert_eq!(ids(&filter_events(&events, "JAZZ")), vec![1]);
}

/// Location and category are searched too.
#[test]
fn matches_location_and_category() {
    let events = vec![
        event(1, "Jazz Night", "Riyadh", "concerts"),
        event(2, "Food Truck Friday", "Jeddah", "restaurants"),
    ];
    assert_eq!(ids(&filter_events(&events, "jeddah")), vec![2]);
    assert_eq!(ids(&filter_events(&events, "concert")), vec![1]);
}

/// A query matching nothing yields an empty table.
#[test]
fn no_match_yields_empty() {
    let events = vec![event(1, "Jazz Night", "Riyadh", "concerts")];
    assert!(filter_events(&events, "opera").is_empty());
}
