//! Tests for choosing the nearest upcoming event.

use chrono::{NaiveDate, NaiveDateTime};

use crate::client::components::soon_event::nearest_upcoming;
use crate::model::event::Event;

fn event(id: i64, date_time: &str) -> Event {
    Event {
        event_id: id,
        title: format!("Event {id}"),
        description: String::new(),
        date_time: date_time.to_string(),
        location: String::new(),
        category: String::new(),
        price: "0".to_string(),
        event_photo: None,
    }
}

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// Picks the future event with the earliest start.
#[test]
fn picks_earliest_future_event() {
    let events = vec![
        event(1, "2026-06-10 20:00:00"),
        event(2, "2026-06-03 18:00:00"),
        event(3, "2026-07-01 10:00:00"),
    ];
    assert_eq!(nearest_upcoming(&events, now()).map(|e| e.event_id), Some(2));
}

/// Past events are never chosen.
#[test]
fn skips_past_events() {
    let events = vec![event(1, "2026-05-01 20:00:00"), event(2, "2026-06-02 09:00:00")];
    assert_eq!(nearest_upcoming(&events, now()).map(|e| e.event_id), Some(2));
}

/// No upcoming events yields nothing to feature.
#[test]
fn all_past_yields_none() {
    let events = vec![event(1, "2026-01-01 20:00:00")];
    assert!(nearest_upcoming(&events, now()).is_none());
}

/// Events with unparseable dates are skipped rather than chosen.
#[test]
fn skips_unparseable_dates() {
    let events = vec![event(1, "soon"), event(2, "2026-06-05 18:00:00")];
    assert_eq!(nearest_upcoming(&events, now()).map(|e| e.event_id), Some(2));
}
