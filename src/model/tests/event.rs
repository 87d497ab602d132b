//! Tests for event date and price parsing.

use chrono::{NaiveDate, NaiveDateTime};

use crate::model::event::{parse_event_date, Event};

fn event_with(price: &str, date_time: &str) -> Event {
    Event {
        event_id: 1,
        title: "Jazz Night".to_string(),
        description: String::new(),
        date_time: date_time.to_string(),
        location: "Riyadh".to_string(),
        category: "concerts".to_string(),
        price: price.to_string(),
        event_photo: None,
    }
}

fn date(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

/// Parses the backend's space-separated timestamp format.
#[test]
fn parses_space_separated_timestamp() {
    assert_eq!(
        parse_event_date("2026-03-01 18:30:00"),
        Some(date(2026, 3, 1, 18, 30))
    );
}

/// Parses the ISO 8601 variant with a T separator.
#[test]
fn parses_iso_timestamp() {
    assert_eq!(
        parse_event_date("2026-03-01T18:30:00"),
        Some(date(2026, 3, 1, 18, 30))
    );
}

/// Parses the datetime-local form value without seconds.
#[test]
fn parses_datetime_local_value() {
    assert_eq!(
        parse_event_date("2026-03-01T18:30"),
        Some(date(2026, 3, 1, 18, 30))
    );
}

/// Rejects values no known format matches.
#[test]
fn rejects_unknown_format() {
    assert_eq!(parse_event_date("next friday"), None);
}

/// Floors a decimal price string to whole units.
#[test]
fn floors_decimal_price() {
    assert_eq!(event_with("120.90", "").price_floor(), 120);
}

/// Unparseable prices render as zero instead of failing the view.
#[test]
fn unparseable_price_is_zero() {
    assert_eq!(event_with("free", "").price_floor(), 0);
}

/// Deserializes `price` whether the API sends a string or a number.
#[test]
fn price_accepts_string_or_number() {
    let from_string: Event =
        serde_json::from_str(r#"{"event_id":1,"title":"A","price":"10.5"}"#).unwrap();
    let from_number: Event =
        serde_json::from_str(r#"{"event_id":2,"title":"B","price":10.5}"#).unwrap();
    assert_eq!(from_string.price, "10.5");
    assert_eq!(from_number.price, "10.5");
}
