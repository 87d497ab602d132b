//! Tests for the management table's column sorting.

use crate::client::routes::admin::manage_events::{
    sort_events, toggle_sort, SortField, SortOrder, TableSort,
};
use crate::model::event::Event;

fn event(id: i64, title: &str, date_time: &str, price: &str) -> Event {
    Event {
        event_id: id,
        title: title.to_string(),
        description: String::new(),
        date_time: date_time.to_string(),
        location: String::new(),
        category: String::new(),
        price: price.to_string(),
        event_photo: None,
    }
}

fn ids(events: &[Event]) -> Vec<i64> {
    events.iter().map(|e| e.event_id).collect()
}

/// A fresh column sorts ascending.
#[test]
fn new_column_starts_ascending() {
    let sort = toggle_sort(None, SortField::Title);
    assert_eq!(
        sort,
        TableSort {
            field: SortField::Title,
            order: SortOrder::Asc
        }
    );
}

/// Clicking the active column flips its direction.
#[test]
fn active_column_flips_direction() {
    let sort = toggle_sort(None, SortField::Price);
    let sort = toggle_sort(Some(sort), SortField::Price);
    assert_eq!(sort.order, SortOrder::Desc);
    let sort = toggle_sort(Some(sort), SortField::Price);
    assert_eq!(sort.order, SortOrder::Asc);
}

/// Switching to a different column resets to ascending.
#[test]
fn switching_column_resets_to_ascending() {
    let sort = toggle_sort(None, SortField::Title);
    let sort = toggle_sort(Some(sort), SortField::Title);
    assert_eq!(sort.order, SortOrder::Desc);
    let sort = toggle_sort(Some(sort), SortField::Date);
    assert_eq!(
        sort,
        TableSort {
            field: SortField::Date,
            order: SortOrder::Asc
        }
    );
}

/// Titles sort case-insensitively.
#[test]
fn titles_sort_case_insensitively() {
    let events = vec![
        event(1, "zebra run", "", "0"),
        event(2, "Alpha Night", "", "0"),
        event(3, "beta fest", "", "0"),
    ];
    let sorted = sort_events(
        events,
        TableSort {
            field: SortField::Title,
            order: SortOrder::Asc,
        },
    );
    assert_eq!(ids(&sorted), vec![2, 3, 1]);
}

/// Prices sort by numeric value, not lexicographically.
#[test]
fn prices_sort_numerically() {
    let events = vec![
        event(1, "a", "", "100"),
        event(2, "b", "", "20"),
        event(3, "c", "", "3"),
    ];
    let sorted = sort_events(
        events,
        TableSort {
            field: SortField::Price,
            order: SortOrder::Asc,
        },
    );
    assert_eq!(ids(&sorted), vec![3, 2, 1]);
}

/// Dates sort chronologically, with unparseable dates last.
#[test]
fn dates_sort_chronologically_with_bad_dates_last() {
    let events = vec![
        event(1, "a", "2026-07-01 20:00:00", "0"),
        event(2, "b", "not a date", "0"),
        event(3, "c", "2026-06-01 20:00:00", "0"),
    ];
    let sorted = sort_events(
        events,
        TableSort {
            field: SortField::Date,
            order: SortOrder::Asc,
        },
    );
    assert_eq!(ids(&sorted), vec![3, 1, 2]);
}

/// Events equal under the sort key keep their original relative order.
#[test]
fn equal_keys_keep_listing_order() {
    let events = vec![
        event(10, "Same", "", "50"),
        event(11, "Same", "", "50"),
        event(12, "Same", "", "50"),
    ];
    let sorted = sort_events(
        events,
        TableSort {
            field: SortField::Title,
            order: SortOrder::Asc,
        },
    );
    assert_eq!(ids(&sorted), vec![10, 11, 12]);

    let events = vec![
        event(10, "Same", "", "50"),
        event(11, "Same", "", "50"),
        event(12, "Same", "", "50"),
    ];
    let sorted = sort_events(
        events,
        TableSort {
            field: SortField::Title,
            order: SortOrder::Desc,
        },
    );
    assert_eq!(ids(&sorted), vec![10, 11, 12]);
}

/// Descending order reverses the comparison.
#[test]
fn descending_reverses_order() {
    let events = vec![event(1, "a", "", "5"), event(2, "b", "", "9")];
    let sorted = sort_events(
        events,
        TableSort {
            field: SortField::Price,
            order: SortOrder::Desc,
        },
    );
    assert_eq!(ids(&sorted), vec![2, 1]);
}
