//! Event management table: every event, filterable by text and sortable by
//! column. Sorting is stable so rows equal under the active column keep
//! their listing order.

#[cfg(test)]
mod tests;

use std::cmp::Ordering;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::api::{events, ApiError};
use crate::client::components::carousel::event_image_url;
use crate::client::config::ApiConfig;
use crate::client::router::Route;
use crate::client::toast::{self, use_toasts};
use crate::client::util::dom;
use crate::model::event::{parse_event_date, Event};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Date,
    Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSort {
    pub field: SortField,
    pub order: SortOrder,
}

/// Clicking a column sorts it ascending; clicking the active column flips
/// the direction.
pub fn toggle_sort(current: Option<TableSort>, field: SortField) -> TableSort {
    match current {
        Some(sort) if sort.field == field => TableSort {
            field,
            order: match sort.order {
                SortOrder::Asc => SortOrder::Desc,
                SortOrder::Desc => SortOrder::Asc,
            },
        },
        _ => TableSort {
            field,
            order: SortOrder::Asc,
        },
    }
}

/// Case-insensitive containment match over title, location, and category.
/// An empty query keeps every event.
pub fn filter_events(events: &[Event], query: &str) -> Vec<Event> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return events.to_vec();
    }
    events
        .iter()
        .filter(|event| {
            event.title.to_lowercase().contains(&needle)
                || event.location.to_lowercase().contains(&needle)
                || event.category.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Stable sort by the active column. Titles compare case-insensitively,
/// dates chronologically with unparseable values ordered after real dates,
/// and prices by their numeric floor rather than as text.
pub fn sort_events(mut events: Vec<Event>, sort: TableSort) -> Vec<Event> {
    events.sort_by(|a, b| {
        let ordering = match sort.field {
            SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortField::Date => match (parse_event_date(&a.date_time), parse_event_date(&b.date_time)) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            SortField::Price => a.price_floor().cmp(&b.price_floor()),
        };
        match sort.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    events
}

#[component]
pub fn ManageEvents() -> Element {
    let config = use_context::<ApiConfig>();
    let toasts = use_toasts();
    let mut query = use_signal(String::new);
    let mut sort = use_signal(|| None::<TableSort>);
    let mut refresh = use_signal(|| 0_u32);

    let all_events = use_resource({
        let config = config.clone();
        move || {
            let config = config.clone();
            let _ = refresh();
            async move {
                match events::get_events(&config, &Default::default()).await {
                    Ok(events) => events,
                    Err(err) => {
                        tracing::error!("failed to fetch events: {err}");
                        Vec::new()
                    }
                }
            }
        }
    });

    let delete_event = {
        let config = config.clone();
        move |event_id: i64, title: String| {
            if !dom::confirm(&format!("Delete event \"{title}\"? This cannot be undone.")) {
                return;
            }
            let config = config.clone();
            spawn(async move {
                match events::delete_event(&config, event_id).await {
                    Ok(()) => {
                        toast::success(toasts, "Event deleted");
                        refresh += 1;
                    }
                    Err(ApiError::Api(message)) => toast::error(toasts, message),
                    Err(err) => {
                        tracing::error!("event delete failed: {err}");
                        toast::error(toasts, "An error occurred while deleting the event.");
                    }
                }
            });
        }
    };

    let mut rows = filter_events(
        &all_events.read().clone().unwrap_or_default(),
        &query.read(),
    );
    if let Some(active) = sort() {
        rows = sort_events(rows, active);
    }

    let header_label = |field: SortField, label: &str| match sort() {
        Some(active) if active.field == field => match active.order {
            SortOrder::Asc => format!("{label} ▲"),
            SortOrder::Desc => format!("{label} ▼"),
        },
        _ => label.to_string(),
    };

    rsx!(
        div { class: "flex-1",
            div { class: "flex flex-col md:flex-row md:items-center md:justify-between gap-4",
                h1 { class: "text-3xl font-bold", "Manage Events" }
                input {
                    r#type: "text",
                    placeholder: "Filter by title, location, or category...",
                    class: "w-full md:w-80 rounded-lg py-2 px-4 bg-white/10 border border-gray-600 focus:border-pink-600 outline-none",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
            }

            div { class: "mt-6 overflow-x-auto bg-gray-900 border border-gray-800 rounded-xl",
                table { class: "w-full text-left",
                    thead { class: "border-b border-gray-800 text-gray-400 text-sm",
                        tr {
                            th { class: "px-4 py-3", "" }
                            th {
                                class: "px-4 py-3 cursor-pointer select-none hover:text-white",
                                onclick: move |_| {
                                    let next = toggle_sort(*sort.peek(), SortField::Title);
                                    sort.set(Some(next));
                                },
                                {header_label(SortField::Title, "Title")}
                            }
                            th {
                                class: "px-4 py-3 cursor-pointer select-none hover:text-white",
                                onclick: move |_| {
                                    let next = toggle_sort(*sort.peek(), SortField::Date);
                                    sort.set(Some(next));
                                },
                                {header_label(SortField::Date, "Date")}
                            }
                            th { class: "px-4 py-3", "Location" }
                            th { class: "px-4 py-3", "Category" }
                            th {
                                class: "px-4 py-3 cursor-pointer select-none hover:text-white",
                                onclick: move |_| {
                                    let next = toggle_sort(*sort.peek(), SortField::Price);
                                    sort.set(Some(next));
                                },
                                {header_label(SortField::Price, "Price")}
                            }
                            th { class: "px-4 py-3 text-right", "Actions" }
                        }
                    }
                    tbody {
                        if rows.is_empty() {
                            tr {
                                td { class: "px-4 py-6 text-gray-400", colspan: 7, "No events found." }
                            }
                        }
                        for event in rows.iter() {
                            tr {
                                key: "{event.event_id}",
                                class: "border-b border-gray-800 last:border-0 hover:bg-gray-800/50",
                                td { class: "px-4 py-3",
                                    img {
                                        class: "w-12 h-12 rounded-lg object-cover",
                                        src: event_image_url(&config, event),
                                        alt: "{event.title}",
                                        loading: "lazy",
                                    }
                                }
                                td { class: "px-4 py-3 font-semibold", "{event.title}" }
                                td { class: "px-4 py-3 text-gray-300", {event.date_time_label()} }
                                td { class: "px-4 py-3 text-gray-300", "{event.location}" }
                                td { class: "px-4 py-3 text-gray-300 capitalize", "{event.category}" }
                                td { class: "px-4 py-3 text-gray-300", "{event.price_floor()} SAR" }
                                td { class: "px-4 py-3 text-right whitespace-nowrap",
                                    Link {
                                        to: Route::EditEvent { id: event.event_id },
                                        class: "px-3 py-1 rounded-lg text-pink-400 hover:text-pink-500 hover:bg-gray-800",
                                        "Edit"
                                    }
                                    button {
                                        class: "px-3 py-1 rounded-lg text-red-400 hover:text-red-500 hover:bg-gray-800",
                                        onclick: {
                                            let delete_event = delete_event.clone();
                                            let event_id = event.event_id;
                                            let title = event.title.clone();
                                            move |_| delete_event(event_id, title.clone())
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
