//! Landing page: search header, the featured countdown, personalized picks,
//! and one carousel per fixed category.

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::api::events::{self, EventFilter};
use crate::client::api::bookings;
use crate::client::components::{EventsCarousel, SearchHeader, SoonEvent};
use crate::client::config::ApiConfig;
use crate::client::store::use_user_store;

/// The fixed storefront categories as `(slug, display title)`. The slug is
/// both the listing query value and the section anchor the search header's
/// shortcut cards scroll to.
pub const CATEGORIES: [(&str, &str); 6] = [
    ("sports", "Sports"),
    ("restaurants", "Restaurants"),
    ("football", "Football"),
    ("concerts", "Concerts"),
    ("theater", "Theater"),
    ("things-to-do", "Things to Do"),
];

#[component]
pub fn Home() -> Element {
    let config = use_context::<ApiConfig>();
    let user_store = use_user_store();

    let latest = use_resource({
        let config = config.clone();
        move || {
            let config = config.clone();
            async move {
                match events::get_events(&config, &EventFilter::latest()).await {
                    Ok(events) => events,
                    Err(err) => {
                        tracing::error!("failed to fetch latest events: {err}");
                        Vec::new()
                    }
                }
            }
        }
    });

    // Personalized picks, minus anything the user already booked. Reruns when
    // the signed-in profile changes.
    let recommended = use_resource({
        let config = config.clone();
        move || {
            let config = config.clone();
            let identity = user_store
                .read()
                .as_ref()
                .and_then(|u| Some((u.user_uuid.clone()?, u.username.clone())));
            async move {
                let Some((uuid, username)) = identity else {
                    return Vec::new();
                };
                let picks = match events::recommend_events(&config, &uuid).await {
                    Ok(picks) => picks,
                    Err(err) => {
                        tracing::error!("failed to fetch recommendations: {err}");
                        return Vec::new();
                    }
                };
                let booked_ids: Vec<i64> = match bookings::get_booked_events(&config, &username)
                    .await
                {
                    Ok(events) => events.iter().map(|e| e.event_id).collect(),
                    Err(err) => {
                        tracing::error!("failed to fetch booked events: {err}");
                        Vec::new()
                    }
                };
                picks
                    .into_iter()
                    .filter(|event| !booked_ids.contains(&event.event_id))
                    .collect()
            }
        }
    });

    let latest_events = latest.read().clone().unwrap_or_default();
    let recommended_events = recommended.read().clone().unwrap_or_default();

    rsx!(
        SearchHeader {}

        if !latest_events.is_empty() {
            SoonEvent { events: latest_events.clone() }
            section { id: "latest",
                EventsCarousel { title: "Latest Events", events: latest_events }
            }
        }

        if !recommended_events.is_empty() {
            section { id: "recommended",
                EventsCarousel { title: "Recommended for You", events: recommended_events }
            }
        }

        for (slug, title) in CATEGORIES {
            section { key: "{slug}", id: slug,
                CategorySection { slug: slug.to_string(), title: title.to_string() }
            }
        }
    )
}

#[component]
fn CategorySection(slug: String, title: String) -> Element {
    let config = use_context::<ApiConfig>();

    let events = use_resource({
        let config = config.clone();
        let slug = slug.clone();
        move || {
            let config = config.clone();
            let slug = slug.clone();
            async move {
                match events::get_events(&config, &EventFilter::category(&slug)).await {
                    Ok(events) => events,
                    Err(err) => {
                        tracing::error!("failed to fetch {slug} events: {err}");
                        Vec::new()
                    }
                }
            }
        }
    });

    rsx!(EventsCarousel {
        title,
        events: events.read().clone().unwrap_or_default(),
    })
}
