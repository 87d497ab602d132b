use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::api::bookings;
use crate::client::components::carousel::event_image_url;
use crate::client::components::EventDetailsDrawer;
use crate::client::config::ApiConfig;
use crate::model::event::Event;

#[component]
pub fn BookedEvents(username: String) -> Element {
    let config = use_context::<ApiConfig>();
    let mut selected = use_signal(|| None::<Event>);

    let booked = use_resource({
        let config = config.clone();
        let username = username.clone();
        move || {
            let config = config.clone();
            let username = username.clone();
            async move {
                match bookings::get_booked_events(&config, &username).await {
                    Ok(events) => events,
                    Err(err) => {
                        tracing::error!("failed to fetch booked events: {err}");
                        Vec::new()
                    }
                }
            }
        }
    });

    let events = booked.read().clone().unwrap_or_default();

    rsx!(
        div { class: "flex-1",
            h1 { class: "text-3xl font-bold", "Booked Events" }

            if events.is_empty() {
                p { class: "text-gray-400 mt-6", "You haven't booked any events yet." }
            } else {
                div { class: "mt-6 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                    for event in events.iter() {
                        div {
                            key: "{event.event_id}",
                            class: "bg-gray-900 border border-gray-800 rounded-xl overflow-hidden cursor-pointer hover:border-pink-600 transition-all",
                            onclick: {
                                let event = event.clone();
                                move |_| selected.set(Some(event.clone()))
                            },
                            img {
                                class: "w-full h-36 object-cover",
                                src: event_image_url(&config, event),
                                alt: "{event.title}",
                                loading: "lazy",
                            }
                            div { class: "p-4",
                                h3 { class: "font-semibold truncate", "{event.title}" }
                                p { class: "text-sm text-gray-400", {event.date_time_label()} }
                                p { class: "text-sm text-gray-400 truncate", "{event.location}" }
                            }
                        }
                    }
                }
            }

            if let Some(event) = selected() {
                EventDetailsDrawer {
                    key: "{event.event_id}",
                    event,
                    on_close: move |_| selected.set(None),
                }
            }
        }
    )
}
