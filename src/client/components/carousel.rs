use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronLeft, FaChevronRight};
use dioxus_free_icons::Icon;

use crate::client::components::EventDetailsDrawer;
use crate::client::config::ApiConfig;
use crate::client::util::dom;
use crate::model::event::Event;

pub const DEFAULT_EVENT_IMG: Asset = asset!("/assets/default-event.svg");

const SCROLL_STEP: i32 = 300;

pub fn event_image_url(config: &ApiConfig, event: &Event) -> String {
    match &event.event_photo {
        Some(photo) if !photo.is_empty() => config.upload_url(photo),
        _ => DEFAULT_EVENT_IMG.to_string(),
    }
}

/// Horizontally scrollable strip of event cards with button and pointer-drag
/// scrolling. All interaction state is local and non-persisted.
#[component]
pub fn EventsCarousel(title: String, events: Vec<Event>) -> Element {
    let config = use_context::<ApiConfig>();
    let mut selected = use_signal(|| None::<Event>);
    let mut dragging = use_signal(|| false);
    let mut drag_start_x = use_signal(|| 0.0_f64);
    let mut drag_scroll_start = use_signal(|| 0_i32);

    let strip_id = format!(
        "carousel-{}",
        title.to_lowercase().replace(|c: char| !c.is_alphanumeric(), "-")
    );
    let strip = strip_id.clone();

    rsx!(
        div { class: "relative w-full p-4 select-none",
            div { class: "flex justify-between items-center mb-4",
                h2 { class: "text-2xl font-bold text-white", "{title}" }
                div { class: "flex gap-2",
                    button {
                        class: "bg-black/60 border border-gray-700 rounded-lg p-2 hover:border-pink-500 transition-all",
                        onclick: {
                            let strip = strip_id.clone();
                            move |_| dom::set_scroll_left(&strip, dom::scroll_left(&strip) - SCROLL_STEP)
                        },
                        Icon { width: 20, height: 20, icon: FaChevronLeft }
                    }
                    button {
                        class: "bg-black/60 border border-gray-700 rounded-lg p-2 hover:border-pink-500 transition-all",
                        onclick: {
                            let strip = strip_id.clone();
                            move |_| dom::set_scroll_left(&strip, dom::scroll_left(&strip) + SCROLL_STEP)
                        },
                        Icon { width: 20, height: 20, icon: FaChevronRight }
                    }
                }
            }

            div {
                id: "{strip}",
                class: "flex gap-4 overflow-x-auto items-start",
                style: "scrollbar-width: none",
                onmousedown: {
                    let strip = strip.clone();
                    move |evt| {
                        dragging.set(true);
                        drag_start_x.set(evt.client_coordinates().x);
                        drag_scroll_start.set(dom::scroll_left(&strip));
                    }
                },
                onmousemove: {
                    let strip = strip.clone();
                    move |evt| {
                        if dragging() {
                            let delta = evt.client_coordinates().x - drag_start_x();
                            dom::set_scroll_left(&strip, drag_scroll_start() - delta as i32);
                        }
                    }
                },
                onmouseup: move |_| dragging.set(false),
                onmouseleave: move |_| dragging.set(false),

                if events.is_empty() {
                    p { class: "text-gray-400", "No events available." }
                } else {
                    for event in events.iter() {
                        div {
                            key: "{event.event_id}",
                            class: "min-w-[250px] max-w-[250px] rounded-xl overflow-hidden shadow-lg flex flex-col hover:scale-105 hover:bg-pink-800 transition-all cursor-pointer",
                            onclick: {
                                let event = event.clone();
                                move |_| selected.set(Some(event.clone()))
                            },
                            img {
                                class: "w-full h-40 object-cover pointer-events-none",
                                src: event_image_url(&config, event),
                                alt: "{event.title}",
                                loading: "lazy",
                            }
                            div { class: "p-4 text-white flex flex-col flex-grow",
                                h3 { class: "font-thin text-lg truncate", "{event.title}" }
                                p { class: "text-sm text-gray-400", {event.date_label()} }
                                p { class: "text-sm text-gray-400 truncate", "{event.location}" }
                                p { class: "mt-2 font-semibold", "From {event.price_floor()} SAR" }
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
