//! Search-as-you-type header with category shortcuts.
//!
//! Each keystroke issues a title query. Responses race, so every request
//! carries a sequence number and only the latest issued request is allowed
//! to update the results.

#[cfg(test)]
mod tests;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaFutbol, FaMagnifyingGlass, FaMasksTheater, FaMusic, FaTicket, FaTrophy, FaUtensils,
};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::api::events::{self, EventFilter};
use crate::client::components::carousel::event_image_url;
use crate::client::components::EventDetailsDrawer;
use crate::client::config::ApiConfig;
use crate::client::routes::home::CATEGORIES;
use crate::client::util::dom;
use crate::model::event::Event;

/// Staleness guard for racing search responses: a response may only be
/// applied if it belongs to the most recently issued request.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchSequence {
    issued: u64,
}

impl SearchSequence {
    /// Registers a new request and returns its sequence number.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Whether a response with this sequence number may be applied.
    pub fn may_apply(&self, sequence: u64) -> bool {
        sequence == self.issued
    }
}

#[component]
pub fn SearchHeader() -> Element {
    let config = use_context::<ApiConfig>();
    let mut query = use_signal(String::new);
    let mut results = use_signal(Vec::<Event>::new);
    let mut show_dropdown = use_signal(|| false);
    let mut selected = use_signal(|| None::<Event>);
    let mut sequence = use_signal(SearchSequence::default);

    let mut search = {
        let config = config.clone();
        move |value: String| {
            query.set(value.clone());
            if value.trim().is_empty() {
                results.set(Vec::new());
                show_dropdown.set(false);
                return;
            }
            let seq = sequence.write().begin();
            let config = config.clone();
            spawn(async move {
                match events::get_events(&config, &EventFilter::title(&value)).await {
                    Ok(found) => {
                        if !sequence.peek().may_apply(seq) {
                            return;
                        }
                        show_dropdown.set(!found.is_empty());
                        results.set(found);
                    }
                    Err(err) => {
                        tracing::error!("search failed: {err}");
                        if sequence.peek().may_apply(seq) {
                            results.set(Vec::new());
                            show_dropdown.set(false);
                        }
                    }
                }
            });
        }
    };

    let category_icon = |slug: &str| match slug {
        "restaurants" => rsx!(Icon { width: 24, height: 24, icon: FaUtensils }),
        "football" => rsx!(Icon { width: 24, height: 24, icon: FaFutbol }),
        "sports" => rsx!(Icon { width: 24, height: 24, icon: FaTrophy }),
        "concerts" => rsx!(Icon { width: 24, height: 24, icon: FaMusic }),
        "theater" => rsx!(Icon { width: 24, height: 24, icon: FaMasksTheater }),
        _ => rsx!(Icon { width: 24, height: 24, icon: FaTicket }),
    };

    rsx!(
        div { class: "w-full py-12 flex flex-col items-center px-6 relative",
            h1 { class: "text-3xl font-bold text-center",
                "Book the best events, experiences, and shows on "
                span { class: "text-pink-500", "Revento" }
            }

            div { class: "relative w-full max-w-lg mt-5",
                input {
                    r#type: "text",
                    placeholder: "Search events by name...",
                    class: "w-full rounded-lg py-4 px-4 bg-white/10 border border-gray-600 focus:border-pink-600 outline-none",
                    value: "{query}",
                    oninput: move |evt| search(evt.value()),
                }
                span { class: "absolute right-3 top-1/2 -translate-y-1/2 text-pink-500",
                    Icon { width: 20, height: 20, icon: FaMagnifyingGlass }
                }

                if show_dropdown() && !results.read().is_empty() {
                    div { class: "absolute left-0 w-full bg-black/30 backdrop-blur-xl shadow-lg rounded-lg max-h-64 overflow-y-auto z-50 top-full",
                        for event in results.read().iter() {
                            div {
                                key: "{event.event_id}",
                                class: "p-3 border-b border-gray-900 hover:bg-pink-700 cursor-pointer flex items-start",
                                onclick: {
                                    let event = event.clone();
                                    move |_| {
                                        query.set(event.title.clone());
                                        show_dropdown.set(false);
                                        selected.set(Some(event.clone()));
                                    }
                                },
                                img {
                                    class: "w-14 h-14 rounded-lg object-cover mr-3",
                                    src: event_image_url(&config, event),
                                    alt: "{event.title}",
                                    loading: "lazy",
                                }
                                div {
                                    p { class: "text-lg font-semibold", "{event.title}" }
                                    p { class: "text-sm text-gray-300",
                                        {format!("{} • {}", event.location, event.date_label())}
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "flex flex-wrap justify-center text-center mt-7 w-full",
                for (slug, title) in CATEGORIES {
                    button {
                        key: "{slug}",
                        class: "flex flex-col items-center p-5 cursor-pointer rounded-lg text-white hover:bg-pink-700 hover:scale-105 transition-all",
                        onclick: move |_| dom::scroll_into_view(slug),
                        {category_icon(slug)}
                        span { class: "text-sm mt-2", "{title}" }
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
