//! Event detail drawer with the booking action.

#[cfg(test)]
mod tests;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCalendarDays, FaCircleCheck, FaLocationDot, FaTicket,
};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::api::{bookings, ApiError};
use crate::client::components::carousel::event_image_url;
use crate::client::config::ApiConfig;
use crate::client::store::use_user_store;
use crate::client::toast::{self, use_toasts};
use crate::model::event::Event;

/// Booking state for the drawer's action button. Once a successful booking
/// response is observed the action stays disabled for the session.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BookingState {
    booked: bool,
}

impl BookingState {
    pub fn from_booked_set(booked_ids: &[i64], event_id: i64) -> Self {
        Self {
            booked: booked_ids.contains(&event_id),
        }
    }

    pub fn can_book(&self) -> bool {
        !self.booked
    }

    pub fn mark_booked(&mut self) {
        self.booked = true;
    }
}

#[component]
pub fn EventDetailsDrawer(event: Event, on_close: EventHandler<()>) -> Element {
    let config = use_context::<ApiConfig>();
    let user_store = use_user_store();
    let toasts = use_toasts();
    let mut booking = use_signal(BookingState::default);

    let event_id = event.event_id;
    let username = user_store.read().as_ref().map(|u| u.username.clone());

    // The drawer is remounted per event, so the booked-status lookup runs
    // once with the event it was opened for.
    {
        let config = config.clone();
        let username = username.clone();
        use_future(move || {
            let config = config.clone();
            let username = username.clone();
            async move {
                let Some(username) = username else { return };
                match bookings::get_booked_events(&config, &username).await {
                    Ok(events) => {
                        let ids: Vec<i64> = events.iter().map(|e| e.event_id).collect();
                        booking.set(BookingState::from_booked_set(&ids, event_id));
                    }
                    Err(err) => tracing::error!("failed to fetch booked status: {err}"),
                }
            }
        });
    }

    let book_ticket = {
        let config = config.clone();
        let username = username.clone();
        move |_| {
            if username.is_none() || !booking.peek().can_book() {
                return;
            }
            let config = config.clone();
            spawn(async move {
                match bookings::book_ticket(&config, event_id).await {
                    Ok(()) => {
                        toast::success(toasts, "Booking successful");
                        booking.write().mark_booked();
                    }
                    Err(ApiError::Api(message)) => {
                        toast::error(toasts, format!("Booking failed: {message}"));
                    }
                    Err(ApiError::Malformed) => {
                        toast::error(toasts, "Unexpected response from the server");
                    }
                    Err(err) => {
                        tracing::error!("booking request failed: {err}");
                        toast::error(toasts, "An error occurred while booking.");
                    }
                }
            });
        }
    };

    let is_booked = !booking.read().can_book();

    rsx!(
        div {
            class: "fixed inset-0 z-50 bg-black/50",
            onclick: move |_| on_close.call(()),
        }
        div { class: "fixed bottom-0 inset-x-0 z-50 bg-black/20 backdrop-blur-xl text-white p-6 rounded-t-2xl shadow-lg border border-gray-700 max-h-[85vh] overflow-y-auto",
            div { class: "mb-6",
                p { class: "text-gray-400 text-sm uppercase tracking-wide", "{event.category}" }
                h2 { class: "text-3xl font-extrabold leading-tight", "{event.title}" }
            }

            div { class: "flex flex-col md:flex-row gap-6",
                div { class: "w-full md:w-[30%]",
                    img {
                        class: "w-full rounded-lg object-cover shadow-md",
                        src: event_image_url(&config, &event),
                        alt: "{event.title}",
                        loading: "lazy",
                    }
                }

                div { class: "flex-1 flex flex-col gap-4",
                    div { class: "grid grid-cols-2 gap-4",
                        div { class: "bg-gray-800 p-4 rounded-lg",
                            p { class: "text-gray-400 text-sm", "Starting From" }
                            div { class: "flex items-center gap-2 text-lg font-semibold",
                                Icon { width: 20, height: 20, icon: FaCalendarDays }
                                {event.date_label()}
                            }
                        }
                        div { class: "bg-gray-800 p-4 rounded-lg",
                            p { class: "text-gray-400 text-sm", "Location" }
                            div { class: "flex items-center gap-2 text-lg font-semibold",
                                Icon { width: 20, height: 20, icon: FaLocationDot }
                                if event.location.is_empty() {
                                    "Unknown Location"
                                } else {
                                    "{event.location}"
                                }
                            }
                        }
                    }

                    div { class: "mt-4 max-w-2xl",
                        h3 { class: "text-lg font-bold border-b border-gray-700 pb-2 mb-3", "About" }
                        p { class: "text-gray-300 text-sm leading-relaxed",
                            if event.description.is_empty() {
                                "No description available."
                            } else {
                                "{event.description}"
                            }
                        }
                    }

                    div { class: "bg-gray-900 p-6 rounded-lg w-full shadow-md",
                        h3 { class: "text-lg font-bold", "Book your spot" }
                        p { class: "text-pink-400 text-xl font-bold mt-1", "From {event.price_floor()} SAR" }
                        p { class: "text-xs text-gray-400", "VAT included" }

                        button {
                            class: if is_booked {
                                "w-full mt-4 py-3 rounded-full text-lg font-bold flex items-center justify-center gap-2 bg-gray-600 cursor-not-allowed"
                            } else {
                                "w-full mt-4 py-3 rounded-full text-lg font-bold flex items-center justify-center gap-2 bg-gradient-to-r from-pink-500 to-red-500 hover:scale-105 transition-transform shadow-lg"
                            },
                            disabled: is_booked,
                            onclick: book_ticket,
                            if is_booked {
                                Icon { width: 20, height: 20, icon: FaCircleCheck }
                                "Already Booked"
                            } else {
                                Icon { width: 20, height: 20, icon: FaTicket }
                                "Book Ticket"
                            }
                        }

                        p { class: "text-xs text-gray-400 text-center mt-2",
                            "Instant booking will be made directly. Limited spots available."
                        }
                    }
                }
            }
        }
    )
}
