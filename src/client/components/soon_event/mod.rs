//! Hero banner for the nearest upcoming event, with a live countdown.

#[cfg(test)]
mod tests;

use chrono::{Duration, Local, NaiveDateTime};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::client::components::carousel::event_image_url;
use crate::client::components::EventDetailsDrawer;
use crate::client::config::ApiConfig;
use crate::model::event::Event;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountdownParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CountdownParts {
    pub fn is_over(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

/// Splits the time remaining into display fields; elapsed durations clamp
/// to zero.
pub fn countdown_parts(remaining: Duration) -> CountdownParts {
    let total_seconds = remaining.num_seconds().max(0);
    CountdownParts {
        days: total_seconds / 86_400,
        hours: (total_seconds % 86_400) / 3_600,
        minutes: (total_seconds % 3_600) / 60,
        seconds: total_seconds % 60,
    }
}

/// The event with the earliest start strictly after `now`. Events with
/// unparseable dates are skipped.
pub fn nearest_upcoming(events: &[Event], now: NaiveDateTime) -> Option<&Event> {
    events
        .iter()
        .filter_map(|event| event.date().map(|date| (date, event)))
        .filter(|(date, _)| *date > now)
        .min_by_key(|(date, _)| *date)
        .map(|(_, event)| event)
}

#[component]
pub fn SoonEvent(events: Vec<Event>) -> Element {
    let config = use_context::<ApiConfig>();
    let mut selected = use_signal(|| None::<Event>);
    let mut time_left = use_signal(CountdownParts::default);

    let nearest = nearest_upcoming(&events, Local::now().naive_local()).cloned();

    {
        let target = nearest.as_ref().and_then(Event::date);
        use_future(move || async move {
            let Some(target) = target else { return };
            loop {
                let remaining = target - Local::now().naive_local();
                let parts = countdown_parts(remaining);
                time_left.set(parts);
                if parts.is_over() {
                    break;
                }
                TimeoutFuture::new(1_000).await;
            }
        });
    }

    let Some(event) = nearest else {
        return rsx!();
    };
    let countdown = time_left();
    let fields = [
        ("days", countdown.days),
        ("hours", countdown.hours),
        ("minutes", countdown.minutes),
        ("seconds", countdown.seconds),
    ];

    rsx!(
        div { class: "relative w-full text-white",
            div { class: "relative w-full h-[450px] overflow-hidden",
                img {
                    class: "absolute inset-0 w-full h-full object-cover opacity-90 blur-sm",
                    src: event_image_url(&config, &event),
                    alt: "{event.title}",
                }
                div { class: "absolute inset-0 bg-black/70 flex flex-col justify-center items-center text-center px-6",
                    h2 { class: "text-4xl md:text-5xl font-semibold tracking-wide mb-2", "{event.title}" }
                    p { class: "text-lg md:text-xl text-gray-300",
                        {format!("{} | {}", event.date_label(), event.location)}
                    }
                    p { class: "mt-2 text-2xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-purple-400 to-orange-400",
                        "From {event.price_floor()} SAR"
                    }

                    div { class: "mt-6 flex justify-center gap-6 text-center",
                        for (label, value) in fields {
                            div {
                                key: "{label}",
                                class: "flex flex-col p-4 bg-gray-900 rounded-xl shadow-lg",
                                span { class: "text-4xl font-mono font-bold text-yellow-300", "{value}" }
                                span { class: "text-sm uppercase text-gray-400", "{label}" }
                            }
                        }
                    }

                    button {
                        class: "mt-6 px-6 py-3 text-lg font-bold rounded-lg shadow-lg bg-gradient-to-r from-purple-500 via-pink-500 to-orange-500 hover:from-purple-600 hover:to-red-400",
                        onclick: {
                            let event = event.clone();
                            move |_| selected.set(Some(event.clone()))
                        },
                        "Get Your Ticket"
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
