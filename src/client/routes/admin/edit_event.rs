use dioxus::prelude::*;
use dioxus_logger::tracing;
use web_sys::FormData;

use crate::client::api::{events, ApiError};
use crate::client::config::ApiConfig;
use crate::client::router::Route;
use crate::client::routes::admin::add_event::{selected_photo, PHOTO_INPUT_ID};
use crate::client::routes::home::CATEGORIES;
use crate::client::toast::{self, use_toasts};
use crate::model::event::Event;

#[component]
pub fn EditEvent(id: i64) -> Element {
    let config = use_context::<ApiConfig>();

    let event = use_resource({
        let config = config.clone();
        move || {
            let config = config.clone();
            async move { events::get_event(&config, id).await }
        }
    });

    let event = event.read();
    match event.as_ref() {
        Some(Ok(event)) => rsx!(EditEventForm {
            key: "{event.event_id}",
            event: event.clone(),
        }),
        Some(Err(err)) => {
            tracing::error!("failed to fetch event {id}: {err}");
            rsx!(
                div { class: "flex-1",
                    h1 { class: "text-3xl font-bold", "Edit Event" }
                    p { class: "text-gray-400 mt-6", "This event could not be loaded." }
                    Link {
                        to: Route::ManageEvents {},
                        class: "inline-block mt-4 px-6 py-3 rounded-lg bg-pink-600 hover:bg-pink-700 font-semibold",
                        "Back to Manage Events"
                    }
                }
            )
        }
        None => rsx!(
            div { class: "flex-1 flex items-center justify-center py-16",
                p { class: "text-gray-400", "Loading event..." }
            }
        ),
    }
}

#[component]
fn EditEventForm(event: Event) -> Element {
    let config = use_context::<ApiConfig>();
    let toasts = use_toasts();
    let navigator = navigator();

    let event_id = event.event_id;
    let mut title = use_signal(|| event.title.clone());
    let mut description = use_signal(|| event.description.clone());
    let mut date_time = use_signal(|| event.date_time.clone());
    let mut location = use_signal(|| event.location.clone());
    let mut category = use_signal(|| event.category.clone());
    let mut price = use_signal(|| event.price.clone());
    let mut remove_photo = use_signal(|| false);
    let mut submitting = use_signal(|| false);
    let has_photo = event.event_photo.as_deref().is_some_and(|p| !p.is_empty());

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if title.read().trim().is_empty()
            || date_time.read().is_empty()
            || location.read().trim().is_empty()
            || price.read().trim().is_empty()
        {
            toast::error(toasts, "Please fill in the title, date, location, and price.");
            return;
        }
        if *submitting.peek() {
            return;
        }

        // Unlike creation, the update endpoint names the start date field
        // "date_time" and needs the event identifier.
        let Ok(form) = FormData::new() else {
            toast::error(toasts, "An error occurred while preparing the form.");
            return;
        };
        let _ = form.append_with_str("event_id", &event_id.to_string());
        let _ = form.append_with_str("title", title.peek().trim());
        let _ = form.append_with_str("description", description.peek().trim());
        let _ = form.append_with_str("date_time", &date_time.peek());
        let _ = form.append_with_str("location", location.peek().trim());
        let _ = form.append_with_str("category", &category.peek());
        let _ = form.append_with_str("price", price.peek().trim());
        if let Some(file) = selected_photo() {
            let _ = form.append_with_blob("event_photo", &file);
        } else if *remove_photo.peek() {
            let _ = form.append_with_str("remove_photo", "1");
        }

        submitting.set(true);
        let config = config.clone();
        spawn(async move {
            let result = events::update_event(&config, form).await;
            submitting.set(false);
            match result {
                Ok(()) => {
                    toast::success(toasts, "Event updated");
                    navigator.push(Route::ManageEvents {});
                }
                Err(ApiError::Api(message)) => toast::error(toasts, message),
                Err(err) => {
                    tracing::error!("event update failed: {err}");
                    toast::error(toasts, "An error occurred while updating the event.");
                }
            }
        });
    };

    rsx!(
        div { class: "flex-1 max-w-2xl",
            h1 { class: "text-3xl font-bold", "Edit Event" }

            form { class: "mt-6 flex flex-col gap-4", onsubmit: submit,
                label { class: "flex flex-col gap-1",
                    span { class: "text-sm text-gray-300", "Title" }
                    input {
                        r#type: "text",
                        class: "rounded-lg py-3 px-4 bg-white/10 border border-gray-600 focus:border-pink-600 outline-none",
                        value: "{title}",
                        oninput: move |evt| title.set(evt.value()),
                    }
                }
                label { class: "flex flex-col gap-1",
                    span { class: "text-sm text-gray-300", "Description" }
                    textarea {
                        class: "rounded-lg py-3 px-4 bg-white/10 border border-gray-600 focus:border-pink-600 outline-none min-h-28",
                        value: "{description}",
                        oninput: move |evt| description.set(evt.value()),
                    }
                }
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    label { class: "flex flex-col gap-1",
                        span { class: "text-sm text-gray-300", "Date and time" }
                        input {
                            r#type: "datetime-local",
                            class: "rounded-lg py-3 px-4 bg-white/10 border border-gray-600 focus:border-pink-600 outline-none",
                            value: "{date_time}",
                            oninput: move |evt| date_time.set(evt.value()),
                        }
                    }
                    label { class: "flex flex-col gap-1",
                        span { class: "text-sm text-gray-300", "Location" }
                        input {
                            r#type: "text",
                            class: "rounded-lg py-3 px-4 bg-white/10 border border-gray-600 focus:border-pink-600 outline-none",
                            value: "{location}",
                            oninput: move |evt| location.set(evt.value()),
                        }
                    }
                    label { class: "flex flex-col gap-1",
                        span { class: "text-sm text-gray-300", "Category" }
                        select {
                            class: "rounded-lg py-3 px-4 bg-gray-800 border border-gray-600 focus:border-pink-600 outline-none",
                            value: "{category}",
                            onchange: move |evt| category.set(evt.value()),
                            for (slug, name) in CATEGORIES {
                                option { key: "{slug}", value: slug, "{name}" }
                            }
                        }
                    }
                    label { class: "flex flex-col gap-1",
                        span { class: "text-sm text-gray-300", "Price (SAR)" }
                        input {
                            r#type: "number",
                            min: "0",
                            step: "0.01",
                            class: "rounded-lg py-3 px-4 bg-white/10 border border-gray-600 focus:border-pink-600 outline-none",
                            value: "{price}",
                            oninput: move |evt| price.set(evt.value()),
                        }
                    }
                }
                label { class: "flex flex-col gap-1",
                    span { class: "text-sm text-gray-300", "Replace photo (optional)" }
                    input {
                        id: PHOTO_INPUT_ID,
                        r#type: "file",
                        accept: "image/*",
                        class: "rounded-lg py-2 px-4 bg-white/10 border border-gray-600",
                    }
                }
                if has_photo {
                    label { class: "flex items-center gap-2 text-sm text-gray-300",
                        input {
                            r#type: "checkbox",
                            checked: remove_photo(),
                            onchange: move |evt| remove_photo.set(evt.checked()),
                        }
                        "Remove the current photo"
                    }
                }
                button {
                    r#type: "submit",
                    class: "mt-2 py-3 rounded-lg bg-pink-600 hover:bg-pink-700 font-semibold disabled:opacity-50",
                    disabled: submitting(),
                    if submitting() { "Saving..." } else { "Save Changes" }
                }
            }
        }
    )
}
