use dioxus::prelude::*;
use dioxus_logger::tracing;
use wasm_bindgen::JsCast;
use web_sys::FormData;

use crate::client::api::{events, ApiError};
use crate::client::components::preferences_drawer::{toggle_limited, ACTIVITIES, MAX_PER_GROUP};
use crate::client::config::ApiConfig;
use crate::client::routes::home::CATEGORIES;
use crate::client::toast::{self, use_toasts};
use crate::client::util::dom;

pub(super) const PHOTO_INPUT_ID: &str = "event-photo";

/// The file currently chosen in the photo input, read straight from the DOM
/// since file inputs cannot be driven through state.
pub(super) fn selected_photo() -> Option<web_sys::File> {
    let input = dom::element_by_id(PHOTO_INPUT_ID)?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    input.files()?.get(0)
}

/// Clears the photo input's browser-held selection.
fn clear_photo_input() {
    if let Some(input) = dom::element_by_id(PHOTO_INPUT_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
    {
        input.set_value("");
    }
}

#[component]
pub fn AddEvent() -> Element {
    let config = use_context::<ApiConfig>();
    let toasts = use_toasts();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut date_time = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut category = use_signal(|| CATEGORIES[0].0.to_string());
    let mut subcategories = use_signal(Vec::<String>::new);
    let mut price = use_signal(String::new);
    let mut submitting = use_signal(|| false);

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

        // The creation endpoint takes multipart form data; the field for the
        // start date is named "date" here, unlike the update endpoint.
        let Ok(form) = FormData::new() else {
            toast::error(toasts, "An error occurred while preparing the form.");
            return;
        };
        let _ = form.append_with_str("title", title.peek().trim());
        let _ = form.append_with_str("description", description.peek().trim());
        let _ = form.append_with_str("date", &date_time.peek());
        let _ = form.append_with_str("location", location.peek().trim());
        let _ = form.append_with_str("category", &category.peek());
        let _ = form.append_with_str("subcategories", &subcategories.peek().join(","));
        let _ = form.append_with_str("price", price.peek().trim());
        if let Some(file) = selected_photo() {
            let _ = form.append_with_blob("event_photo", &file);
        }

        submitting.set(true);
        let config = config.clone();
        spawn(async move {
            let result = events::add_event(&config, form).await;
            submitting.set(false);
            match result {
                Ok(()) => {
                    toast::success(toasts, "Event created");
                    title.set(String::new());
                    description.set(String::new());
                    date_time.set(String::new());
                    location.set(String::new());
                    category.set(CATEGORIES[0].0.to_string());
                    subcategories.set(Vec::new());
                    price.set(String::new());
                    clear_photo_input();
                }
                Err(ApiError::Api(message)) => toast::error(toasts, message),
                Err(err) => {
                    tracing::error!("event creation failed: {err}");
                    toast::error(toasts, "An error occurred while creating the event.");
                }
            }
        });
    };

    rsx!(
        div { class: "flex-1 max-w-2xl",
            h1 { class: "text-3xl font-bold", "Add Event" }

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
                div { class: "flex flex-col gap-1",
                    span { class: "text-sm text-gray-300", "Subcategories (up to {MAX_PER_GROUP})" }
                    div { class: "flex flex-wrap gap-2",
                        for name in ACTIVITIES {
                            button {
                                key: "{name}",
                                r#type: "button",
                                class: if subcategories.read().iter().any(|v| v == name) {
                                    "px-4 py-2 rounded-full bg-pink-600 text-white"
                                } else {
                                    "px-4 py-2 rounded-full bg-white/10 hover:bg-white/20"
                                },
                                onclick: move |_| {
                                    let next = toggle_limited(subcategories.peek().clone(), name, MAX_PER_GROUP);
                                    subcategories.set(next);
                                },
                                "{name}"
                            }
                        }
                    }
                }
                label { class: "flex flex-col gap-1",
                    span { class: "text-sm text-gray-300", "Event photo" }
                    input {
                        id: PHOTO_INPUT_ID,
                        r#type: "file",
                        accept: "image/*",
                        class: "rounded-lg py-2 px-4 bg-white/10 border border-gray-600",
                    }
                }
                button {
                    r#type: "submit",
                    class: "mt-2 py-3 rounded-lg bg-pink-600 hover:bg-pink-700 font-semibold disabled:opacity-50",
                    disabled: submitting(),
                    if submitting() { "Creating..." } else { "Create Event" }
                }
            }
        }
    )
}
