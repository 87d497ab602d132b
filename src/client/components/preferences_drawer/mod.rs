//! Two-step sign-up flow: create the account, then record the new user's
//! city and interest preferences. A failed sign-up aborts the flow before
//! preferences are ever submitted.

#[cfg(test)]
mod tests;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::api::auth::{self, SignUpForm};
use crate::client::api::preferences::{self, PreferencesRequest};
use crate::client::api::ApiError;
use crate::client::config::ApiConfig;
use crate::client::guard::TOKEN_COOKIE;
use crate::client::router::Route;
use crate::client::store::{self, UserStore};
use crate::client::toast::{self, use_toasts};
use crate::client::util::dom;
use crate::model::user::UserProfile;

pub const CITIES: [&str; 4] = ["Riyadh", "Dammam", "Khobar", "Jeddah"];

pub const INTERESTS: [&str; 6] = [
    "Sports",
    "Concerts",
    "Theater",
    "Restaurants",
    "Football",
    "Things to Do",
];

pub const ACTIVITIES: [&str; 6] = [
    "Live Music",
    "Stand-up Comedy",
    "Fine Dining",
    "Outdoor Adventures",
    "Art Exhibitions",
    "Family Events",
];

/// Maximum selections allowed per preference group.
pub const MAX_PER_GROUP: usize = 2;

/// Toggles `value` in a capped selection list. Removing always succeeds;
/// adding is a no-op once the list already holds `max` entries.
pub fn toggle_limited(mut selected: Vec<String>, value: &str, max: usize) -> Vec<String> {
    if let Some(index) = selected.iter().position(|v| v == value) {
        selected.remove(index);
    } else if selected.len() < max {
        selected.push(value.to_string());
    }
    selected
}

/// What the sign-up flow does next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowAction {
    /// Account created; submit the preference selections.
    SubmitPreferences,
    /// Preferences recorded; the flow is done.
    Complete,
    /// A step failed; stop without running the remaining steps.
    Abort,
}

/// Pure state machine for the sign-up-then-preferences sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SignupFlow {
    account_created: bool,
}

impl SignupFlow {
    pub fn after_signup(&mut self, success: bool) -> FlowAction {
        self.account_created = success;
        if success {
            FlowAction::SubmitPreferences
        } else {
            FlowAction::Abort
        }
    }

    pub fn after_preferences(&self, success: bool) -> FlowAction {
        if self.account_created && success {
            FlowAction::Complete
        } else {
            FlowAction::Abort
        }
    }
}

#[component]
pub fn PreferencesDrawer(form: SignUpForm, on_close: EventHandler<()>) -> Element {
    let config = use_context::<ApiConfig>();
    let user_store = use_context::<UserStore>();
    let toasts = use_toasts();
    let navigator = navigator();

    let mut city = use_signal(|| None::<String>);
    let mut interests = use_signal(Vec::<String>::new);
    let mut activities = use_signal(Vec::<String>::new);
    let mut submitting = use_signal(|| false);

    let submit = move |_| {
        let Some(chosen_city) = city() else {
            toast::error(toasts, "Please choose your city.");
            return;
        };
        if interests.read().is_empty() || activities.read().is_empty() {
            toast::error(toasts, "Please pick at least one interest and one activity.");
            return;
        }
        if *submitting.peek() {
            return;
        }
        submitting.set(true);

        let config = config.clone();
        let form = form.clone();
        spawn(async move {
            let mut flow = SignupFlow::default();
            let signed_up = auth::sign_up(&config, &form).await;
            let response = match signed_up {
                Ok(response) => {
                    flow.after_signup(true);
                    response
                }
                Err(err) => {
                    flow.after_signup(false);
                    submitting.set(false);
                    match err {
                        ApiError::Api(message) => toast::error(toasts, message),
                        ApiError::Malformed => {
                            toast::error(toasts, "Unexpected response from the server.")
                        }
                        other => {
                            tracing::error!("sign-up failed: {other}");
                            toast::error(toasts, "An error occurred while signing up.");
                        }
                    }
                    return;
                }
            };

            if let Some(token) = &response.token {
                dom::set_document_cookie(&format!("{TOKEN_COOKIE}={token}; path=/"));
            }
            store::remember_user(
                user_store,
                UserProfile {
                    user_uuid: response.user_id.clone(),
                    username: form.username.clone(),
                    fullname: Some(form.fullname.clone()),
                    email: form.email.clone(),
                    role: None,
                },
            );

            let request = PreferencesRequest {
                user_id: response.user_id.clone().unwrap_or_default(),
                city: chosen_city,
                categories: interests.peek().clone(),
                subcategories: activities.peek().clone(),
            };
            let saved = preferences::update_preferences(&config, &request).await;
            submitting.set(false);
            match flow.after_preferences(saved.is_ok()) {
                FlowAction::Complete => {
                    toast::success(toasts, "Welcome to Revento!");
                    navigator.push(Route::Home {});
                }
                _ => {
                    if let Err(err) = saved {
                        tracing::error!("saving preferences failed: {err}");
                    }
                    toast::error(toasts, "Your account was created, but saving preferences failed.");
                    navigator.push(Route::Home {});
                }
            }
        });
    };

    rsx!(
        div { class: "fixed inset-0 z-50 flex justify-end",
            div {
                class: "absolute inset-0 bg-black/60",
                onclick: move |_| on_close.call(()),
            }
            div { class: "relative w-full max-w-md h-full bg-gray-950 border-l border-gray-800 p-6 overflow-y-auto",
                h2 { class: "text-2xl font-bold", "Tell us what you like" }
                p { class: "text-gray-400 mt-1", "We use this to recommend events near you." }

                h3 { class: "mt-6 mb-2 font-semibold", "Your city" }
                div { class: "flex flex-wrap gap-2",
                    for name in CITIES {
                        button {
                            key: "{name}",
                            class: if city() == Some(name.to_string()) {
                                "px-4 py-2 rounded-full bg-pink-600 text-white"
                            } else {
                                "px-4 py-2 rounded-full bg-white/10 hover:bg-white/20"
                            },
                            onclick: move |_| city.set(Some(name.to_string())),
                            "{name}"
                        }
                    }
                }

                h3 { class: "mt-6 mb-2 font-semibold", "Interests (up to {MAX_PER_GROUP})" }
                div { class: "flex flex-wrap gap-2",
                    for name in INTERESTS {
                        button {
                            key: "{name}",
                            class: if interests.read().iter().any(|v| v == name) {
                                "px-4 py-2 rounded-full bg-pink-600 text-white"
                            } else {
                                "px-4 py-2 rounded-full bg-white/10 hover:bg-white/20"
                            },
                            onclick: move |_| {
                                let next = toggle_limited(interests.peek().clone(), name, MAX_PER_GROUP);
                                interests.set(next);
                            },
                            "{name}"
                        }
                    }
                }

                h3 { class: "mt-6 mb-2 font-semibold", "Activities (up to {MAX_PER_GROUP})" }
                div { class: "flex flex-wrap gap-2",
                    for name in ACTIVITIES {
                        button {
                            key: "{name}",
                            class: if activities.read().iter().any(|v| v == name) {
                                "px-4 py-2 rounded-full bg-pink-600 text-white"
                            } else {
                                "px-4 py-2 rounded-full bg-white/10 hover:bg-white/20"
                            },
                            onclick: move |_| {
                                let next = toggle_limited(activities.peek().clone(), name, MAX_PER_GROUP);
                                activities.set(next);
                            },
                            "{name}"
                        }
                    }
                }

                button {
                    class: "w-full mt-8 py-3 rounded-lg bg-pink-600 hover:bg-pink-700 font-semibold disabled:opacity-50",
                    disabled: submitting(),
                    onclick: submit,
                    if submitting() { "Creating your account..." } else { "Finish Sign Up" }
                }
            }
        }
    )
}
