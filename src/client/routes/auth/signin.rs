use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::api::auth::{self, SignInForm};
use crate::client::api::ApiError;
use crate::client::config::ApiConfig;
use crate::client::guard::ROLE_COOKIE;
use crate::client::router::Route;
use crate::client::store::{self, use_user_store};
use crate::client::toast::{self, use_toasts};
use crate::client::util::dom;

#[component]
pub fn SignIn() -> Element {
    let config = use_context::<ApiConfig>();
    let user_store = use_user_store();
    let toasts = use_toasts();
    let navigator = navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if email.read().trim().is_empty() || password.read().is_empty() {
            toast::error(toasts, "Please enter your email and password.");
            return;
        }
        if *submitting.peek() {
            return;
        }
        submitting.set(true);

        let config = config.clone();
        let form = SignInForm {
            email: email.peek().trim().to_string(),
            password: password.peek().clone(),
        };
        spawn(async move {
            let result = auth::sign_in(&config, &form).await;
            submitting.set(false);
            match result {
                Ok(profile) => {
                    // The auth token cookie is set by the server; the role
                    // cookie is what routes admins past the guard.
                    if let Some(role) = &profile.role {
                        dom::set_document_cookie(&format!("{ROLE_COOKIE}={role}; path=/"));
                    }
                    store::remember_user(user_store, profile);
                    navigator.push(Route::Home {});
                }
                Err(ApiError::Api(message)) => toast::error(toasts, message),
                Err(ApiError::Malformed) => {
                    toast::error(toasts, "Unexpected response from the server.")
                }
                Err(err) => {
                    tracing::error!("sign-in failed: {err}");
                    toast::error(toasts, "An error occurred while signing in.");
                }
            }
        });
    };

    rsx!(
        div { class: "w-full max-w-md mx-auto bg-gray-900 border border-gray-800 rounded-xl p-8",
            h1 { class: "text-3xl font-bold text-center", "Welcome back" }
            p { class: "text-gray-400 text-center mt-1", "Sign in to book your next event." }

            form { class: "mt-8 flex flex-col gap-4", onsubmit: submit,
                label { class: "flex flex-col gap-1",
                    span { class: "text-sm text-gray-300", "Email" }
                    input {
                        r#type: "email",
                        class: "rounded-lg py-3 px-4 bg-white/10 border border-gray-600 focus:border-pink-600 outline-none",
                        placeholder: "you@example.com",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                label { class: "flex flex-col gap-1",
                    span { class: "text-sm text-gray-300", "Password" }
                    input {
                        r#type: "password",
                        class: "rounded-lg py-3 px-4 bg-white/10 border border-gray-600 focus:border-pink-600 outline-none",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                button {
                    r#type: "submit",
                    class: "mt-2 py-3 rounded-lg bg-pink-600 hover:bg-pink-700 font-semibold disabled:opacity-50",
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Sign In" }
                }
            }

            p { class: "text-center text-gray-400 mt-6",
                "New to Revento? "
                Link { to: Route::SignUp {}, class: "text-pink-500 hover:underline", "Create an account" }
            }
        }
    )
}
