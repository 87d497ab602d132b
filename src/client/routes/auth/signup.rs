use dioxus::prelude::*;

use crate::client::api::auth::SignUpForm;
use crate::client::components::PreferencesDrawer;
use crate::client::router::Route;
use crate::client::toast::{self, use_toasts};

#[component]
pub fn SignUp() -> Element {
    let toasts = use_toasts();

    let mut fullname = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut show_preferences = use_signal(|| false);

    // The account is not created here. The form only collects the fields;
    // the preferences drawer runs the sign-up and preference submission as
    // one flow so a failed sign-up never leaves dangling preferences.
    let continue_to_preferences = move |evt: FormEvent| {
        evt.prevent_default();
        if fullname.read().trim().is_empty()
            || username.read().trim().is_empty()
            || email.read().trim().is_empty()
            || password.read().is_empty()
        {
            toast::error(toasts, "Please fill in all fields.");
            return;
        }
        if *password.read() != *confirm.read() {
            toast::error(toasts, "Passwords do not match.");
            return;
        }
        show_preferences.set(true);
    };

    rsx!(
        div { class: "w-full max-w-md mx-auto bg-gray-900 border border-gray-800 rounded-xl p-8",
            h1 { class: "text-3xl font-bold text-center", "Create your account" }
            p { class: "text-gray-400 text-center mt-1", "Join Revento to discover events near you." }

            form { class: "mt-8 flex flex-col gap-4", onsubmit: continue_to_preferences,
                label { class: "flex flex-col gap-1",
                    span { class: "text-sm text-gray-300", "Full name" }
                    input {
                        r#type: "text",
                        class: "rounded-lg py-3 px-4 bg-white/10 border border-gray-600 focus:border-pink-600 outline-none",
                        value: "{fullname}",
                        oninput: move |evt| fullname.set(evt.value()),
                    }
                }
                label { class: "flex flex-col gap-1",
                    span { class: "text-sm text-gray-300", "Username" }
                    input {
                        r#type: "text",
                        class: "rounded-lg py-3 px-4 bg-white/10 border border-gray-600 focus:border-pink-600 outline-none",
                        value: "{username}",
                        oninput: move |evt| username.set(evt.value()),
                    }
                }
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
                label { class: "flex flex-col gap-1",
                    span { class: "text-sm text-gray-300", "Confirm password" }
                    input {
                        r#type: "password",
                        class: "rounded-lg py-3 px-4 bg-white/10 border border-gray-600 focus:border-pink-600 outline-none",
                        value: "{confirm}",
                        oninput: move |evt| confirm.set(evt.value()),
                    }
                }
                button {
                    r#type: "submit",
                    class: "mt-2 py-3 rounded-lg bg-pink-600 hover:bg-pink-700 font-semibold",
                    "Continue"
                }
            }

            p { class: "text-center text-gray-400 mt-6",
                "Already have an account? "
                Link { to: Route::SignIn {}, class: "text-pink-500 hover:underline", "Sign in" }
            }
        }

        if show_preferences() {
            PreferencesDrawer {
                form: SignUpForm {
                    fullname: fullname.read().trim().to_string(),
                    username: username.read().trim().to_string(),
                    email: email.read().trim().to_string(),
                    password: password.read().clone(),
                },
                on_close: move |_| show_preferences.set(false),
            }
        }
    )
}
