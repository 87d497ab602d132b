use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::api::auth;
use crate::client::config::ApiConfig;
use crate::client::router::Route;
use crate::client::store::{forget_user, use_user_store};
use crate::client::toast::{self, use_toasts};

const LOGO_IMG: Asset = asset!("/assets/logo.svg");

#[component]
pub fn Navbar() -> Element {
    let config = use_context::<ApiConfig>();
    let user_store = use_user_store();
    let toasts = use_toasts();
    let mut menu_open = use_signal(|| false);

    let sign_out = move |_| {
        let config = config.clone();
        menu_open.set(false);
        spawn(async move {
            match auth::logout(&config).await {
                Ok(()) => {
                    forget_user(user_store);
                    navigator().push(Route::SignIn {});
                }
                Err(err) => {
                    tracing::error!("logout failed: {err}");
                    toast::error(toasts, "Sign out failed, please try again.");
                }
            }
        });
    };

    let user = user_store.read();

    rsx!(
        nav { class: "bg-gray-900 shadow-md",
            div { class: "container mx-auto flex justify-between items-center py-2 px-4",
                Link { to: Route::Home {},
                    img { src: LOGO_IMG, alt: "Revento", width: 70, height: 50 }
                }
                if let Some(profile) = user.as_ref() {
                    div { class: "relative",
                        button {
                            class: "w-10 h-10 rounded-full bg-gray-700 border border-white text-white font-semibold",
                            onclick: move |_| {
                                let open = *menu_open.read();
                                menu_open.set(!open);
                            },
                            {profile.username.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default()}
                        }
                        if menu_open() {
                            div { class: "absolute right-0 mt-2 w-44 bg-gray-800 text-white rounded-lg shadow-lg z-50",
                                if profile.is_admin() {
                                    Link {
                                        to: Route::AdminHome {},
                                        class: "block px-4 py-2 hover:bg-gray-700",
                                        onclick: move |_| menu_open.set(false),
                                        "Admin Panel"
                                    }
                                }
                                Link {
                                    to: Route::Profile { username: profile.username.clone() },
                                    class: "block px-4 py-2 hover:bg-gray-700",
                                    onclick: move |_| menu_open.set(false),
                                    "Dashboard"
                                }
                                button {
                                    class: "block w-full text-left px-4 py-2 text-red-400 hover:text-red-500 hover:bg-gray-700",
                                    onclick: sign_out,
                                    "Sign Out"
                                }
                            }
                        }
                    }
                } else {
                    Link { to: Route::SignIn {},
                        button { class: "btn bg-slate-700 hover:bg-pink-600 text-white px-4 py-2 rounded-lg",
                            "Sign In / Sign Up"
                        }
                    }
                }
            }
        }
    )
}
