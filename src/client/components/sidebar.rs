use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBars, FaCalendarPlus, FaListCheck, FaRightFromBracket, FaUsers, FaXmark,
};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::api::auth;
use crate::client::config::ApiConfig;
use crate::client::router::Route;
use crate::client::store::{forget_user, use_user_store};
use crate::client::toast::{self, use_toasts};

/// Admin console navigation. Collapses to a hamburger on small screens.
#[component]
pub fn AdminSidebar() -> Element {
    let config = use_context::<ApiConfig>();
    let user_store = use_user_store();
    let toasts = use_toasts();
    let route = use_route::<Route>();
    let mut open = use_signal(|| false);

    let sign_out = move |_| {
        let config = config.clone();
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

    let link_class = |active: bool| {
        if active {
            "flex items-center gap-3 px-4 py-3 rounded-lg bg-pink-600 text-white"
        } else {
            "flex items-center gap-3 px-4 py-3 rounded-lg hover:bg-gray-800"
        }
    };

    rsx!(
        button {
            class: "md:hidden fixed top-4 left-4 z-40 p-2 rounded-lg bg-gray-800 text-white",
            onclick: move |_| {
                let was_open = *open.read();
                open.set(!was_open);
            },
            if open() {
                Icon { width: 20, height: 20, icon: FaXmark }
            } else {
                Icon { width: 20, height: 20, icon: FaBars }
            }
        }
        aside {
            class: if open() {
                "fixed md:static inset-y-0 left-0 z-30 w-64 bg-gray-900 border-r border-gray-800 p-4 flex flex-col"
            } else {
                "hidden md:flex fixed md:static inset-y-0 left-0 z-30 w-64 bg-gray-900 border-r border-gray-800 p-4 flex-col"
            },
            h2 { class: "text-xl font-bold px-4 py-3", "Admin Console" }
            nav { class: "flex flex-col gap-1 mt-2",
                Link {
                    to: Route::ManageUsers {},
                    class: link_class(matches!(route, Route::ManageUsers {})),
                    onclick: move |_| open.set(false),
                    Icon { width: 18, height: 18, icon: FaUsers }
                    "Manage Users"
                }
                Link {
                    to: Route::AddEvent {},
                    class: link_class(matches!(route, Route::AddEvent {})),
                    onclick: move |_| open.set(false),
                    Icon { width: 18, height: 18, icon: FaCalendarPlus }
                    "Add Event"
                }
                Link {
                    to: Route::ManageEvents {},
                    class: link_class(matches!(
                        route,
                        Route::ManageEvents {} | Route::EditEvent { .. }
                    )),
                    onclick: move |_| open.set(false),
                    Icon { width: 18, height: 18, icon: FaListCheck }
                    "Manage Events"
                }
            }
            button {
                class: "mt-auto flex items-center gap-3 px-4 py-3 rounded-lg text-red-400 hover:text-red-500 hover:bg-gray-800",
                onclick: sign_out,
                Icon { width: 18, height: 18, icon: FaRightFromBracket }
                "Sign Out"
            }
        }
    )
}
