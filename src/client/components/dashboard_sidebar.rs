use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaRightFromBracket, FaTicket, FaUser};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::api::auth;
use crate::client::config::ApiConfig;
use crate::client::router::Route;
use crate::client::store::{forget_user, use_user_store};
use crate::client::toast::{self, use_toasts};

/// Account dashboard navigation for the signed-in user.
#[component]
pub fn DashboardSidebar(username: String) -> Element {
    let config = use_context::<ApiConfig>();
    let user_store = use_user_store();
    let toasts = use_toasts();
    let route = use_route::<Route>();

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
        aside { class: "w-full md:w-60 md:min-h-[60vh] bg-gray-900 border border-gray-800 rounded-xl p-4 flex flex-col",
            nav { class: "flex flex-col gap-1",
                Link {
                    to: Route::Profile { username: username.clone() },
                    class: link_class(matches!(route, Route::Profile { .. })),
                    Icon { width: 18, height: 18, icon: FaUser }
                    "Dashboard"
                }
                Link {
                    to: Route::BookedEvents { username: username.clone() },
                    class: link_class(matches!(route, Route::BookedEvents { .. })),
                    Icon { width: 18, height: 18, icon: FaTicket }
                    "Booked Events"
                }
            }
            button {
                class: "mt-6 flex items-center gap-3 px-4 py-3 rounded-lg text-red-400 hover:text-red-500 hover:bg-gray-800",
                onclick: sign_out,
                Icon { width: 18, height: 18, icon: FaRightFromBracket }
                "Sign Out"
            }
        }
    )
}
