//! Account overview. The profile shown always belongs to the username in
//! the URL: if the stored profile is for someone else (or missing fields),
//! it is re-fetched and the stored copy replaced.

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::api::auth;
use crate::client::config::ApiConfig;
use crate::client::router::Route;
use crate::client::store::{self, use_user_store};
use crate::model::user::UserProfile;

#[component]
pub fn Profile(username: String) -> Element {
    let config = use_context::<ApiConfig>();
    let user_store = use_user_store();

    let profile = use_resource({
        let config = config.clone();
        let username = username.clone();
        move || {
            let config = config.clone();
            let username = username.clone();
            let stored = user_store.read().clone();
            async move {
                if let Some(stored) = stored {
                    if stored.username == username {
                        return Ok(stored);
                    }
                }
                match auth::get_user(&config, &username).await {
                    Ok(fetched) => {
                        store::remember_user(user_store, fetched.clone());
                        Ok(fetched)
                    }
                    Err(err) => {
                        tracing::error!("failed to fetch profile: {err}");
                        Err(err)
                    }
                }
            }
        }
    });

    let profile = profile.read();
    match profile.as_ref() {
        Some(Ok(user)) => rsx!(ProfileCard { user: user.clone() }),
        Some(Err(_)) => rsx!(
            div { class: "flex-1 flex flex-col items-center justify-center text-center py-16",
                h2 { class: "text-2xl font-bold", "We couldn't load your profile" }
                p { class: "text-gray-400 mt-2", "Your session may have expired." }
                Link {
                    to: Route::SignIn {},
                    class: "mt-6 px-6 py-3 rounded-lg bg-pink-600 hover:bg-pink-700 font-semibold",
                    "Sign In"
                }
            }
        ),
        None => rsx!(
            div { class: "flex-1 flex items-center justify-center py-16",
                p { class: "text-gray-400", "Loading your profile..." }
            }
        ),
    }
}

#[component]
fn ProfileCard(user: UserProfile) -> Element {
    rsx!(
        div { class: "flex-1",
            h1 { class: "text-3xl font-bold", "Dashboard" }
            div { class: "mt-6 bg-gray-900 border border-gray-800 rounded-xl p-6",
                div { class: "flex items-center gap-4",
                    div { class: "w-16 h-16 rounded-full bg-gray-700 border border-white flex items-center justify-center text-2xl font-bold",
                        {user.username.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default()}
                    }
                    div {
                        h2 { class: "text-xl font-semibold", {user.display_name()} }
                        p { class: "text-gray-400", "@{user.username}" }
                    }
                }
                dl { class: "mt-6 grid grid-cols-1 md:grid-cols-2 gap-4",
                    div { class: "bg-gray-800 rounded-lg p-4",
                        dt { class: "text-sm text-gray-400", "Email" }
                        dd { class: "font-semibold mt-1",
                            if user.email.is_empty() { "—" } else { "{user.email}" }
                        }
                    }
                    div { class: "bg-gray-800 rounded-lg p-4",
                        dt { class: "text-sm text-gray-400", "Role" }
                        dd { class: "font-semibold mt-1 capitalize",
                            {user.role.clone().unwrap_or_else(|| "user".to_string())}
                        }
                    }
                }
            }
        }
    )
}
