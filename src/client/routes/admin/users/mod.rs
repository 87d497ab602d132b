//! User administration table. Mutations patch the loaded list in place on
//! success instead of refetching it.

#[cfg(test)]
mod tests;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::api::{admin, ApiError};
use crate::client::config::ApiConfig;
use crate::client::toast::{self, use_toasts};
use crate::client::util::dom;
use crate::model::user::AdminUser;

/// Case-insensitive containment match over username, email, and role. An
/// empty query keeps every user.
pub fn filter_users(users: &[AdminUser], query: &str) -> Vec<AdminUser> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return users.to_vec();
    }
    users
        .iter()
        .filter(|user| {
            user.username.to_lowercase().contains(&needle)
                || user.email.to_lowercase().contains(&needle)
                || user.role.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[component]
pub fn ManageUsers() -> Element {
    let config = use_context::<ApiConfig>();
    let toasts = use_toasts();
    let mut query = use_signal(String::new);
    let mut users = use_signal(Vec::<AdminUser>::new);
    let mut loaded = use_signal(|| false);

    {
        let config = config.clone();
        use_future(move || {
            let config = config.clone();
            async move {
                match admin::get_users(&config).await {
                    Ok(fetched) => users.set(fetched),
                    Err(err) => tracing::error!("failed to fetch users: {err}"),
                }
                loaded.set(true);
            }
        });
    }

    let change_role = {
        let config = config.clone();
        move |uuid: String, role: String| {
            let config = config.clone();
            spawn(async move {
                match admin::change_role(&config, &uuid, &role).await {
                    Ok(()) => {
                        if let Some(user) =
                            users.write().iter_mut().find(|u| u.uuid == uuid)
                        {
                            user.role = role;
                        }
                        toast::success(toasts, "Role updated");
                    }
                    Err(ApiError::Api(message)) => toast::error(toasts, message),
                    Err(err) => {
                        tracing::error!("role change failed: {err}");
                        toast::error(toasts, "An error occurred while updating the role.");
                    }
                }
            });
        }
    };

    let delete_user = {
        let config = config.clone();
        move |uuid: String, username: String| {
            if !dom::confirm(&format!("Delete user \"{username}\"? This cannot be undone.")) {
                return;
            }
            let config = config.clone();
            spawn(async move {
                match admin::delete_user(&config, &uuid).await {
                    Ok(()) => {
                        users.write().retain(|u| u.uuid != uuid);
                        toast::success(toasts, "User deleted");
                    }
                    Err(ApiError::Api(message)) => toast::error(toasts, message),
                    Err(err) => {
                        tracing::error!("user delete failed: {err}");
                        toast::error(toasts, "An error occurred while deleting the user.");
                    }
                }
            });
        }
    };

    let rows = filter_users(&users.read(), &query.read());

    rsx!(
        div { class: "flex-1",
            div { class: "flex flex-col md:flex-row md:items-center md:justify-between gap-4",
                h1 { class: "text-3xl font-bold", "Manage Users" }
                input {
                    r#type: "text",
                    placeholder: "Filter by username, email, or role...",
                    class: "w-full md:w-80 rounded-lg py-2 px-4 bg-white/10 border border-gray-600 focus:border-pink-600 outline-none",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
            }

            div { class: "mt-6 overflow-x-auto bg-gray-900 border border-gray-800 rounded-xl",
                table { class: "w-full text-left",
                    thead { class: "border-b border-gray-800 text-gray-400 text-sm",
                        tr {
                            th { class: "px-4 py-3", "Username" }
                            th { class: "px-4 py-3", "Email" }
                            th { class: "px-4 py-3", "Role" }
                            th { class: "px-4 py-3 text-right", "Actions" }
                        }
                    }
                    tbody {
                        if rows.is_empty() {
                            tr {
                                td { class: "px-4 py-6 text-gray-400", colspan: 4,
                                    if loaded() { "No users found." } else { "Loading users..." }
                                }
                            }
                        }
                        for user in rows.iter() {
                            tr {
                                key: "{user.uuid}",
                                class: "border-b border-gray-800 last:border-0 hover:bg-gray-800/50",
                                td { class: "px-4 py-3 font-semibold", "{user.username}" }
                                td { class: "px-4 py-3 text-gray-300", "{user.email}" }
                                td { class: "px-4 py-3",
                                    select {
                                        class: "bg-gray-800 border border-gray-700 rounded-lg px-2 py-1",
                                        value: "{user.role}",
                                        onchange: {
                                            let change_role = change_role.clone();
                                            let uuid = user.uuid.clone();
                                            move |evt: FormEvent| change_role(uuid.clone(), evt.value())
                                        },
                                        option { value: "user", "user" }
                                        option { value: "admin", "admin" }
                                    }
                                }
                                td { class: "px-4 py-3 text-right",
                                    // Admins cannot be deleted; demote first.
                                    if user.role != "admin" {
                                        button {
                                            class: "px-3 py-1 rounded-lg text-red-400 hover:text-red-500 hover:bg-gray-800",
                                            onclick: {
                                                let delete_user = delete_user.clone();
                                                let uuid = user.uuid.clone();
                                                let username = user.username.clone();
                                                move |_| delete_user(uuid.clone(), username.clone())
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
