use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn Footer() -> Element {
    rsx!(
        footer { class: "bg-gray-900 text-gray-400 mt-10",
            div { class: "container mx-auto px-4 py-8 flex flex-col md:flex-row justify-between gap-4",
                div {
                    p { class: "text-white font-bold text-lg", "Revento" }
                    p { class: "text-sm", "Book the best events, experiences, and shows." }
                }
                ul { class: "flex gap-4 text-sm",
                    li {
                        Link { to: Route::Home {}, class: "hover:text-pink-500", "Home" }
                    }
                    li {
                        Link { to: Route::SignIn {}, class: "hover:text-pink-500", "Sign In" }
                    }
                    li {
                        Link { to: Route::SignUp {}, class: "hover:text-pink-500", "Sign Up" }
                    }
                }
            }
            div { class: "border-t border-gray-800 text-center text-xs py-4",
                "© 2026 Revento. All rights reserved."
            }
        }
    )
}
