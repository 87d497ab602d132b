use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx!(
        div { class: "flex flex-col items-center justify-center min-h-[50vh] text-center px-6",
            h1 { class: "text-5xl font-extrabold", "404" }
            p { class: "text-gray-400 mt-3", "The page {path} does not exist." }
            Link {
                to: Route::Home {},
                class: "mt-6 px-6 py-3 rounded-lg bg-pink-600 hover:bg-pink-700 font-semibold",
                "Back to Home"
            }
        }
    )
}
