use dioxus::prelude::*;

/// Full-height page container for standalone screens.
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let extra = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen px-4 py-8 {extra}",
            {children}
        }
    )
}
