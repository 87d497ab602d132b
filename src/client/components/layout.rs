use dioxus::prelude::*;

use crate::client::components::{AdminSidebar, DashboardSidebar, Footer, Navbar, Page};
use crate::client::guard::Guarded;
use crate::client::router::Route;

/// Public storefront chrome: navbar on top, footer below the outlet.
#[component]
pub fn StorefrontLayout() -> Element {
    rsx!(
        div { class: "bg-black text-white flex flex-col min-h-screen",
            Navbar {}
            main { class: "flex-1",
                Outlet::<Route> {}
            }
            Footer {}
        }
    )
}

/// Sign-in and sign-up pages; the guard bounces token holders back home.
#[component]
pub fn AuthLayout() -> Element {
    rsx!(
        Guarded {
            Page { class: "bg-black text-white flex items-center justify-center",
                Outlet::<Route> {}
            }
        }
    )
}

/// Account pages: guard plus the user sidebar.
#[component]
pub fn DashboardLayout() -> Element {
    let route = use_route::<Route>();
    let username = match route {
        Route::Profile { username } | Route::BookedEvents { username } => username,
        _ => String::new(),
    };

    rsx!(
        Guarded {
            div { class: "flex h-full min-h-[60vh]",
                DashboardSidebar { username }
                div { class: "flex-1 flex flex-col p-6 overflow-y-auto",
                    Outlet::<Route> {}
                }
            }
        }
    )
}

/// Admin console: sidebar chrome only, no storefront navbar or footer.
#[component]
pub fn AdminLayout() -> Element {
    rsx!(
        Guarded {
            div { class: "bg-black text-white flex min-h-screen",
                AdminSidebar {}
                main { class: "flex-1 p-6",
                    Outlet::<Route> {}
                }
            }
        }
    )
}
