use dioxus::document::Stylesheet;
use dioxus::prelude::*;
use dioxus_logger::tracing;
use gloo_timers::future::TimeoutFuture;

use crate::client::config::ApiConfig;
use crate::client::router::Route;
use crate::client::session::{self, ActivityDebounce, SessionCache, EXTEND_DEBOUNCE_MS};
use crate::client::store;
use crate::client::toast::{self, ToastHost};
use crate::client::util::dom;

const STYLESHEET: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    rsx!(
        Stylesheet { href: STYLESHEET }
        Router::<Route> {}
    )
}

/// Outermost layout: provides the shared context (API config, user store,
/// session cache, toasts), wires the session oracle, and hosts the toast
/// stack. Mounted once for the app's lifetime.
#[component]
pub fn AppShell() -> Element {
    let config = use_context_provider(ApiConfig::from_env);
    store::provide_user_store();
    toast::provide_toasts();
    let cache = use_context_provider(|| Signal::new(SessionCache::default()));
    let debounce = use_context_provider(|| Signal::new(ActivityDebounce::default()));

    let route = use_route::<Route>();
    let path_on_mount = route.to_string();

    // One session check on startup; an expired session on a protected page
    // goes back to sign-in. Public pages render for anonymous visitors.
    {
        let config = config.clone();
        use_future(move || {
            let config = config.clone();
            let path = path_on_mount.clone();
            async move {
                let logged_in = session::check_session(&config, cache).await;
                if !logged_in && (path.starts_with("/dashboard") || path.starts_with("/admin")) {
                    navigator().replace(Route::SignIn {});
                }
            }
        });
    }

    // User activity feeds the renewal debounce.
    use_hook(move || {
        let mut debounce = debounce;
        for event in ["mousemove", "keydown", "click"] {
            dom::add_document_listener(event, move || {
                debounce.write().bump();
            });
        }
    });

    // Arm a renewal timer per activity burst; only the latest generation
    // fires, giving one extension per 5 quiet minutes at most.
    {
        let config = config.clone();
        use_effect(move || {
            let generation = debounce.read().generation();
            if generation == 0 {
                return;
            }
            let config = config.clone();
            spawn(async move {
                TimeoutFuture::new(EXTEND_DEBOUNCE_MS).await;
                if debounce.peek().is_current(generation) {
                    tracing::debug!("activity settled, extending session");
                    session::extend_session(&config, cache).await;
                }
            });
        });
    }

    rsx!(
        ToastHost {}
        Outlet::<Route> {}
    )
}
