//! Route guard: decides, before a protected page renders, whether to allow
//! the navigation or redirect it. The decision is a pure function of the
//! request path and the two auth cookies; the [`Guarded`] layout evaluates it
//! and navigates instead of rendering when a redirect is due.

#[cfg(test)]
mod tests;

use dioxus::prelude::*;

use crate::client::router::Route;
use crate::client::store::use_user_store;
use crate::client::util::dom;

pub const TOKEN_COOKIE: &str = "auth_token";
pub const ROLE_COOKIE: &str = "user_role";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    ToSignIn,
    ToHome,
    ToDashboard,
}

/// The guard decision table.
///
/// Dashboard and admin paths require a token; auth pages bounce visitors who
/// already hold one; admin paths additionally require the admin role.
pub fn decide(path: &str, token: Option<&str>, role: Option<&str>) -> GuardDecision {
    let is_protected = path.starts_with("/dashboard") || path.starts_with("/admin");
    let is_auth_route = path.starts_with("/auth");
    let is_admin_route = path.starts_with("/admin");

    if is_protected && token.is_none() {
        return GuardDecision::ToSignIn;
    }
    if is_auth_route && token.is_some() {
        return GuardDecision::ToHome;
    }
    if is_admin_route && role != Some("admin") {
        return GuardDecision::ToDashboard;
    }
    GuardDecision::Allow
}

/// Extracts a cookie value out of a `document.cookie` string.
pub fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    for pair in cookies.split(';') {
        let pair = pair.trim_start();
        if let Some(rest) = pair.strip_prefix(name) {
            if let Some(value) = rest.strip_prefix('=') {
                return Some(value);
            }
        }
    }
    None
}

/// Reads a cookie from the live document.
pub fn browser_cookie(name: &str) -> Option<String> {
    let cookies = dom::document_cookies()?;
    cookie_value(&cookies, name).map(str::to_string)
}

/// Layout wrapper that applies the guard before rendering its children.
#[component]
pub fn Guarded(children: Element) -> Element {
    let route = use_route::<Route>();
    let path = route.to_string();
    let token = browser_cookie(TOKEN_COOKIE);
    let role = browser_cookie(ROLE_COOKIE);
    let decision = decide(&path, token.as_deref(), role.as_deref());
    let user = use_user_store();

    use_effect(move || {
        let nav = navigator();
        match decision {
            GuardDecision::Allow => {}
            GuardDecision::ToSignIn => {
                nav.replace(Route::SignIn {});
            }
            GuardDecision::ToHome => {
                nav.replace(Route::Home {});
            }
            GuardDecision::ToDashboard => {
                // A non-admin token holder lands on their own dashboard.
                match user.peek().as_ref().map(|u| u.username.clone()) {
                    Some(username) => nav.replace(Route::Profile { username }),
                    None => nav.replace(Route::Home {}),
                };
            }
        }
    });

    if decision == GuardDecision::Allow {
        rsx!({ children })
    } else {
        rsx!()
    }
}
