//! Tests for the route-guard decision table.

use crate::client::guard::{decide, GuardDecision};

const TOKEN: Option<&str> = Some("tok");

/// A dashboard path without a token redirects to sign-in.
#[test]
fn dashboard_without_token_goes_to_sign_in() {
    assert_eq!(decide("/dashboard/lina", None, None), GuardDecision::ToSignIn);
}

/// An admin path without a token also redirects to sign-in, regardless of
/// any role cookie.
#[test]
fn admin_without_token_goes_to_sign_in() {
    assert_eq!(
        decide("/admin/users", None, Some("admin")),
        GuardDecision::ToSignIn
    );
}

/// Auth pages bounce visitors who already hold a token back home.
#[test]
fn auth_route_with_token_goes_home() {
    assert_eq!(decide("/auth/signin", TOKEN, None), GuardDecision::ToHome);
    assert_eq!(
        decide("/auth/signup", TOKEN, Some("admin")),
        GuardDecision::ToHome
    );
}

/// Auth pages are open to visitors without a token.
#[test]
fn auth_route_without_token_is_allowed() {
    assert_eq!(decide("/auth/signin", None, None), GuardDecision::Allow);
}

/// Admin paths require the admin role; other token holders are sent to
/// their dashboard.
#[test]
fn admin_route_without_admin_role_goes_to_dashboard() {
    assert_eq!(
        decide("/admin/users", TOKEN, Some("user")),
        GuardDecision::ToDashboard
    );
    assert_eq!(decide("/admin", TOKEN, None), GuardDecision::ToDashboard);
}

/// An admin with both cookies is allowed through.
#[test]
fn admin_with_role_is_allowed() {
    assert_eq!(
        decide("/admin/manageevents", TOKEN, Some("admin")),
        GuardDecision::Allow
    );
}

/// Dashboard paths only need a token, not a role.
#[test]
fn dashboard_with_token_is_allowed() {
    assert_eq!(decide("/dashboard/lina", TOKEN, None), GuardDecision::Allow);
}

/// Public paths are always allowed.
#[test]
fn public_paths_are_allowed() {
    assert_eq!(decide("/", None, None), GuardDecision::Allow);
    assert_eq!(decide("/", TOKEN, Some("admin")), GuardDecision::Allow);
}
