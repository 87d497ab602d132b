//! Tests for cookie-string parsing.

use crate::client::guard::cookie_value;

/// Finds a cookie in a multi-cookie string.
#[test]
fn finds_cookie_among_many() {
    let cookies = "theme=dark; auth_token=abc123; user_role=admin";
    assert_eq!(cookie_value(cookies, "auth_token"), Some("abc123"));
    assert_eq!(cookie_value(cookies, "user_role"), Some("admin"));
}

/// Missing cookies yield None.
#[test]
fn missing_cookie_is_none() {
    assert_eq!(cookie_value("theme=dark", "auth_token"), None);
    assert_eq!(cookie_value("", "auth_token"), None);
}

/// A name that is a prefix of another cookie's name does not match it.
#[test]
fn prefix_names_do_not_collide() {
    let cookies = "auth_token_backup=old; auth_token=new";
    assert_eq!(cookie_value(cookies, "auth_token"), Some("new"));
}

/// Empty values are still present.
#[test]
fn empty_value_is_present() {
    assert_eq!(cookie_value("auth_token=", "auth_token"), Some(""));
}
