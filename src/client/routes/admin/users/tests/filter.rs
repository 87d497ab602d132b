//! Tests for the user table's text filter.

use crate::client::routes::admin::users::filter_users;
use crate::model::user::AdminUser;

fn user(uuid: &str, username: &str, email: &str, role: &str) -> AdminUser {
    AdminUser {
        uuid: uuid.to_string(),
        username: username.to_string(),
        email: email.to_string(),
        role: role.to_string(),
    }
}

fn usernames(users: &[AdminUser]) -> Vec<&str> {
    users.iter().map(|u| u.username.as_str()).collect()
}

/// An empty query keeps every user, in listing order.
#[test]
fn empty_query_keeps_everything() {
    let users = vec![
        user("a", "sara", "sara@example.com", "admin"),
        user("b", "omar", "omar@example.com", "user"),
    ];
    assert_eq!(usernames(&filter_users(&users, "")), vec!["sara", "omar"]);
}

/// Matching is case-insensitive over the username.
#[test]
fn matches_username_case_insensitively() {
    let users = vec![
        user("a", "Sara", "sara@example.com", "admin"),
        user("b", "omar", "omar@example.com", "user"),
    ];
    assert_eq!(usernames(&filter_users(&users, "SARA")), vec!["Sara"]);
}

/// Email and role are searched too.
#[test]
fn matches_email_and_role() {
    let users = vec![
        user("a", "sara", "sara@example.com", "admin"),
        user("b", "omar", "omar@other.net", "user"),
    ];
    assert_eq!(usernames(&filter_users(&users, "other.net")), vec!["omar"]);
    assert_eq!(usernames(&filter_users(&users, "admin")), vec!["sara"]);
}

/// A query matching nothing yields an empty list.
#[test]
fn no_match_yields_empty() {
    let users = vec![user("a", "sara", "sara@example.com", "admin")];
    assert!(filter_users(&users, "zzz").is_empty());
}
