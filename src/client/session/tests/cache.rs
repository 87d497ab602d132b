//! Tests for the session cache TTL behavior.

use crate::client::session::{SessionCache, SESSION_TTL_MS};

/// A fresh cache has no answer, so the first check must hit the network.
#[test]
fn fresh_cache_has_no_answer() {
    let cache = SessionCache::default();
    assert_eq!(cache.cached(0.0), None);
}

/// A second check within the TTL reuses the recorded answer, so two checks
/// within 60 seconds issue at most one network call.
#[test]
fn second_check_within_ttl_uses_cache() {
    let mut cache = SessionCache::default();
    cache.record(true, 1_000.0);
    assert_eq!(cache.cached(1_000.0 + SESSION_TTL_MS - 1.0), Some(true));
}

/// A check at or past the TTL boundary requires a new network call.
#[test]
fn check_after_ttl_requires_refresh() {
    let mut cache = SessionCache::default();
    cache.record(true, 1_000.0);
    assert_eq!(cache.cached(1_000.0 + SESSION_TTL_MS), None);
}

/// A negative answer is cached the same way as a positive one.
#[test]
fn caches_logged_out_answer() {
    let mut cache = SessionCache::default();
    cache.record(false, 5_000.0);
    assert_eq!(cache.cached(5_500.0), Some(false));
}

/// Re-recording refreshes the TTL window.
#[test]
fn record_refreshes_window() {
    let mut cache = SessionCache::default();
    cache.record(true, 0.0);
    cache.record(true, SESSION_TTL_MS);
    assert_eq!(cache.cached(SESSION_TTL_MS + 1.0), Some(true));
}
