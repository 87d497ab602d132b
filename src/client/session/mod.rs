//! Session oracle: a cached answer to "is the current visitor signed in".
//!
//! `check_session` asks the API at most once per [`SESSION_TTL_MS`]; any
//! failure is swallowed and reported as "not signed in". `extend_session`
//! bypasses the read cache and is throttled by its caller through
//! [`ActivityDebounce`]: each qualifying user event re-arms a single pending
//! timer, and only the task holding the latest generation fires the renewal.

#[cfg(test)]
mod tests;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::api::{self, ApiError};
use crate::client::config::ApiConfig;
use crate::model::api::SessionResponse;

/// How long a cached session answer stays valid.
pub const SESSION_TTL_MS: f64 = 60_000.0;

/// Quiet period after the last user activity before the session is extended.
pub const EXTEND_DEBOUNCE_MS: u32 = 300_000;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionCache {
    status: Option<bool>,
    last_checked_ms: f64,
}

impl SessionCache {
    /// The cached status, if it is still within the TTL.
    pub fn cached(&self, now_ms: f64) -> Option<bool> {
        self.status
            .filter(|_| now_ms - self.last_checked_ms < SESSION_TTL_MS)
    }

    pub fn record(&mut self, logged_in: bool, now_ms: f64) {
        self.status = Some(logged_in);
        self.last_checked_ms = now_ms;
    }
}

/// Debounce for session renewal on user activity. Each activity event bumps
/// the generation; a pending renewal only fires if its generation is still
/// the latest when its timer elapses.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActivityDebounce {
    generation: u64,
}

impl ActivityDebounce {
    pub fn bump(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

/// Whether the visitor is currently authenticated. Failures are logged and
/// surfaced as `false`; no retry.
pub async fn check_session(config: &ApiConfig, mut cache: Signal<SessionCache>) -> bool {
    let now = js_sys::Date::now();
    if let Some(status) = cache.peek().cached(now) {
        return status;
    }

    match fetch_session_status(config, false).await {
        Ok(logged_in) => {
            cache.write().record(logged_in, now);
            logged_in
        }
        Err(err) => {
            tracing::error!("session check failed: {err}");
            false
        }
    }
}

/// Asks the API to renew the session. Bypasses the read cache but refreshes
/// it on success; failures are logged and otherwise ignored.
pub async fn extend_session(config: &ApiConfig, mut cache: Signal<SessionCache>) {
    match fetch_session_status(config, true).await {
        Ok(logged_in) => {
            cache.write().record(logged_in, js_sys::Date::now());
            tracing::debug!("session extended, logged_in={logged_in}");
        }
        Err(err) => {
            tracing::error!("session extension failed: {err}");
        }
    }
}

async fn fetch_session_status(config: &ApiConfig, renew: bool) -> Result<bool, ApiError> {
    let url = config.endpoint("routes/auth/check_session.php");
    let body = if renew {
        api::post_empty(&url).await?
    } else {
        api::get_text(&url).await?
    };
    let parsed: SessionResponse = serde_json::from_str(&body).map_err(|_| ApiError::Malformed)?;
    Ok(parsed.logged_in)
}
