//! The signed-in user's profile, shared through context.
//!
//! This is the explicit replacement for the original ambient cross-tab
//! "storage changed" signaling: components subscribe to one context signal,
//! and every writer also persists the localStorage blob (fixed key, last
//! writer wins) so reloads rehydrate.

use dioxus::prelude::*;

use crate::client::util::dom;
use crate::model::user::UserProfile;

pub const STORAGE_KEY: &str = "user";

pub type UserStore = Signal<Option<UserProfile>>;

/// Provides the store at the app shell, hydrated from localStorage.
pub fn provide_user_store() -> UserStore {
    use_context_provider(|| Signal::new(load_profile()))
}

pub fn use_user_store() -> UserStore {
    use_context::<UserStore>()
}

/// Stores a signed-in profile: updates subscribers and the persisted blob.
pub fn remember_user(mut store: UserStore, profile: UserProfile) {
    persist_profile(&profile);
    store.set(Some(profile));
}

/// Clears the signed-in profile on logout.
pub fn forget_user(mut store: UserStore) {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
    store.set(None);
}

pub fn load_profile() -> Option<UserProfile> {
    let storage = dom::local_storage()?;
    let raw = storage.get_item(STORAGE_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

fn persist_profile(profile: &UserProfile) {
    let Some(storage) = dom::local_storage() else {
        return;
    };
    if let Ok(raw) = serde_json::to_string(profile) {
        let _ = storage.set_item(STORAGE_KEY, &raw);
    }
}
