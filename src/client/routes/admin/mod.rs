mod add_event;
mod edit_event;
pub mod manage_events;
mod users;

pub use add_event::AddEvent;
pub use edit_event::EditEvent;
pub use manage_events::ManageEvents;
pub use users::ManageUsers;

use dioxus::prelude::*;

use crate::client::router::Route;

/// The console has no landing content of its own; the index forwards to the
/// user table.
#[component]
pub fn AdminHome() -> Element {
    use_effect(|| {
        navigator().replace(Route::ManageUsers {});
    });

    rsx!()
}
