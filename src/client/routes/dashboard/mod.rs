mod booked_events;
mod profile;

pub use booked_events::BookedEvents;
pub use profile::Profile;
