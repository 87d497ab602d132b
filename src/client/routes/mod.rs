pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod home;
mod not_found;

pub use home::Home;
pub use not_found::NotFound;
