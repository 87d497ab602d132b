pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod guard;
pub mod router;
pub mod routes;
pub mod session;
pub mod store;
pub mod toast;
pub mod util;

pub use app::App;
