pub mod carousel;
pub mod dashboard_sidebar;
pub mod event_details;
pub mod footer;
pub mod layout;
pub mod navbar;
pub mod page;
pub mod preferences_drawer;
pub mod search_header;
pub mod sidebar;
pub mod soon_event;

pub use carousel::EventsCarousel;
pub use dashboard_sidebar::DashboardSidebar;
pub use event_details::EventDetailsDrawer;
pub use footer::Footer;
pub use navbar::Navbar;
pub use page::Page;
pub use preferences_drawer::PreferencesDrawer;
pub use search_header::SearchHeader;
pub use sidebar::AdminSidebar;
pub use soon_event::SoonEvent;
