// Brand header + locale switcher (components/app_navbar.rs)
pub mod app_navbar;
pub use app_navbar::AppNavbar;

mod controls;
pub use controls::Controls;

mod empty_state;
pub use empty_state::EmptyState;

mod stats;
pub use stats::StatsCards;
