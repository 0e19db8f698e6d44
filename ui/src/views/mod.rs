mod dashboard;
pub use dashboard::{use_dashboard_state, DashboardState, DashboardView};
