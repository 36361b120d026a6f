pub mod auth_store;
pub mod dashboard_store;

pub use auth_store::{AuthAction, AuthStore};
pub use dashboard_store::{DashboardAction, DashboardStore};
