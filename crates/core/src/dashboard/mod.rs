//! Dashboard module - the controller that owns all dashboard state.

mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;


pub use dashboard_model::DashboardView;
pub use dashboard_service::{Dashboard, Settlement};
pub use dashboard_traits::DashboardServiceTrait;
