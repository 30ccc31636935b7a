pub mod api;
pub mod config;
mod dashboard_events;
pub mod error;
pub mod events;
mod main_lib;

pub use dashboard_events::WebDashboardEventSink;
pub use main_lib::{build_state, build_state_with_provider, init_tracing, AppState};
