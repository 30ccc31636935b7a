use std::sync::Arc;

use crate::{config::Config, dashboard_events::WebDashboardEventSink, events::EventBus};
use fxdash_core::{Dashboard, DashboardServiceTrait};
use fxdash_market_data::{NbpConfig, NbpProvider, RatesProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub dashboard: Arc<dyn DashboardServiceTrait>,
    pub event_bus: EventBus,
}

pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if config.json_logs {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Builds the application state around the NBP provider.
pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = NbpProvider::with_config(NbpConfig {
        base_url: config.nbp_base_url.clone(),
        timeout: config.provider_timeout,
        max_retries: config.provider_max_retries,
        ..NbpConfig::default()
    });
    tracing::info!(
        "Using {} rates provider at {}",
        provider.id(),
        provider.config().base_url
    );
    Ok(build_state_with_provider(config, Arc::new(provider)))
}

/// Builds the application state around any rates provider.
pub fn build_state_with_provider(
    config: &Config,
    provider: Arc<dyn RatesProvider>,
) -> Arc<AppState> {
    let event_bus = EventBus::new(256);
    let event_sink = Arc::new(WebDashboardEventSink::new(event_bus.clone()));
    let dashboard = Dashboard::with_history_days(provider, config.history_days)
        .with_event_sink(event_sink);
    tracing::info!(
        "Dashboard range {:?}",
        dashboard.view().selection.date_range
    );

    Arc::new(AppState {
        dashboard: Arc::new(dashboard),
        event_bus,
    })
}
