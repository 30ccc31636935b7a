//! Web dashboard event sink implementation.

use fxdash_core::events::{DashboardEvent, DashboardEventSink};

use crate::events::{EventBus, ServerEvent};

/// Dashboard event sink for the web server runtime.
///
/// Publishing on a broadcast channel never blocks, so `emit` stays cheap
/// even when no client is listening.
pub struct WebDashboardEventSink {
    event_bus: EventBus,
}

impl WebDashboardEventSink {
    pub fn new(event_bus: EventBus) -> Self {
        Self { event_bus }
    }
}

impl DashboardEventSink for WebDashboardEventSink {
    fn emit(&self, event: DashboardEvent) {
        match serde_json::to_value(&event) {
            Ok(payload) => self
                .event_bus
                .publish(ServerEvent::with_payload(event.name(), payload)),
            Err(err) => {
                tracing::warn!("Failed to serialize dashboard event {}: {}", event.name(), err);
                self.event_bus.publish(ServerEvent::new(event.name()));
            }
        }
    }
}
