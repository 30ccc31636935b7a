//! Dashboard event sink trait and implementations.

use std::sync::{Arc, Mutex, PoisonError};

use super::DashboardEvent;

/// Trait for receiving dashboard events.
///
/// # Design Rules
///
/// - `emit()` must be fast and non-blocking (no network calls)
/// - Failure to emit must not affect dashboard state (best-effort)
pub trait DashboardEventSink: Send + Sync {
    /// Emit a single dashboard event.
    fn emit(&self, event: DashboardEvent);

    /// Emit multiple dashboard events.
    ///
    /// Default implementation calls `emit()` for each event.
    fn emit_batch(&self, events: Vec<DashboardEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// No-op implementation for contexts that don't need events.
#[derive(Clone, Default)]
pub struct NoOpDashboardEventSink;

impl DashboardEventSink for NoOpDashboardEventSink {
    fn emit(&self, _event: DashboardEvent) {}
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockDashboardEventSink {
    events: Arc<Mutex<Vec<DashboardEvent>>>,
}

impl MockDashboardEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<DashboardEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DashboardEventSink for MockDashboardEventSink {
    fn emit(&self, event: DashboardEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
