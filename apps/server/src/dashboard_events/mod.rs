//! Dashboard events bridge for the web server.
//!
//! Forwards every dashboard event to the [`EventBus`](crate::events::EventBus),
//! which fans them out to SSE clients.

mod sink;

pub use sink::WebDashboardEventSink;
