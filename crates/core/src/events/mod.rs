//! Dashboard events module.
//!
//! Provides the event types and the sink trait the dashboard emits through
//! after its state changes. Runtime adapters implement the sink to forward
//! events to their own transport.

mod dashboard_event;
mod sink;

pub use dashboard_event::*;
pub use sink::*;
