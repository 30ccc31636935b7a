//! Series module - historical series state and the orchestrator that keeps it
//! in step with the selection.

mod series_orchestrator;
mod series_store;

pub use series_orchestrator::{
    SeriesOrchestrator, SeriesPhase, SeriesPlan, SeriesTicket, SettleOutcome,
};
pub use series_store::SeriesStore;
