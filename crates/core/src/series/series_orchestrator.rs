//! Dependency state machine of the historical series.
//!
//! Every change of the [`SeriesKey`] supersedes whatever fetch is in flight.
//! The machine has three phases:
//!
//! - **Idle**: no code selected, the series is empty and nothing is fetched.
//! - **Pending**: a fetch for the latest key is in flight.
//! - **Settled**: the fetch for the latest key completed (success or error).
//!
//! There is no real cancellation. A superseded fetch still completes, but
//! its ticket no longer matches and its outcome is dropped.

use fxdash_market_data::{MarketDataError, SeriesPoint};
use serde::{Deserialize, Serialize};

use super::series_store::SeriesStore;
use crate::resource::Issuance;
use crate::selection::SeriesKey;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesPhase {
    #[default]
    Idle,
    Pending,
    Settled,
}

/// Captures the key a fetch was issued for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesTicket {
    pub generation: u64,
    pub key: SeriesKey,
    /// The key's code; always present for an issued fetch.
    pub code: String,
}

impl SeriesTicket {
    pub fn start(&self) -> &str {
        &self.key.date_range.start
    }

    pub fn end(&self) -> &str {
        &self.key.date_range.end
    }
}

/// What the orchestrator decided for a new key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeriesPlan {
    /// No code: the series was cleared and no fetch is needed.
    Idle,
    /// Fetch for this ticket.
    Fetch(SeriesTicket),
}

/// Result of handing a completed fetch back to the orchestrator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleOutcome {
    Loaded,
    Failed,
    /// The ticket was superseded; nothing changed.
    Discarded,
}

#[derive(Clone, Debug, Default)]
pub struct SeriesOrchestrator {
    issuance: Issuance,
    latest: Option<SeriesTicket>,
    phase: SeriesPhase,
}

impl SeriesOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SeriesPhase {
        self.phase
    }

    /// Key of the fetch currently considered authoritative.
    pub fn latest_key(&self) -> Option<&SeriesKey> {
        self.latest.as_ref().map(|ticket| &ticket.key)
    }

    /// Reacts to a new dependency key.
    ///
    /// Always bumps the generation so an in-flight fetch for an older key
    /// can no longer apply, even when the new key has no code.
    pub fn on_key_change(&mut self, key: SeriesKey, store: &mut SeriesStore) -> SeriesPlan {
        let generation = self.issuance.issue();

        match key.code.clone() {
            None => {
                self.latest = None;
                self.phase = SeriesPhase::Idle;
                store.clear();
                SeriesPlan::Idle
            }
            Some(code) => {
                let ticket = SeriesTicket {
                    generation,
                    key,
                    code,
                };
                self.latest = Some(ticket.clone());
                self.phase = SeriesPhase::Pending;
                store.begin_refresh();
                SeriesPlan::Fetch(ticket)
            }
        }
    }

    /// Whether `ticket` is the latest issued one.
    pub fn accepts(&self, ticket: &SeriesTicket) -> bool {
        self.issuance.is_current(ticket.generation) && self.latest.as_ref() == Some(ticket)
    }

    /// Applies the outcome of the fetch issued for `ticket`, unless superseded.
    pub fn settle(
        &mut self,
        ticket: &SeriesTicket,
        outcome: Result<Vec<SeriesPoint>, MarketDataError>,
        store: &mut SeriesStore,
    ) -> SettleOutcome {
        if !self.accepts(ticket) {
            return SettleOutcome::Discarded;
        }

        self.phase = SeriesPhase::Settled;
        match outcome {
            Ok(points) => {
                store.apply_points(points);
                SettleOutcome::Loaded
            }
            Err(_) => {
                store.apply_failure();
                SettleOutcome::Failed
            }
        }
    }
}
