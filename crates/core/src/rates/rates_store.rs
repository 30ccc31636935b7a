use fxdash_market_data::{Rate, RatesSnapshot};

use crate::constants::RATES_ERROR_MESSAGE;
use crate::resource::{AsyncResource, Issuance};

/// Owner of the latest rates table.
#[derive(Clone, Debug, Default)]
pub struct RatesStore {
    pub resource: AsyncResource<Vec<Rate>>,
    /// Effective date of the last snapshot that loaded successfully.
    pub last_updated: Option<String>,
    issuance: Issuance,
}

impl RatesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rates(&self) -> &[Rate] {
        &self.resource.data
    }

    /// Starts a refresh and returns its generation.
    pub fn begin_refresh(&mut self) -> u64 {
        self.resource.begin();
        self.issuance.issue()
    }

    /// Whether `generation` is still the most recently issued refresh.
    pub fn is_current(&self, generation: u64) -> bool {
        self.issuance.is_current(generation)
    }

    /// Replaces the table with `snapshot` as a whole.
    pub fn apply_snapshot(&mut self, snapshot: RatesSnapshot) {
        self.last_updated = Some(snapshot.effective_date);
        self.resource.succeed(snapshot.rates);
    }

    pub fn apply_failure(&mut self) {
        self.resource.fail(RATES_ERROR_MESSAGE);
    }
}

/// Chooses the selected code after a new table arrives.
///
/// Keeps `current` when it is still listed, otherwise falls back to the first
/// code in server order. An empty table clears the selection.
pub fn reconcile_selection(rates: &[Rate], current: Option<&str>) -> Option<String> {
    let first = rates.first()?;
    match current {
        Some(code) if rates.iter().any(|rate| rate.code == code) => Some(code.to_string()),
        _ => Some(first.code.clone()),
    }
}
