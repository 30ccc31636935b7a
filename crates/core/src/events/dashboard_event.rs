//! Dashboard event types.

use serde::{Deserialize, Serialize};

/// Facts about the dashboard's lifecycle, emitted after state changes.
///
/// Events are informational. Nothing in the dashboard reads them back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashboardEvent {
    /// A latest-rates refresh was issued.
    RatesRequested,

    /// The latest rates table was replaced.
    RatesLoaded { effective_date: String, count: usize },

    /// The latest-rates refresh failed; the table was cleared.
    RatesFailed { message: String },

    /// A superseded latest-rates refresh completed and was ignored.
    RatesDiscarded,

    /// The selected currency changed, by command or after a new table.
    SelectionChanged { code: Option<String> },

    /// A series fetch was issued for the given key.
    SeriesRequested {
        code: String,
        start: String,
        end: String,
    },

    SeriesLoaded { code: String, points: usize },

    SeriesFailed { code: String, message: String },

    /// A superseded series fetch completed and was ignored.
    SeriesDiscarded { code: String },

    /// No currency is selected; the series was emptied.
    SeriesCleared,
}

impl DashboardEvent {
    pub fn rates_loaded(effective_date: impl Into<String>, count: usize) -> Self {
        Self::RatesLoaded {
            effective_date: effective_date.into(),
            count,
        }
    }

    pub fn rates_failed(message: impl Into<String>) -> Self {
        Self::RatesFailed {
            message: message.into(),
        }
    }

    pub fn selection_changed(code: Option<String>) -> Self {
        Self::SelectionChanged { code }
    }

    pub fn series_requested(
        code: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self::SeriesRequested {
            code: code.into(),
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn series_loaded(code: impl Into<String>, points: usize) -> Self {
        Self::SeriesLoaded {
            code: code.into(),
            points,
        }
    }

    pub fn series_failed(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SeriesFailed {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn series_discarded(code: impl Into<String>) -> Self {
        Self::SeriesDiscarded { code: code.into() }
    }

    /// Stable event name, used as the SSE event type.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RatesRequested => "rates_requested",
            Self::RatesLoaded { .. } => "rates_loaded",
            Self::RatesFailed { .. } => "rates_failed",
            Self::RatesDiscarded => "rates_discarded",
            Self::SelectionChanged { .. } => "selection_changed",
            Self::SeriesRequested { .. } => "series_requested",
            Self::SeriesLoaded { .. } => "series_loaded",
            Self::SeriesFailed { .. } => "series_failed",
            Self::SeriesDiscarded { .. } => "series_discarded",
            Self::SeriesCleared => "series_cleared",
        }
    }
}
