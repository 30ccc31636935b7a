use fxdash_market_data::{Rate, SeriesPoint};
use serde::{Deserialize, Serialize};

use crate::resource::AsyncResource;
use crate::selection::SelectionState;
use crate::series::SeriesPhase;
use crate::views::DerivedViews;

/// Read-only snapshot of everything the dashboard shows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub rates: AsyncResource<Vec<Rate>>,
    /// Effective date of the rates table currently shown.
    pub last_updated: Option<String>,
    pub series: AsyncResource<Vec<SeriesPoint>>,
    pub series_phase: SeriesPhase,
    pub selection: SelectionState,
    pub views: DerivedViews,
}
