use super::dashboard_model::DashboardView;
use super::dashboard_service::Settlement;
use crate::selection::DateRange;

/// Trait defining the contract for dashboard operations.
///
/// Commands apply their state change before returning. The returned
/// [`Settlement`] drives the fetches the change issued; await it to observe
/// their outcome or spawn it to let them finish in the background.
pub trait DashboardServiceTrait: Send + Sync {
    fn view(&self) -> DashboardView;
    fn subscribe(&self) -> tokio::sync::watch::Receiver<DashboardView>;

    fn select_code(&self, code: Option<String>) -> Settlement;
    fn set_filter(&self, term: String) -> Settlement;
    fn set_date_range(&self, range: DateRange) -> Settlement;
    fn trigger_manual_refresh(&self) -> Settlement;
    fn refresh_latest(&self) -> Settlement;
}
