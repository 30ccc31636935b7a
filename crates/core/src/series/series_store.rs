use fxdash_market_data::SeriesPoint;

use crate::constants::SERIES_ERROR_MESSAGE;
use crate::resource::AsyncResource;

/// Owner of the historical series of the selected currency.
#[derive(Clone, Debug, Default)]
pub struct SeriesStore {
    pub resource: AsyncResource<Vec<SeriesPoint>>,
}

impl SeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.resource.data
    }

    pub fn begin_refresh(&mut self) {
        self.resource.begin();
    }

    /// Stores points exactly as received; the provider already orders them.
    pub fn apply_points(&mut self, points: Vec<SeriesPoint>) {
        self.resource.succeed(points);
    }

    pub fn apply_failure(&mut self) {
        self.resource.fail(SERIES_ERROR_MESSAGE);
    }

    /// Empty series with nothing in flight, used when no code is selected.
    pub fn clear(&mut self) {
        self.resource.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_points_are_not_resorted() {
        let mut store = SeriesStore::new();
        store.begin_refresh();
        let points = vec![
            SeriesPoint::new("2024-05-02", dec!(4.01)),
            SeriesPoint::new("2024-05-01", dec!(4.00)),
        ];
        store.apply_points(points.clone());
        assert_eq!(store.points(), points.as_slice());
    }

    #[test]
    fn test_failure_clears_points() {
        let mut store = SeriesStore::new();
        store.apply_points(vec![SeriesPoint::new("2024-05-01", dec!(4.00))]);
        store.begin_refresh();
        store.apply_failure();
        assert!(store.points().is_empty());
        assert_eq!(
            store.resource.error.as_deref(),
            Some("Historical data is currently unavailable.")
        );
        assert!(!store.resource.loading);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut store = SeriesStore::new();
        store.begin_refresh();
        store.apply_failure();
        store.begin_refresh();
        store.clear();
        assert!(store.points().is_empty());
        assert!(!store.resource.loading);
        assert!(store.resource.error.is_none());
    }
}
