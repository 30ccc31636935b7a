use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single day of a historical rate series.
///
/// Series are ordered by `date` ascending; consumers rely on that order
/// and never re-sort.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    /// Publication date (YYYY-MM-DD)
    pub date: String,

    /// Average (mid) rate on that date
    pub mid: Decimal,
}

impl SeriesPoint {
    pub fn new(date: impl Into<String>, mid: Decimal) -> Self {
        Self {
            date: date.into(),
            mid,
        }
    }
}
