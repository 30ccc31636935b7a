//! Market data models
//!
//! - `rate` - Current rates table (Rate, RatesSnapshot)
//! - `series` - Historical series data (SeriesPoint)

mod rate;
mod series;

pub use rate::{Rate, RatesSnapshot};
pub use series::SeriesPoint;
