//! Selection module - user-chosen code, filter, date range and refresh token.

mod date_range;
mod selection_model;

pub use date_range::{normalize, parse_iso_date, DateRange};
pub use selection_model::{validate_currency_code, SelectionState, SeriesKey};
