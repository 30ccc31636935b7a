use serde::{Deserialize, Serialize};

use super::date_range::DateRange;
use crate::errors::ValidationError;

/// User-controlled parameters of the dashboard.
///
/// Owned by the dashboard controller; derived views only read it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    pub selected_code: Option<String>,
    pub filter_term: String,
    pub date_range: DateRange,
    /// Bumped on every manual refresh; never decreases.
    pub refresh_token: u64,
}

impl SelectionState {
    pub fn new(date_range: DateRange) -> Self {
        Self {
            selected_code: None,
            filter_term: String::new(),
            date_range,
            refresh_token: 0,
        }
    }

    /// The composite dependency key of the historical series.
    pub fn series_key(&self) -> SeriesKey {
        SeriesKey {
            code: self.selected_code.clone(),
            date_range: self.date_range.clone(),
            refresh_token: self.refresh_token,
        }
    }
}

/// Everything the historical series depends on.
///
/// Any difference between two keys requires a new series fetch.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesKey {
    pub code: Option<String>,
    pub date_range: DateRange,
    pub refresh_token: u64,
}

/// Checks that a code looks like an ISO 4217 code (three ASCII letters).
pub fn validate_currency_code(code: &str) -> Result<(), ValidationError> {
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCurrencyCode(code.to_string()))
    }
}
