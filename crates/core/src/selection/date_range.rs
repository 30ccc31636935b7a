//! Date range model and normalizer.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::DATE_FORMAT;
use crate::errors::ValidationError;

/// Inclusive range of ISO dates (YYYY-MM-DD).
///
/// Fields are kept as strings: ISO dates order lexicographically the same
/// way they order chronologically, and an empty field means "not provided".
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Window of `days` calendar days ending on `today`, both ends included.
    ///
    /// `trailing_days(2024-05-30, 30)` spans `2024-05-01..=2024-05-30`.
    pub fn trailing_days(today: NaiveDate, days: i64) -> Self {
        let start = today - Duration::days(days.max(1) - 1);
        Self::from_dates(start, today)
    }

    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: start.format(DATE_FORMAT).to_string(),
            end: end.format(DATE_FORMAT).to_string(),
        }
    }

    /// Checks that every non-empty field is a valid ISO date.
    ///
    /// Empty fields are allowed; [`normalize`] fills them from the previous range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for value in [&self.start, &self.end] {
            if !value.is_empty() {
                parse_iso_date(value)?;
            }
        }
        Ok(())
    }
}

/// Parses a zero-padded YYYY-MM-DD date.
///
/// chrono also accepts unpadded fields (`2024-1-5`); those are rejected so
/// that string order stays chronological order.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FORMAT).to_string() == value)
        .ok_or_else(|| ValidationError::InvalidDate(value.to_string()))
}

/// Normalizes a user-supplied range against the range currently in effect.
///
/// - An empty end falls back to the corresponding end of `previous`.
/// - Reversed ends are swapped, so the result is ordered whenever both
///   ends are present.
///
/// Pure and infallible. The result has both ends non-empty whenever
/// `previous` does.
pub fn normalize(candidate: &DateRange, previous: &DateRange) -> DateRange {
    let mut start = if candidate.start.is_empty() {
        previous.start.clone()
    } else {
        candidate.start.clone()
    };
    let mut end = if candidate.end.is_empty() {
        previous.end.clone()
    } else {
        candidate.end.clone()
    };

    if !start.is_empty() && !end.is_empty() && start > end {
        std::mem::swap(&mut start, &mut end);
    }

    DateRange { start, end }
}
