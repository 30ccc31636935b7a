use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Mid-market rate of one currency against the provider's base currency.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rate {
    /// Human readable currency name as published by the provider
    pub currency: String,

    /// ISO 4217 code, unique within one snapshot
    pub code: String,

    /// Average (mid) rate
    pub mid: Decimal,
}

impl Rate {
    pub fn new(currency: impl Into<String>, code: impl Into<String>, mid: Decimal) -> Self {
        Self {
            currency: currency.into(),
            code: code.into(),
            mid,
        }
    }
}

/// One complete rates table, dated by the day it was published for.
///
/// A snapshot replaces the previous one as a whole; it is never merged or
/// partially updated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatesSnapshot {
    /// Publication date (YYYY-MM-DD). Empty when the provider returned no table.
    pub effective_date: String,

    /// Rates in the provider's order
    pub rates: Vec<Rate>,
}

impl RatesSnapshot {
    pub fn new(effective_date: impl Into<String>, rates: Vec<Rate>) -> Self {
        Self {
            effective_date: effective_date.into(),
            rates,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
