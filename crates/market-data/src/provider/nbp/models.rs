//! NBP Web API response models.
//!
//! Only the fields the dashboard consumes are mapped; serde ignores the rest
//! (`table`, `no`, ...).

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{Rate, SeriesPoint};

/// One exchange-rate table from `/exchangerates/tables/A`.
///
/// The endpoint answers with an array of tables; the latest one is first.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NbpTable {
    pub effective_date: String,
    #[serde(default)]
    pub rates: Vec<NbpTableRate>,
}

#[derive(Debug, Deserialize)]
pub struct NbpTableRate {
    pub currency: String,
    pub code: String,
    pub mid: Decimal,
}

impl From<NbpTableRate> for Rate {
    fn from(rate: NbpTableRate) -> Self {
        Rate::new(rate.currency, rate.code, rate.mid)
    }
}

/// Response from `/exchangerates/rates/A/{code}/{start}/{end}/`.
#[derive(Debug, Deserialize)]
pub struct NbpSeriesResponse {
    #[serde(default)]
    pub rates: Vec<NbpSeriesRate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NbpSeriesRate {
    pub effective_date: String,
    pub mid: Decimal,
}

impl From<NbpSeriesRate> for SeriesPoint {
    fn from(rate: NbpSeriesRate) -> Self {
        SeriesPoint::new(rate.effective_date, rate.mid)
    }
}
