use std::collections::BTreeSet;

use fxdash_market_data::Rate;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SERIES_LABEL;
use crate::selection::SelectionState;

/// Distinct currency codes, sorted lexicographically.
pub fn available_codes(rates: &[Rate]) -> Vec<String> {
    rates
        .iter()
        .map(|rate| rate.code.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Rates whose `"{code} {currency}"` contains `term`, case-insensitively.
///
/// A blank term returns every rate in its original order.
pub fn filtered_rates(rates: &[Rate], term: &str) -> Vec<Rate> {
    let query = term.trim().to_lowercase();
    if query.is_empty() {
        return rates.to_vec();
    }

    rates
        .iter()
        .filter(|rate| {
            format!("{} {}", rate.code, rate.currency)
                .to_lowercase()
                .contains(&query)
        })
        .cloned()
        .collect()
}

/// The rate matching the selected code, if any.
pub fn selected_currency(rates: &[Rate], selected_code: Option<&str>) -> Option<Rate> {
    let code = selected_code?;
    rates.iter().find(|rate| rate.code == code).cloned()
}

/// Chart caption: `"{currency} ({code})"`, the bare code, or a generic label.
pub fn series_label(selected_currency: Option<&Rate>, selected_code: Option<&str>) -> String {
    match (selected_currency, selected_code) {
        (Some(rate), code) => format!("{} ({})", rate.currency, code.unwrap_or_default()),
        (None, Some(code)) => code.to_string(),
        (None, None) => DEFAULT_SERIES_LABEL.to_string(),
    }
}

/// Values derived from the rates table and the selection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedViews {
    pub available_codes: Vec<String>,
    pub filtered_rates: Vec<Rate>,
    pub selected_currency: Option<Rate>,
    pub series_label: String,
}

impl DerivedViews {
    /// Computes every view from scratch.
    pub fn compute(rates: &[Rate], selection: &SelectionState) -> Self {
        let code = selection.selected_code.as_deref();
        let selected_currency = selected_currency(rates, code);
        Self {
            available_codes: available_codes(rates),
            filtered_rates: filtered_rates(rates, &selection.filter_term),
            series_label: series_label(selected_currency.as_ref(), code),
            selected_currency,
        }
    }
}
