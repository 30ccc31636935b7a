//! Derived-view engine: pure projections of the rates table and selection.

mod derived_views;

pub use derived_views::{
    available_codes, filtered_rates, selected_currency, series_label, DerivedViews,
};
