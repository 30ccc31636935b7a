//! Rates module - the latest rates table and its refresh lifecycle.

mod rates_store;

pub use rates_store::{reconcile_selection, RatesStore};
