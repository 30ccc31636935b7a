//! FX Dashboard Core - reactive state controller for the FX dashboard.
//!
//! This crate owns every piece of dashboard state: the latest rates table,
//! the selected currency's historical series, the user's selection and the
//! views derived from them. Rates are fetched through the
//! [`fxdash_market_data::RatesProvider`] trait, so the crate itself does no
//! I/O and carries no UI concerns.

pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod events;
pub mod rates;
pub mod reactive;
pub mod resource;
pub mod selection;
pub mod series;
pub mod views;

pub use dashboard::{Dashboard, DashboardServiceTrait, DashboardView, Settlement};

pub use errors::{Error, ValidationError};
