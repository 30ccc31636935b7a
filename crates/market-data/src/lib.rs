//! FX Dashboard Market Data Crate
//!
//! This crate provides the data-access side of the dashboard: the rate
//! models, the provider trait and the National Bank of Poland provider.
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |  Dashboard core  | --> |  RatesProvider   |  (trait seam)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   NbpProvider    |  (HTTP + JSON, retries)
//!                          +------------------+
//!                                  |
//!                                  v
//!                     +--------------------------+
//!                     | RatesSnapshot / Series   |  (decoded models)
//!                     +--------------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Rate`] - Mid rate of one currency
//! - [`RatesSnapshot`] - One complete, dated rates table
//! - [`SeriesPoint`] - One day of a historical series
//! - [`MarketDataError`] - Failures, classified by [`ErrorKind`] and [`RetryClass`]

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::{ErrorKind, MarketDataError, RetryClass};
pub use models::{Rate, RatesSnapshot, SeriesPoint};
pub use provider::nbp::{NbpConfig, NbpProvider};
pub use provider::RatesProvider;
