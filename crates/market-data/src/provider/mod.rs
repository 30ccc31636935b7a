//! Rates provider abstractions and implementations.
//!
//! This module contains:
//! - The `RatesProvider` trait that all providers implement
//! - The National Bank of Poland (NBP) provider
//!
//! The dashboard core only depends on the trait; the concrete provider is
//! chosen by the composition root.

mod traits;

pub mod nbp;

pub use traits::RatesProvider;
