//! Rates provider trait definitions.
//!
//! This module defines the `RatesProvider` trait that every source of
//! exchange-rate tables must implement.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{RatesSnapshot, SeriesPoint};

/// Trait for exchange-rate data providers.
///
/// Implementations own transport, decoding, timeouts and retries. Callers
/// only see the decoded result or a [`MarketDataError`].
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use fxdash_market_data::{MarketDataError, RatesProvider, RatesSnapshot, SeriesPoint};
///
/// struct FixedProvider;
///
/// #[async_trait]
/// impl RatesProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn fetch_latest_table(&self) -> Result<RatesSnapshot, MarketDataError> {
///         Ok(RatesSnapshot::default())
///     }
///
///     async fn fetch_series(
///         &self,
///         _code: &str,
///         _start: &str,
///         _end: &str,
///     ) -> Result<Vec<SeriesPoint>, MarketDataError> {
///         Ok(Vec::new())
///     }
/// }
/// ```
#[async_trait]
pub trait RatesProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Fetch the most recently published rates table.
    async fn fetch_latest_table(&self) -> Result<RatesSnapshot, MarketDataError>;

    /// Fetch the historical mid rates of one currency.
    ///
    /// # Arguments
    ///
    /// * `code` - ISO 4217 currency code
    /// * `start` - First day of the range (YYYY-MM-DD, inclusive)
    /// * `end` - Last day of the range (YYYY-MM-DD, inclusive), `start <= end`
    ///
    /// # Returns
    ///
    /// Points ordered by date ascending.
    async fn fetch_series(
        &self,
        code: &str,
        start: &str,
        end: &str,
    ) -> Result<Vec<SeriesPoint>, MarketDataError>;
}
