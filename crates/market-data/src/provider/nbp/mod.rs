//! National Bank of Poland (NBP) exchange-rate provider.
//!
//! Reads the average rates of table A:
//! - latest table via `/exchangerates/tables/A`
//! - per-currency history via `/exchangerates/rates/A/{code}/{start}/{end}/`
//!
//! The API is public and needs no key. It answers 404 when a range contains
//! no publication day and caps history requests at 367 days.
//! API documentation: https://api.nbp.pl/en.html

mod models;

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::errors::{MarketDataError, RetryClass};
use crate::models::{RatesSnapshot, SeriesPoint};
use crate::provider::RatesProvider;

use self::models::{NbpSeriesResponse, NbpTable};

/// Default base URL of the NBP Web API.
pub const DEFAULT_BASE_URL: &str = "https://api.nbp.pl/api";

const PROVIDER_ID: &str = "NBP";

/// Longest range (in days, inclusive) the series endpoint accepts.
const MAX_SERIES_DAYS: i64 = 367;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Connection and retry settings for [`NbpProvider`].
#[derive(Clone, Debug)]
pub struct NbpConfig {
    /// Base URL without trailing slash, e.g. `https://api.nbp.pl/api`.
    pub base_url: String,

    /// Per-request timeout.
    pub timeout: Duration,

    /// Retries after the first attempt for transient failures.
    pub max_retries: u32,

    /// Delay before the first retry; doubled on every further attempt.
    pub base_backoff: Duration,
}

impl Default for NbpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 2,
            base_backoff: Duration::from_millis(250),
        }
    }
}

/// NBP table A provider.
///
/// # Example
///
/// ```ignore
/// use fxdash_market_data::provider::nbp::NbpProvider;
///
/// let provider = NbpProvider::new();
/// let snapshot = provider.fetch_latest_table().await?;
/// ```
pub struct NbpProvider {
    client: Client,
    config: NbpConfig,
}

impl NbpProvider {
    /// Create a provider against the public NBP endpoint.
    pub fn new() -> Self {
        Self::with_config(NbpConfig::default())
    }

    /// Create a provider with custom base URL, timeout and retry settings.
    pub fn with_config(mut config: NbpConfig) -> Self {
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    pub fn config(&self) -> &NbpConfig {
        &self.config
    }

    fn latest_table_url(&self) -> String {
        format!(
            "{}/exchangerates/tables/A?format=json",
            self.config.base_url
        )
    }

    fn series_url(&self, code: &str, start: &str, end: &str) -> String {
        format!(
            "{}/exchangerates/rates/A/{}/{}/{}/?format=json",
            self.config.base_url, code, start, end
        )
    }

    /// Perform a single GET and return the body of a successful response.
    async fn fetch(&self, url: &str) -> Result<String, MarketDataError> {
        debug!("NBP request: {}", url);

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MarketDataError::Timeout {
                        provider: PROVIDER_ID.to_string(),
                    }
                } else {
                    MarketDataError::Network(e)
                }
            })?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(MarketDataError::NoDataForRange);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !status.is_success() {
            return Err(MarketDataError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(MarketDataError::Network)
    }

    /// GET with exponential backoff for transient failures.
    async fn fetch_with_retry(&self, url: &str) -> Result<String, MarketDataError> {
        let mut attempt: u32 = 0;
        loop {
            match self.fetch(url).await {
                Ok(body) => return Ok(body),
                Err(err)
                    if err.retry_class() == RetryClass::WithBackoff
                        && attempt < self.config.max_retries =>
                {
                    let delay = self.config.base_backoff * 2u32.saturating_pow(attempt);
                    warn!(
                        "NBP request failed ({}), retrying in {:?} (attempt {}/{})",
                        err,
                        delay,
                        attempt + 1,
                        self.config.max_retries
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

impl Default for NbpProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode the latest-table payload. An empty array is an empty snapshot.
fn parse_latest_table(body: &str) -> Result<RatesSnapshot, MarketDataError> {
    let tables: Vec<NbpTable> = serde_json::from_str(body)?;
    Ok(match tables.into_iter().next() {
        Some(table) => RatesSnapshot::new(
            table.effective_date,
            table.rates.into_iter().map(Into::into).collect(),
        ),
        None => RatesSnapshot::default(),
    })
}

/// Decode a series payload, keeping the order the API returned.
fn parse_series(body: &str) -> Result<Vec<SeriesPoint>, MarketDataError> {
    let response: NbpSeriesResponse = serde_json::from_str(body)?;
    Ok(response.rates.into_iter().map(Into::into).collect())
}

fn parse_date(value: &str) -> Result<NaiveDate, MarketDataError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| MarketDataError::InvalidRequest(format!("'{}' is not a YYYY-MM-DD date", value)))
}

/// Reject requests NBP would refuse anyway, before spending a round trip.
fn validate_series_request(code: &str, start: &str, end: &str) -> Result<(), MarketDataError> {
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(MarketDataError::InvalidRequest(format!(
            "'{}' is not a three-letter currency code",
            code
        )));
    }

    let start_date = parse_date(start)?;
    let end_date = parse_date(end)?;
    if start_date > end_date {
        return Err(MarketDataError::InvalidRequest(format!(
            "range start {} is after end {}",
            start, end
        )));
    }

    let days = (end_date - start_date).num_days() + 1;
    if days > MAX_SERIES_DAYS {
        return Err(MarketDataError::InvalidRequest(format!(
            "range of {} days exceeds the {} day limit",
            days, MAX_SERIES_DAYS
        )));
    }

    Ok(())
}

#[async_trait]
impl RatesProvider for NbpProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_latest_table(&self) -> Result<RatesSnapshot, MarketDataError> {
        let body = self.fetch_with_retry(&self.latest_table_url()).await?;
        let snapshot = parse_latest_table(&body)?;
        debug!(
            "NBP table for {} with {} rates",
            snapshot.effective_date,
            snapshot.rates.len()
        );
        Ok(snapshot)
    }

    async fn fetch_series(
        &self,
        code: &str,
        start: &str,
        end: &str,
    ) -> Result<Vec<SeriesPoint>, MarketDataError> {
        validate_series_request(code, start, end)?;
        let body = self
            .fetch_with_retry(&self.series_url(code, start, end))
            .await?;
        parse_series(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::models::Rate;
    use rust_decimal_macros::dec;

    const TABLE_BODY: &str = r#"[
        {
            "table": "A",
            "no": "084/A/NBP/2024",
            "effectiveDate": "2024-05-01",
            "rates": [
                {"currency": "dolar amerykański", "code": "USD", "mid": 4.0341},
                {"currency": "euro", "code": "EUR", "mid": 4.3213}
            ]
        }
    ]"#;

    const SERIES_BODY: &str = r#"{
        "table": "A",
        "currency": "dolar amerykański",
        "code": "USD",
        "rates": [
            {"no": "082/A/NBP/2024", "effectiveDate": "2024-04-29", "mid": 4.0512},
            {"no": "083/A/NBP/2024", "effectiveDate": "2024-04-30", "mid": 4.0478},
            {"no": "084/A/NBP/2024", "effectiveDate": "2024-05-01", "mid": 4.0341}
        ]
    }"#;

    #[test]
    fn test_parse_latest_table() {
        let snapshot = parse_latest_table(TABLE_BODY).unwrap();
        assert_eq!(snapshot.effective_date, "2024-05-01");
        assert_eq!(
            snapshot.rates,
            vec![
                Rate::new("dolar amerykański", "USD", dec!(4.0341)),
                Rate::new("euro", "EUR", dec!(4.3213)),
            ]
        );
    }

    #[test]
    fn test_parse_empty_table_list_is_empty_snapshot() {
        let snapshot = parse_latest_table("[]").unwrap();
        assert_eq!(snapshot.effective_date, "");
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_parse_series_keeps_order() {
        let points = parse_series(SERIES_BODY).unwrap();
        let dates: Vec<&str> = points.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-04-29", "2024-04-30", "2024-05-01"]);
        assert_eq!(points[2].mid, dec!(4.0341));
    }

    #[test]
    fn test_malformed_payload_is_decode_error() {
        let err = parse_series(r#"{"rates": "nope"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);

        let err = parse_latest_table("<html>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_validate_series_request() {
        assert!(validate_series_request("USD", "2024-04-01", "2024-04-30").is_ok());
        assert!(validate_series_request("USD", "2024-04-30", "2024-04-30").is_ok());

        assert!(matches!(
            validate_series_request("US", "2024-04-01", "2024-04-30"),
            Err(MarketDataError::InvalidRequest(_))
        ));
        assert!(matches!(
            validate_series_request("U$D", "2024-04-01", "2024-04-30"),
            Err(MarketDataError::InvalidRequest(_))
        ));
        assert!(matches!(
            validate_series_request("USD", "2024-05-01", "2024-04-30"),
            Err(MarketDataError::InvalidRequest(_))
        ));
        assert!(matches!(
            validate_series_request("USD", "", "2024-04-30"),
            Err(MarketDataError::InvalidRequest(_))
        ));
        assert!(matches!(
            validate_series_request("USD", "2023-01-01", "2024-04-30"),
            Err(MarketDataError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_urls_strip_trailing_slash() {
        let provider = NbpProvider::with_config(NbpConfig {
            base_url: "http://localhost:9000/api/".to_string(),
            ..NbpConfig::default()
        });
        assert_eq!(
            provider.latest_table_url(),
            "http://localhost:9000/api/exchangerates/tables/A?format=json"
        );
        assert_eq!(
            provider.series_url("EUR", "2024-04-01", "2024-04-30"),
            "http://localhost:9000/api/exchangerates/rates/A/EUR/2024-04-01/2024-04-30/?format=json"
        );
    }

    #[test]
    fn test_provider_id() {
        assert_eq!(NbpProvider::new().id(), "NBP");
    }

    #[tokio::test]
    async fn test_invalid_series_request_fails_without_io() {
        // Unroutable base URL: reaching the network would surface a Network error instead.
        let provider = NbpProvider::with_config(NbpConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            max_retries: 0,
            ..NbpConfig::default()
        });
        let err = provider
            .fetch_series("USD", "2024-05-02", "2024-05-01")
            .await
            .unwrap_err();
        assert!(matches!(err, MarketDataError::InvalidRequest(_)));
    }
}
