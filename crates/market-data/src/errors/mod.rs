//! Error types and retry classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all rate fetching operations
//! - [`ErrorKind`]: The transport/decode split callers use for logging
//! - [`RetryClass`]: Classification for determining retry behavior

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

/// Coarse taxonomy of provider failures.
///
/// Consumers collapse every failure into a single user-facing message; the
/// kind only exists so logs can tell network trouble from bad payloads.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Network, HTTP status or request-level failure.
    Transport,
    /// The response arrived but could not be decoded.
    Decode,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport => write!(f, "transport"),
            Self::Decode => write!(f, "decode"),
        }
    }
}

/// Errors that can occur while fetching rate tables or rate series.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The request parameters were rejected before any I/O happened.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The provider has no rates for the requested code and date range.
    /// NBP answers 404 for ranges that only span non-publication days.
    #[error("No data for date range")]
    NoDataForRange,

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider answered with an unexpected HTTP status.
    #[error("HTTP {status} from {url}")]
    HttpStatus {
        /// Response status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("Decode error: {message}")]
    Decode {
        /// Description of the decoding failure
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns whether this is a transport or a decode failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Network(err) if err.is_decode() => ErrorKind::Decode,
            _ => ErrorKind::Transport,
        }
    }

    /// Returns the retry classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use fxdash_market_data::errors::{MarketDataError, RetryClass};
    ///
    /// let error = MarketDataError::RateLimited { provider: "NBP".to_string() };
    /// assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    ///
    /// let error = MarketDataError::NoDataForRange;
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Self::InvalidRequest(_) | Self::NoDataForRange | Self::Decode { .. } => {
                RetryClass::Never
            }

            Self::RateLimited { .. } | Self::Timeout { .. } => RetryClass::WithBackoff,

            Self::HttpStatus { status, .. } if *status >= 500 => RetryClass::WithBackoff,
            Self::HttpStatus { .. } => RetryClass::Never,

            Self::Network(err) if err.is_timeout() || err.is_connect() => RetryClass::WithBackoff,
            Self::Network(_) => RetryClass::Never,
        }
    }
}

impl From<serde_json::Error> for MarketDataError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_never_retries() {
        let error = MarketDataError::InvalidRequest("bad code".to_string());
        assert_eq!(error.retry_class(), RetryClass::Never);
        assert_eq!(error.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_no_data_for_range_never_retries() {
        assert_eq!(
            MarketDataError::NoDataForRange.retry_class(),
            RetryClass::Never
        );
    }

    #[test]
    fn test_rate_limited_and_timeout_retry_with_backoff() {
        let limited = MarketDataError::RateLimited {
            provider: "NBP".to_string(),
        };
        let timeout = MarketDataError::Timeout {
            provider: "NBP".to_string(),
        };
        assert_eq!(limited.retry_class(), RetryClass::WithBackoff);
        assert_eq!(timeout.retry_class(), RetryClass::WithBackoff);
    }

    #[test]
    fn test_server_errors_retry_client_errors_do_not() {
        let server = MarketDataError::HttpStatus {
            status: 503,
            url: "https://api.nbp.pl/api".to_string(),
        };
        let client = MarketDataError::HttpStatus {
            status: 400,
            url: "https://api.nbp.pl/api".to_string(),
        };
        assert_eq!(server.retry_class(), RetryClass::WithBackoff);
        assert_eq!(client.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_json_errors_become_decode_errors() {
        let err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let error = MarketDataError::from(err);
        assert_eq!(error.kind(), ErrorKind::Decode);
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_error_display() {
        let error = MarketDataError::HttpStatus {
            status: 500,
            url: "https://example.test/x".to_string(),
        };
        assert_eq!(format!("{}", error), "HTTP 500 from https://example.test/x");

        let error = MarketDataError::Decode {
            message: "missing field `rates`".to_string(),
        };
        assert_eq!(format!("{}", error), "Decode error: missing field `rates`");
    }
}
