//! Core error types for the FX dashboard.
//!
//! Dashboard commands never fail: fetch failures are recovered inside the
//! stores. The only errors left are input validation at the edges.

use thiserror::Error;

/// Root error type for the dashboard core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid currency code '{0}', expected three letters")]
    InvalidCurrencyCode(String),
}
