//! Error types for nbp-invest

use std::path::PathBuf;
use thiserror::Error;

use crate::currency::Currency;

/// Main error type for nbp-invest
#[derive(Error, Debug)]
pub enum InvestError {
    /// Input that does not parse (malformed date or number)
    #[error("{0}")]
    InputFormat(String),

    /// Input that parses but violates a constraint (date too recent,
    /// percentages out of range or not summing to 1.0)
    #[error("{0}")]
    InputConstraint(String),

    #[error("HTTP client error: {0}")]
    Http(String),

    /// Network failure, non-success status or undecodable body
    #[error("Rate fetch failed for {currency}: {message}")]
    RateFetch { currency: Currency, message: String },

    /// Fetched but unusable rate data (empty series, non-positive mid rate)
    #[error("Rate data error for {currency}: {message}")]
    RateData { currency: Currency, message: String },

    #[error("Export to {} failed: {message}", path.display())]
    Export { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type alias for nbp-invest operations
pub type Result<T> = std::result::Result<T, InvestError>;
