//! Endpoint groups exposed by the client.

pub mod quote;
pub mod time_series;

pub use quote::QuoteApi;
pub use time_series::TimeSeriesApi;

use crate::error::{AlphaVantageError, AlphaVantageResult};

/// Reject blank symbols before any request is made.
///
/// Non-blank symbols are passed to the provider exactly as given.
pub(crate) fn validate_symbol(symbol: &str) -> AlphaVantageResult<&str> {
    if symbol.trim().is_empty() {
        return Err(AlphaVantageError::InvalidInput(
            "symbol must not be empty".to_string(),
        ));
    }
    Ok(symbol)
}
