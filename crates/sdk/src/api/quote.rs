//! Quote endpoint.

use super::validate_symbol;
use crate::client::AlphaVantageClient;
use crate::error::AlphaVantageResult;
use serde_json::Value;

/// Quote API for the latest price of a symbol.
pub struct QuoteApi<'a> {
    client: &'a AlphaVantageClient,
}

impl<'a> QuoteApi<'a> {
    pub(crate) fn new(client: &'a AlphaVantageClient) -> Self {
        Self { client }
    }

    /// Fetch the `GLOBAL_QUOTE` payload for a symbol.
    pub async fn global(&self, symbol: &str) -> AlphaVantageResult<Value> {
        let symbol = validate_symbol(symbol)?;
        self.client
            .http
            .query(&[("function", "GLOBAL_QUOTE"), ("symbol", symbol)])
            .await
    }
}
