//! Provider abstraction consumed by tool implementations.

use crate::client::AlphaVantageClient;
use crate::error::AlphaVantageResult;
use crate::types::{Interval, OutputSize};
use serde_json::Value;

/// Source of raw market data payloads.
///
/// Implementations return the provider's response unmodified and perform
/// exactly one remote lookup per call.
#[async_trait::async_trait]
pub trait MarketData: Send + Sync {
    /// Latest quote for `symbol`.
    async fn quote(&self, symbol: &str) -> AlphaVantageResult<Value>;

    /// Historical series for `symbol`. `output_size` only applies to [`Interval::Daily`].
    async fn historical(
        &self,
        symbol: &str,
        interval: Interval,
        output_size: OutputSize,
    ) -> AlphaVantageResult<Value>;
}

#[async_trait::async_trait]
impl MarketData for AlphaVantageClient {
    async fn quote(&self, symbol: &str) -> AlphaVantageResult<Value> {
        self.quotes().global(symbol).await
    }

    async fn historical(
        &self,
        symbol: &str,
        interval: Interval,
        output_size: OutputSize,
    ) -> AlphaVantageResult<Value> {
        self.time_series().get(symbol, interval, output_size).await
    }
}
