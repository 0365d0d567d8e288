//! Historical price series endpoints.

use super::validate_symbol;
use crate::client::AlphaVantageClient;
use crate::error::AlphaVantageResult;
use crate::types::{Interval, OutputSize};
use serde_json::Value;

/// Time series API for daily, weekly and monthly history.
pub struct TimeSeriesApi<'a> {
    client: &'a AlphaVantageClient,
}

impl<'a> TimeSeriesApi<'a> {
    pub(crate) fn new(client: &'a AlphaVantageClient) -> Self {
        Self { client }
    }

    /// Fetch the daily series.
    pub async fn daily(&self, symbol: &str, output_size: OutputSize) -> AlphaVantageResult<Value> {
        let symbol = validate_symbol(symbol)?;
        self.client
            .http
            .query(&[
                ("function", Interval::Daily.function()),
                ("symbol", symbol),
                ("outputsize", output_size.as_str()),
            ])
            .await
    }

    /// Fetch the weekly series.
    pub async fn weekly(&self, symbol: &str) -> AlphaVantageResult<Value> {
        self.without_output_size(Interval::Weekly, symbol).await
    }

    /// Fetch the monthly series.
    pub async fn monthly(&self, symbol: &str) -> AlphaVantageResult<Value> {
        self.without_output_size(Interval::Monthly, symbol).await
    }

    /// Fetch the series for `interval`. `output_size` only applies to daily data.
    pub async fn get(
        &self,
        symbol: &str,
        interval: Interval,
        output_size: OutputSize,
    ) -> AlphaVantageResult<Value> {
        match interval {
            Interval::Daily => self.daily(symbol, output_size).await,
            Interval::Weekly => self.weekly(symbol).await,
            Interval::Monthly => self.monthly(symbol).await,
        }
    }

    async fn without_output_size(
        &self,
        interval: Interval,
        symbol: &str,
    ) -> AlphaVantageResult<Value> {
        let symbol = validate_symbol(symbol)?;
        self.client
            .http
            .query(&[("function", interval.function()), ("symbol", symbol)])
            .await
    }
}
