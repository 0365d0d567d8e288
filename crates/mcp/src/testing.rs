// In-memory market data provider for tests

use findata_sdk::{AlphaVantageError, AlphaVantageResult, Interval, MarketData, OutputSize};
use serde_json::Value;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Quote(String),
    Historical(String, Interval, OutputSize),
}

enum Reply {
    Data(Value),
    Fail(fn() -> AlphaVantageError),
}

/// Records every lookup and answers each with the same canned reply
pub struct RecordingMarketData {
    reply: Reply,
    calls: Mutex<Vec<Call>>,
}

impl RecordingMarketData {
    pub fn returning(payload: Value) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Data(payload),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(make_error: fn() -> AlphaVantageError) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Fail(make_error),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, call: Call) -> AlphaVantageResult<Value> {
        self.calls.lock().unwrap().push(call);
        match &self.reply {
            Reply::Data(payload) => Ok(payload.clone()),
            Reply::Fail(make_error) => Err(make_error()),
        }
    }
}

#[async_trait::async_trait]
impl MarketData for RecordingMarketData {
    async fn quote(&self, symbol: &str) -> AlphaVantageResult<Value> {
        self.answer(Call::Quote(symbol.to_string()))
    }

    async fn historical(
        &self,
        symbol: &str,
        interval: Interval,
        output_size: OutputSize,
    ) -> AlphaVantageResult<Value> {
        self.answer(Call::Historical(symbol.to_string(), interval, output_size))
    }
}
