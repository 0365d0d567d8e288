// Historical price series tool

use super::args::{optional_choice, parse_args, require_symbol};
use super::quote::SYMBOL_DESCRIPTION;
use crate::error::ToolError;
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, json_schema_string, json_schema_string_with_default, Tool};
use findata_sdk::{Interval, MarketData, OutputSize};
use serde::Deserialize;
use std::sync::Arc;

pub const HISTORICAL_DATA_TOOL: &str = "getHistoricalData";

/// Tool to fetch daily, weekly or monthly price history for a stock
pub struct HistoricalDataTool {
    market_data: Arc<dyn MarketData>,
}

impl HistoricalDataTool {
    pub fn new(market_data: Arc<dyn MarketData>) -> Self {
        Self { market_data }
    }
}

#[derive(Debug, Deserialize)]
struct HistoricalDataArgs {
    #[serde(default)]
    symbol: Option<serde_json::Value>,
    #[serde(default)]
    interval: Option<serde_json::Value>,
    #[serde(default)]
    outputsize: Option<serde_json::Value>,
}

#[async_trait::async_trait]
impl Tool for HistoricalDataTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: HISTORICAL_DATA_TOOL.to_string(),
            description: "Get historical data for a stock.".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "symbol": json_schema_string(SYMBOL_DESCRIPTION),
                    "interval": json_schema_string_with_default(
                        "The time interval for the data (daily, weekly, or monthly)",
                        Interval::default().as_str(),
                    ),
                    "outputsize": json_schema_string_with_default(
                        "The size of the output (compact or full)",
                        OutputSize::default().as_str(),
                    )
                }),
                vec!["symbol"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult, ToolError> {
        let args: HistoricalDataArgs = parse_args(HISTORICAL_DATA_TOOL, arguments)?;

        let interval: Interval =
            optional_choice(args.interval.as_ref()).map_err(ToolError::InvalidInterval)?;

        // Weekly and monthly series have no size knob; ignore whatever was sent
        let output_size: OutputSize = match interval {
            Interval::Daily => {
                optional_choice(args.outputsize.as_ref()).map_err(ToolError::InvalidOutputSize)?
            }
            Interval::Weekly | Interval::Monthly => OutputSize::default(),
        };

        let symbol = require_symbol(args.symbol.as_ref())?;

        let series = self
            .market_data
            .historical(&symbol, interval, output_size)
            .await?;
        Ok(CallToolResult::text(serde_json::to_string(&series)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, RecordingMarketData};
    use serde_json::json;

    fn tool_with(provider: &Arc<RecordingMarketData>) -> HistoricalDataTool {
        HistoricalDataTool::new(provider.clone())
    }

    #[test]
    fn test_schema() {
        let schema = tool_with(&RecordingMarketData::returning(json!({}))).schema();

        assert_eq!(schema.name, "getHistoricalData");
        assert_eq!(schema.description, "Get historical data for a stock.");

        assert_eq!(
            schema.input_schema,
            json!({
                "type": "object",
                "properties": {
                    "symbol": {
                        "type": "string",
                        "description": "The stock symbol (e.g., AAPL)"
                    },
                    "interval": {
                        "type": "string",
                        "description": "The time interval for the data (daily, weekly, or monthly)",
                        "default": "daily"
                    },
                    "outputsize": {
                        "type": "string",
                        "description": "The size of the output (compact or full)",
                        "default": "compact"
                    }
                },
                "required": ["symbol"]
            })
        );
    }

    #[tokio::test]
    async fn test_defaults_to_daily_compact() {
        let provider = RecordingMarketData::returning(json!({ "ok": 1 }));

        let result = tool_with(&provider)
            .execute(json!({ "symbol": "AAPL" }))
            .await
            .unwrap();

        assert_eq!(result.first_text(), Some(r#"{"ok":1}"#));
        assert_eq!(
            provider.calls(),
            vec![Call::Historical("AAPL".to_string(), Interval::Daily, OutputSize::Compact)]
        );
    }

    #[tokio::test]
    async fn test_daily_full() {
        let provider = RecordingMarketData::returning(json!({}));

        tool_with(&provider)
            .execute(json!({ "symbol": "AAPL", "interval": "daily", "outputsize": "full" }))
            .await
            .unwrap();

        assert_eq!(
            provider.calls(),
            vec![Call::Historical("AAPL".to_string(), Interval::Daily, OutputSize::Full)]
        );
    }

    #[tokio::test]
    async fn test_monthly_ignores_bad_output_size() {
        let provider = RecordingMarketData::returning(json!({}));

        tool_with(&provider)
            .execute(json!({ "symbol": "AAPL", "interval": "monthly", "outputsize": "huge" }))
            .await
            .unwrap();

        assert_eq!(
            provider.calls(),
            vec![Call::Historical("AAPL".to_string(), Interval::Monthly, OutputSize::Compact)]
        );
    }

    #[tokio::test]
    async fn test_invalid_output_size_on_daily() {
        let provider = RecordingMarketData::returning(json!({}));

        let err = tool_with(&provider)
            .execute(json!({ "symbol": "AAPL", "outputsize": "huge" }))
            .await
            .unwrap_err();

        assert!(matches!(err, ToolError::InvalidOutputSize(ref v) if v == "huge"));
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_non_string_interval_is_invalid() {
        let provider = RecordingMarketData::returning(json!({}));

        let err = tool_with(&provider)
            .execute(json!({ "symbol": "AAPL", "interval": 5 }))
            .await
            .unwrap_err();

        assert!(matches!(err, ToolError::InvalidInterval(_)));
        assert!(provider.calls().is_empty());
    }
}
