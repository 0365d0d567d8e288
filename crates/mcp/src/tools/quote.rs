// Stock quote tool

use super::args::{parse_args, require_symbol};
use crate::error::ToolError;
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, json_schema_string, Tool};
use findata_sdk::MarketData;
use serde::Deserialize;
use std::sync::Arc;

pub const STOCK_QUOTE_TOOL: &str = "getStockQuote";

pub(crate) const SYMBOL_DESCRIPTION: &str = "The stock symbol (e.g., AAPL)";

/// Tool to fetch the current quote for a stock
pub struct StockQuoteTool {
    market_data: Arc<dyn MarketData>,
}

impl StockQuoteTool {
    pub fn new(market_data: Arc<dyn MarketData>) -> Self {
        Self { market_data }
    }
}

#[derive(Debug, Deserialize)]
struct StockQuoteArgs {
    #[serde(default)]
    symbol: Option<serde_json::Value>,
}

#[async_trait::async_trait]
impl Tool for StockQuoteTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: STOCK_QUOTE_TOOL.to_string(),
            description: "Get the current quote for a stock.".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "symbol": json_schema_string(SYMBOL_DESCRIPTION)
                }),
                vec!["symbol"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult, ToolError> {
        let args: StockQuoteArgs = parse_args(STOCK_QUOTE_TOOL, arguments)?;
        let symbol = require_symbol(args.symbol.as_ref())?;

        let quote = self.market_data.quote(&symbol).await?;
        Ok(CallToolResult::text(serde_json::to_string(&quote)?))
    }
}
