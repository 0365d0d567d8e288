mod args;
pub mod historical;
pub mod quote;
mod registry;

pub use historical::{HistoricalDataTool, HISTORICAL_DATA_TOOL};
pub use quote::{StockQuoteTool, STOCK_QUOTE_TOOL};
pub use registry::{
    json_schema_object, json_schema_string, json_schema_string_with_default, Tool, ToolRegistry,
};

use findata_sdk::MarketData;
use std::sync::Arc;

/// The fixed tool catalog, in listing order.
pub fn catalog(market_data: Arc<dyn MarketData>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(StockQuoteTool::new(market_data.clone())));
    registry.register(Arc::new(HistoricalDataTool::new(market_data)));
    registry
}
