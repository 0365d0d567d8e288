// Routes tool calls to the registered tools

use crate::error::ToolError;
use crate::protocol::{CallToolParams, CallToolResult, ToolSchema};
use crate::tools::{self, ToolRegistry};
use findata_sdk::MarketData;
use std::sync::Arc;
use tracing::{debug, warn};

/// Stateless front door for `tools/call`.
///
/// Every call ends in a [`CallToolResult`]; failures are reported through
/// `is_error` and never escape as errors.
pub struct Dispatcher {
    registry: ToolRegistry,
}

impl Dispatcher {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Dispatcher over the standard quote and historical data tools.
    pub fn with_market_data(market_data: Arc<dyn MarketData>) -> Self {
        Self::new(tools::catalog(market_data))
    }

    pub fn list_tools(&self) -> Vec<ToolSchema> {
        self.registry.list_schemas()
    }

    pub async fn handle(&self, params: CallToolParams) -> CallToolResult {
        let CallToolParams { name, arguments } = params;
        debug!(tool = %name, "Dispatching tool call");

        let outcome = match self.registry.get(&name) {
            Some(tool) => tool.execute(normalize_arguments(arguments)).await,
            None => Err(ToolError::UnknownTool(name.clone())),
        };

        match outcome {
            Ok(result) => result,
            Err(e) => {
                warn!(tool = %name, kind = %e.kind(), error = %e, "Tool call failed");
                e.into_result()
            }
        }
    }
}

// Anything but an object counts as "no arguments"
fn normalize_arguments(arguments: serde_json::Value) -> serde_json::Value {
    if arguments.is_object() {
        arguments
    } else {
        serde_json::Value::Object(serde_json::Map::new())
    }
}
