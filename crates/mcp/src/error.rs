// Tool execution errors

use crate::protocol::CallToolResult;
use findata_sdk::{AlphaVantageError, ErrorKind};

/// Why a tool call did not produce data.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Unknown tool")]
    UnknownTool(String),

    #[error("Invalid interval. Please specify 'daily', 'weekly', or 'monthly'.")]
    InvalidInterval(String),

    #[error("Invalid outputsize. Please specify 'compact' or 'full'.")]
    InvalidOutputSize(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error(transparent)]
    Provider(#[from] AlphaVantageError),

    #[error("Failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownTool(_)
            | Self::InvalidInterval(_)
            | Self::InvalidOutputSize(_)
            | Self::InvalidArguments(_) => ErrorKind::Validation,
            Self::Provider(e) => e.kind(),
            Self::Serialization(_) => ErrorKind::Unknown,
        }
    }

    /// Render as a tool result.
    ///
    /// Rejections with a fixed message are shown verbatim; everything else
    /// is prefixed with `Error: `.
    pub fn into_result(self) -> CallToolResult {
        match self {
            Self::UnknownTool(_) | Self::InvalidInterval(_) | Self::InvalidOutputSize(_) => {
                CallToolResult::rejection(self.to_string())
            }
            _ => CallToolResult::error(self.to_string()),
        }
    }
}
