// MCP tool trait and registry

use crate::error::ToolError;
use crate::protocol::{CallToolResult, ToolSchema};
use std::sync::Arc;

/// Tool executor trait
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool schema for MCP
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with given arguments (always a JSON object)
    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult, ToolError>;
}

/// Tool registry for managing available tools
///
/// Listing order is registration order.
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool, replacing any tool of the same name in place
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.schema().name;
        match self.tools.iter().position(|t| t.schema().name == name) {
            Some(index) => self.tools[index] = tool,
            None => self.tools.push(tool),
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.schema().name == name).cloned()
    }

    /// List all tool schemas
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        self.tools.iter().map(|t| t.schema()).collect()
    }

    /// Check if a tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions for creating tool schemas

pub fn json_schema_object(properties: serde_json::Value, required: Vec<&str>) -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "description": description
    })
}

/// String property with a documented default
pub fn json_schema_string_with_default(description: &str, default: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "description": description,
        "default": default
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoTool {
        name: &'static str,
        reply: &'static str,
    }

    #[async_trait::async_trait]
    impl Tool for EchoTool {
        fn schema(&self) -> ToolSchema {
            ToolSchema {
                name: self.name.to_string(),
                description: "echo".to_string(),
                input_schema: json_schema_object(serde_json::json!({}), vec![]),
            }
        }

        async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult, ToolError> {
            Ok(CallToolResult::text(self.reply))
        }
    }

    #[test]
    fn test_registration_order_is_listing_order() {
        let mut registry = ToolRegistry::new();
        for name in ["zulu", "alpha", "mike"] {
            registry.register(Arc::new(EchoTool { name, reply: "" }));
        }

        let names: Vec<String> = registry.list_schemas().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["zulu", "alpha", "mike"]);
    }

    #[tokio::test]
    async fn test_register_replaces_in_place() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool { name: "a", reply: "first" }));
        registry.register(Arc::new(EchoTool { name: "b", reply: "b" }));
        registry.register(Arc::new(EchoTool { name: "a", reply: "second" }));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.list_schemas()[0].name, "a");

        let result = registry
            .get("a")
            .unwrap()
            .execute(serde_json::json!({}))
            .await
            .unwrap();
        assert_eq!(result.first_text(), Some("second"));
    }

    #[test]
    fn test_lookup() {
        let mut registry = ToolRegistry::new();
        assert!(registry.is_empty());

        registry.register(Arc::new(EchoTool { name: "a", reply: "" }));
        assert!(registry.contains("a"));
        assert!(!registry.contains("A"));
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_string_with_default_schema() {
        let schema = json_schema_string_with_default("size", "compact");
        assert_eq!(
            schema,
            serde_json::json!({ "type": "string", "description": "size", "default": "compact" })
        );
        assert!(schema.get("enum").is_none());
    }
}
