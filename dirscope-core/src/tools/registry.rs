use crate::tools::r#trait::{SharedTool, ToolOutput, ToolRequest};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, error};

/// Description of one callable tool, handed to the transport layer for call
/// registration.
#[derive(Debug, Clone)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

pub struct ToolRegistry {
    tools: BTreeMap<String, SharedTool>,
}

impl ToolRegistry {
    pub fn new(tools: Vec<SharedTool>) -> Self {
        let mut registry = Self {
            tools: BTreeMap::new(),
        };

        for tool in tools {
            registry.register_tool(tool);
        }

        registry
    }

    pub fn register_tool(&mut self, tool: SharedTool) {
        let name = tool.name().to_string();
        debug!(tool_name = %name, "Registering tool");
        self.tools.insert(name, tool);
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .values()
            .map(|tool| ToolDefinition {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                input_schema: tool.input_schema(),
            })
            .collect()
    }

    pub async fn dispatch(&self, name: &str, arguments: Value) -> Result<ToolOutput, String> {
        let Some(tool) = self.tools.get(name) else {
            let available = self.list_tools().join(", ");
            error!(tool_name = %name, "Unknown tool");
            return Err(format!("Unknown tool: {name}. Available tools: {available}"));
        };

        let request = ToolRequest::new(arguments);
        tool.execute(&request).await.map_err(|e| {
            error!(?e, tool_name = %name, "Tool execution failed");
            format!("Error: {e:#}")
        })
    }

    pub fn list_tools(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }
}
