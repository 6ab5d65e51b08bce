use anyhow::Result;
use serde_json::Value;
use std::sync::Arc;

/// Request passed to tool execution
#[derive(Debug, Clone)]
pub struct ToolRequest {
    /// The arguments for the tool
    pub arguments: Value,
}

impl ToolRequest {
    pub fn new(arguments: Value) -> Self {
        Self { arguments }
    }
}

/// Result from tool execution: an ordered list of text blocks plus an error
/// flag. Transport-agnostic - the MCP layer maps blocks onto content items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub blocks: Vec<String>,
    pub is_error: bool,
}

impl ToolOutput {
    /// A successful single-block response
    pub fn text(block: impl Into<String>) -> Self {
        Self {
            blocks: vec![block.into()],
            is_error: false,
        }
    }

    /// A whole-operation failure carried as one error block
    pub fn error(block: impl Into<String>) -> Self {
        Self {
            blocks: vec![block.into()],
            is_error: true,
        }
    }

    /// A multi-block response where failures, if any, are embedded per block
    pub fn blocks(blocks: Vec<String>) -> Self {
        Self {
            blocks,
            is_error: false,
        }
    }
}

#[async_trait::async_trait]
pub trait ToolExecutor: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn input_schema(&self) -> Value;

    async fn execute(&self, request: &ToolRequest) -> Result<ToolOutput>;
}

pub type SharedTool = Arc<dyn ToolExecutor>;
