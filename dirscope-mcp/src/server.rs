//! MCP server handler: registers the dirscope tools and maps registry
//! dispatch onto the protocol. Contains no traversal logic of its own.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, ListToolsResult,
    PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::ErrorData as McpError;
use serde_json::Value;

use dirscope_core::{
    shared_session, IgnoreList, ListStructureTool, ReadFilesTool, ToolRegistry,
};

#[derive(Clone)]
pub struct DirscopeHandler {
    registry: Arc<ToolRegistry>,
}

impl DirscopeHandler {
    /// Builds the tool registry around one shared inspection session. The
    /// session is the ledger both tools thread through: `list_structure`
    /// repopulates it, `read_files` consults it for advisory warnings.
    pub fn new(ignore: IgnoreList) -> Self {
        let ignore = Arc::new(ignore);
        let session = shared_session();
        let registry = ToolRegistry::new(vec![
            Arc::new(ListStructureTool::new(ignore, session.clone())),
            Arc::new(ReadFilesTool::new(session)),
        ]);
        Self {
            registry: Arc::new(registry),
        }
    }
}

impl rmcp::ServerHandler for DirscopeHandler {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "dirscope — bulk file-system inspection.\n\n\
                 Tools:\n\
                 • list_structure — Recursively render a directory tree with file sizes \
                 and empty-state markers; build/VCS clutter is filtered out\n\
                 • read_files — Read many files in one call, with per-file errors\n\n\
                 Call list_structure first to discover paths, then read_files to fetch \
                 contents in bulk."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = self
            .registry
            .definitions()
            .into_iter()
            .map(|def| {
                let schema = match def.input_schema {
                    Value::Object(map) => map,
                    _ => serde_json::Map::new(),
                };
                Tool::new(def.name, def.description, Arc::new(schema))
            })
            .collect();

        Ok(ListToolsResult {
            tools,
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = request
            .arguments
            .map(Value::Object)
            .unwrap_or(Value::Null);

        match self.registry.dispatch(&request.name, arguments).await {
            Ok(output) => {
                let is_error = output.is_error;
                let content: Vec<Content> =
                    output.blocks.into_iter().map(Content::text).collect();
                if is_error {
                    Ok(CallToolResult {
                        content,
                        is_error: Some(true),
                        structured_content: None,
                        meta: None,
                    })
                } else {
                    Ok(CallToolResult::success(content))
                }
            }
            // Dispatch failures (unknown tool, bad arguments) surface as
            // error results rather than protocol errors.
            Err(message) => Ok(CallToolResult {
                content: vec![Content::text(message)],
                is_error: Some(true),
                structured_content: None,
                meta: None,
            }),
        }
    }
}
