use crate::ignore::IgnoreList;
use crate::path::normalize;
use crate::session::SharedSession;
use crate::tools::r#trait::{ToolExecutor, ToolOutput, ToolRequest};
use crate::tree::format_tree;
use crate::walker;
use anyhow::Result;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

/// Recursive directory enumeration as one bulk call. Resets and repopulates
/// the session ledger as a side effect.
pub struct ListStructureTool {
    ignore: Arc<IgnoreList>,
    session: SharedSession,
}

impl ListStructureTool {
    pub fn new(ignore: Arc<IgnoreList>, session: SharedSession) -> Self {
        Self { ignore, session }
    }
}

#[async_trait::async_trait]
impl ToolExecutor for ListStructureTool {
    fn name(&self) -> &'static str {
        "list_structure"
    }

    fn description(&self) -> &'static str {
        "Recursively list the structure of a directory as an indented tree, \
         with file sizes and empty-state markers. Build artifacts and VCS \
         directories are excluded by the active ignore patterns."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "dir": {
                    "type": "string",
                    "description": "Directory to inspect. Defaults to the server's working directory."
                },
            },
            "required": []
        })
    }

    async fn execute(&self, request: &ToolRequest) -> Result<ToolOutput> {
        let dir_arg = request.arguments.get("dir").and_then(|v| v.as_str());
        let raw = match dir_arg {
            Some(dir) if !dir.is_empty() => dir.to_string(),
            _ => match std::env::current_dir() {
                Ok(cwd) => cwd.to_string_lossy().into_owned(),
                Err(error) => {
                    return Ok(ToolOutput::error(format!(
                        "Failed to resolve the working directory: {error}"
                    )))
                }
            },
        };

        let root = normalize(&raw);
        info!(requested = %raw, root = %root.display(), "Listing directory structure");

        match walker::walk(&root, &self.ignore, &self.session).await {
            Ok(tree) => Ok(ToolOutput::text(format!(
                "Directory structure for {}:\n\n{}",
                root.display(),
                format_tree(&tree)
            ))),
            // The error block carries the original, unresolved input.
            Err(error) => Ok(ToolOutput::error(format!(
                "Failed to list directory structure for {raw}: {error:#}"
            ))),
        }
    }
}
