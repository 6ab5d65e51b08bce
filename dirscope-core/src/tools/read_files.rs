use crate::reader::{self, FileReadResult};
use crate::session::SharedSession;
use crate::tools::r#trait::{ToolExecutor, ToolOutput, ToolRequest};
use crate::tree::EMPTY_FILE_SUFFIX;
use anyhow::{bail, Result};
use serde_json::{json, Value};
use tracing::info;

/// Multi-file content retrieval as one bulk call. Failures are embedded per
/// file; the overall response is never flagged as an error.
pub struct ReadFilesTool {
    session: SharedSession,
}

impl ReadFilesTool {
    pub fn new(session: SharedSession) -> Self {
        Self { session }
    }
}

#[async_trait::async_trait]
impl ToolExecutor for ReadFilesTool {
    fn name(&self) -> &'static str {
        "read_files"
    }

    fn description(&self) -> &'static str {
        "Read the contents of one or more files in a single call. Returns one \
         block per requested path; unreadable paths produce per-file errors \
         without affecting the rest of the batch."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "files": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Paths of the files to read, in the order results should be returned."
                },
            },
            "required": ["files"]
        })
    }

    async fn execute(&self, request: &ToolRequest) -> Result<ToolOutput> {
        let Some(files) = request.arguments.get("files").and_then(|v| v.as_array()) else {
            bail!("Missing required parameter: files");
        };

        let mut paths = Vec::with_capacity(files.len());
        for file in files {
            let Some(path) = file.as_str() else {
                bail!("Parameter 'files' must be an array of strings");
            };
            paths.push(path.to_string());
        }

        info!(count = paths.len(), "Reading file batch");
        let results = reader::read_many(&paths, &self.session).await;

        let blocks = results
            .into_iter()
            .map(|result| match result {
                FileReadResult::Content { path, content } => {
                    format!("File: {}\nContent:\n{}", path.display(), content)
                }
                FileReadResult::Empty { path } => {
                    format!("File: {}\nContent: {EMPTY_FILE_SUFFIX}", path.display())
                }
                FileReadResult::Failed { original, message } => {
                    format!("File: {original}\nError: {message}")
                }
            })
            .collect();

        Ok(ToolOutput::blocks(blocks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::shared_session;
    use serde_json::json;
    use std::fs as std_fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn mixed_batch_embeds_per_file_errors() {
        let temp = tempdir().unwrap();
        let good = temp.path().join("good.txt");
        std_fs::write(&good, "hello").unwrap();
        let missing = temp.path().join("missing.txt");

        let tool = ReadFilesTool::new(shared_session());
        let request = ToolRequest::new(json!({
            "files": [good.to_string_lossy(), missing.to_string_lossy()]
        }));
        let output = tool.execute(&request).await.unwrap();

        // Individual failures never set the top-level error flag.
        assert!(!output.is_error);
        assert_eq!(output.blocks.len(), 2);
        assert_eq!(
            output.blocks[0],
            format!("File: {}\nContent:\nhello", good.display())
        );
        assert!(output.blocks[1].starts_with(&format!("File: {}\nError: ", missing.display())));
    }

    #[tokio::test]
    async fn empty_files_get_the_marker() {
        let temp = tempdir().unwrap();
        let empty = temp.path().join("empty.txt");
        std_fs::write(&empty, "").unwrap();

        let tool = ReadFilesTool::new(shared_session());
        let request = ToolRequest::new(json!({"files": [empty.to_string_lossy()]}));
        let output = tool.execute(&request).await.unwrap();

        assert_eq!(
            output.blocks,
            vec![format!(
                "File: {}\nContent: [EMPTY FILE - 0 BYTES]",
                empty.display()
            )]
        );
    }

    #[tokio::test]
    async fn duplicate_paths_return_two_blocks() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("a.txt");
        std_fs::write(&file, "x").unwrap();

        let tool = ReadFilesTool::new(shared_session());
        let input = file.to_string_lossy().into_owned();
        let request = ToolRequest::new(json!({"files": [input.clone(), input]}));
        let output = tool.execute(&request).await.unwrap();

        assert_eq!(output.blocks.len(), 2);
        assert_eq!(output.blocks[0], output.blocks[1]);
    }

    #[tokio::test]
    async fn missing_files_parameter_is_an_error() {
        let tool = ReadFilesTool::new(shared_session());
        let err = tool.execute(&ToolRequest::new(json!({}))).await.unwrap_err();
        assert!(err.to_string().contains("Missing required parameter: files"));
    }

    #[tokio::test]
    async fn non_string_entries_are_rejected() {
        let tool = ReadFilesTool::new(shared_session());
        let request = ToolRequest::new(json!({"files": ["ok.txt", 42]}));
        let err = tool.execute(&request).await.unwrap_err();
        assert!(err.to_string().contains("array of strings"));
    }
}
