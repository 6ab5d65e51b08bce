use crate::path::normalize;
use crate::session::SharedSession;
use std::path::PathBuf;
use tokio::fs;
use tracing::warn;

/// Outcome of reading one requested file. Failures keep the original,
/// unresolved input string so the caller can match the result back to what
/// they asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileReadResult {
    Content { path: PathBuf, content: String },
    Empty { path: PathBuf },
    Failed { original: String, message: String },
}

/// Reads every requested path sequentially, preserving input order.
/// Duplicates are processed independently; one bad path never aborts the
/// batch.
pub async fn read_many(paths: &[String], session: &SharedSession) -> Vec<FileReadResult> {
    let mut results = Vec::with_capacity(paths.len());
    for original in paths {
        results.push(read_one(original, session).await);
    }
    results
}

async fn read_one(original: &str, session: &SharedSession) -> FileReadResult {
    let path = normalize(original);

    // Advisory only: the read proceeds either way.
    if !session.lock().await.contains(&path) {
        warn!(
            requested = %original,
            resolved = %path.display(),
            "file was not reported by the most recent directory listing"
        );
    }

    let metadata = match fs::metadata(&path).await {
        Ok(metadata) => metadata,
        Err(error) => {
            return FileReadResult::Failed {
                original: original.to_string(),
                message: format!("Failed to access file: {error}"),
            }
        }
    };

    if metadata.is_dir() {
        return FileReadResult::Failed {
            original: original.to_string(),
            message: format!("Path is a directory, not a file: {}", path.display()),
        };
    }

    // 0-byte files never get a content read.
    if metadata.len() == 0 {
        return FileReadResult::Empty { path };
    }

    match fs::read_to_string(&path).await {
        Ok(content) => FileReadResult::Content { path, content },
        Err(error) => FileReadResult::Failed {
            original: original.to_string(),
            message: format!("Failed to read file: {error}"),
        },
    }
}
