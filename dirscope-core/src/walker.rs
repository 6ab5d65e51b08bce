use crate::ignore::IgnoreList;
use crate::session::SharedSession;
use crate::tree::DirNode;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Recursively walks `root`, applying the exclusion list and recording every
/// included file into the session ledger.
///
/// The ledger is cleared exactly once, at the start of the whole walk. Any
/// enumeration error fails the entire walk - callers never see a partial
/// tree. A failed stat on an individual file only degrades that entry's
/// label.
pub async fn walk(root: &Path, ignore: &IgnoreList, session: &SharedSession) -> Result<DirNode> {
    session.lock().await.begin_listing();
    walk_dir(root, root, ignore, session).await
}

async fn walk_dir(
    dir: &Path,
    root: &Path,
    ignore: &IgnoreList,
    session: &SharedSession,
) -> Result<DirNode> {
    let mut entries = fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut node = DirNode::default();
    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("Failed to enumerate directory: {}", dir.display()))?
    {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        let relative = path
            .strip_prefix(root)
            .map(|rel| rel.to_string_lossy().replace('\\', "/"))
            .unwrap_or_else(|_| name.clone());

        if ignore.is_excluded(&name, &relative) {
            continue;
        }

        let is_dir = match entry.file_type().await {
            Ok(file_type) => file_type.is_dir(),
            Err(error) => {
                debug!(path = %path.display(), ?error, "file type unavailable, treating as file");
                false
            }
        };

        if is_dir {
            let child = Box::pin(walk_dir(&path, root, ignore, session)).await?;
            node.push_dir(name, child);
        } else {
            let size = match entry.metadata().await {
                Ok(metadata) => Some(metadata.len()),
                Err(error) => {
                    debug!(path = %path.display(), ?error, "stat failed, keeping bare label");
                    None
                }
            };
            session.lock().await.record(path);
            node.push_file(name, size);
        }
    }

    Ok(node)
}
