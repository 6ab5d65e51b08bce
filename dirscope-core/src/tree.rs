//! In-memory directory tree built by the walker and rendered by
//! [`format_tree`]. Entry order is the order the walk inserted them; the
//! formatter never sorts.

/// Marker rendered beneath a directory whose every entry was filtered out
/// (or that was empty on disk).
pub const EMPTY_DIR_MARKER: &str = "[EMPTY DIRECTORY]";

/// Suffix appended to 0-byte file labels.
pub const EMPTY_FILE_SUFFIX: &str = "[EMPTY FILE - 0 BYTES]";

/// Rendered when the listing root itself has no visible entries. Only the
/// root gets this text, so a fully-excluded subdirectory stays
/// distinguishable from an empty top level.
pub const EMPTY_ROOT_TEXT: &str = "No files or directories found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub name: String,
    pub node: TreeNode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// `size` is `None` when stat failed; the label degrades to the bare name.
    File { size: Option<u64> },
    Dir(DirNode),
}

/// A directory's visible entries, in walk insertion order. An empty vec in a
/// non-root position is the empty-directory sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirNode {
    pub entries: Vec<TreeEntry>,
}

impl DirNode {
    pub fn push_file(&mut self, name: impl Into<String>, size: Option<u64>) {
        self.entries.push(TreeEntry {
            name: name.into(),
            node: TreeNode::File { size },
        });
    }

    pub fn push_dir(&mut self, name: impl Into<String>, dir: DirNode) {
        self.entries.push(TreeEntry {
            name: name.into(),
            node: TreeNode::Dir(dir),
        });
    }
}

/// Renders the tree as indented branch-drawn text.
pub fn format_tree(root: &DirNode) -> String {
    if root.entries.is_empty() {
        return format!("{EMPTY_ROOT_TEXT}\n");
    }
    let mut out = String::new();
    render(root, "", &mut out);
    out
}

fn render(node: &DirNode, indent: &str, out: &mut String) {
    let last = node.entries.len() - 1;
    for (position, entry) in node.entries.iter().enumerate() {
        let branch = if position == last { "└── " } else { "├── " };
        let child_indent = if position == last {
            format!("{indent}    ")
        } else {
            format!("{indent}│   ")
        };

        match &entry.node {
            TreeNode::File { size } => {
                let label = match size {
                    Some(0) => format!("{} {EMPTY_FILE_SUFFIX}", entry.name),
                    Some(bytes) => format!("{} ({bytes} bytes)", entry.name),
                    None => entry.name.clone(),
                };
                out.push_str(indent);
                out.push_str(branch);
                out.push_str(&label);
                out.push('\n');
            }
            TreeNode::Dir(dir) if dir.entries.is_empty() => {
                out.push_str(&format!("{indent}{branch}{}/ [EMPTY]\n", entry.name));
                out.push_str(&format!("{child_indent}└── {EMPTY_DIR_MARKER}\n"));
            }
            TreeNode::Dir(dir) => {
                out.push_str(&format!("{indent}{branch}{}/\n", entry.name));
                render(dir, &child_indent, out);
            }
        }
    }
}
