use std::path::{Path, PathBuf};
use tracing::debug;

/// Patterns applied when no ignore file is present: common build/VCS
/// directories plus compiled Python artifacts.
pub const DEFAULT_PATTERNS: &[&str] = &[
    ".git",
    ".svn",
    ".hg",
    "node_modules",
    "__pycache__",
    "build",
    "dist",
    "*.pyc",
    "*.pyo",
];

/// Name of the ignore file looked up next to the running executable.
pub const IGNORE_FILE_NAME: &str = "dirscope.ignore";

/// One exclusion rule, classified at parse time into one of the supported
/// glob shapes. Classification order matters only for the literal pattern
/// `*`, which takes the contains branch and matches everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// `*substr*`
    Contains(String),
    /// `*suffix`
    Suffix(String),
    /// `prefix*`
    Prefix(String),
    /// `a*b*c` - prefix, interior substrings, suffix. Interior segments are
    /// checked independently, not in order.
    Segmented {
        prefix: String,
        middle: Vec<String>,
        suffix: String,
    },
    /// No wildcard: exact equality.
    Exact(String),
}

impl Pattern {
    pub fn parse(raw: &str) -> Pattern {
        let starts = raw.starts_with('*');
        let ends = raw.ends_with('*');

        if starts && ends {
            let inner = if raw.len() <= 2 {
                ""
            } else {
                &raw[1..raw.len() - 1]
            };
            return Pattern::Contains(inner.to_string());
        }
        if starts {
            return Pattern::Suffix(raw[1..].to_string());
        }
        if ends {
            return Pattern::Prefix(raw[..raw.len() - 1].to_string());
        }
        if raw.contains('*') {
            let mut parts: Vec<&str> = raw.split('*').collect();
            let suffix = parts.pop().unwrap_or("").to_string();
            let prefix = if parts.is_empty() {
                String::new()
            } else {
                parts.remove(0).to_string()
            };
            let middle = parts.iter().map(|part| part.to_string()).collect();
            return Pattern::Segmented {
                prefix,
                middle,
                suffix,
            };
        }
        Pattern::Exact(raw.to_string())
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            Pattern::Contains(inner) => name.contains(inner.as_str()),
            Pattern::Suffix(suffix) => name.ends_with(suffix.as_str()),
            Pattern::Prefix(prefix) => name.starts_with(prefix.as_str()),
            Pattern::Segmented {
                prefix,
                middle,
                suffix,
            } => {
                name.starts_with(prefix.as_str())
                    && name.ends_with(suffix.as_str())
                    && middle.iter().all(|part| name.contains(part.as_str()))
            }
            Pattern::Exact(exact) => name == exact,
        }
    }
}

/// The active exclusion list. Built once at process start; no hot reload.
#[derive(Debug, Clone)]
pub struct IgnoreList {
    patterns: Vec<Pattern>,
}

impl IgnoreList {
    /// Loads patterns from a plain-text file: one pattern per line, trimmed,
    /// blank lines and `#` comments dropped. Any failure falls back to the
    /// built-in default list without raising.
    pub fn load(path: &Path) -> IgnoreList {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let list = IgnoreList::from_lines(&contents);
                debug!(
                    path = %path.display(),
                    patterns = list.len(),
                    "loaded ignore patterns from file"
                );
                list
            }
            Err(error) => {
                debug!(
                    path = %path.display(),
                    ?error,
                    "ignore file unavailable, using default patterns"
                );
                IgnoreList::defaults()
            }
        }
    }

    pub fn defaults() -> IgnoreList {
        IgnoreList {
            patterns: DEFAULT_PATTERNS.iter().map(|raw| Pattern::parse(raw)).collect(),
        }
    }

    pub fn from_lines(contents: &str) -> IgnoreList {
        let patterns = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(Pattern::parse)
            .collect();
        IgnoreList { patterns }
    }

    /// True when either the bare entry name or its path relative to the walk
    /// root matches any pattern. The first matching pattern short-circuits.
    pub fn is_excluded(&self, name: &str, relative: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern.matches(name) || pattern.matches(relative))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Location of the ignore file: alongside the running executable.
pub fn default_ignore_path() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.join(IGNORE_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn matches(name: &str, raw: &str) -> bool {
        Pattern::parse(raw).matches(name)
    }

    #[test]
    fn suffix_patterns() {
        assert!(matches("foo.pyc", "*.pyc"));
        assert!(!matches("foo.pyc", "*.pyo"));
    }

    #[test]
    fn exact_patterns() {
        assert!(matches("node_modules", "node_modules"));
        assert!(!matches("my-node_modules", "node_modules"));
    }

    #[test]
    fn prefix_patterns() {
        assert!(matches("temp_output", "temp*"));
        assert!(!matches("my_temp", "temp*"));
    }

    #[test]
    fn contains_patterns() {
        assert!(matches("a_cache_b", "*cache*"));
        assert!(!matches("nothing", "*cache*"));
    }

    #[test]
    fn star_matches_everything() {
        assert!(matches("anything", "*"));
        assert!(matches("", "*"));
    }

    #[test]
    fn segmented_patterns() {
        assert!(matches("test_file_name", "test*name"));
        assert!(!matches("test_file", "test*name"));
        assert!(matches("a_b_c_end", "a*c*end"));
    }

    #[test]
    fn segmented_interior_order_is_ignored() {
        // Interior segments are independent substring checks, so their
        // relative order in the name does not matter.
        assert!(matches("a_z_y_end", "a*y*z*end"));
    }

    #[test]
    fn parse_classifies_shapes() {
        assert_eq!(Pattern::parse("*x*"), Pattern::Contains("x".to_string()));
        assert_eq!(Pattern::parse("*x"), Pattern::Suffix("x".to_string()));
        assert_eq!(Pattern::parse("x*"), Pattern::Prefix("x".to_string()));
        assert_eq!(Pattern::parse("x"), Pattern::Exact("x".to_string()));
        assert_eq!(Pattern::parse("*"), Pattern::Contains(String::new()));
        assert_eq!(
            Pattern::parse("a*b*c"),
            Pattern::Segmented {
                prefix: "a".to_string(),
                middle: vec!["b".to_string()],
                suffix: "c".to_string(),
            }
        );
    }

    #[test]
    fn from_lines_drops_comments_and_blanks() {
        let list = IgnoreList::from_lines("# header\n\n  node_modules  \n*.pyc\n   \n# tail\n");
        assert_eq!(list.len(), 2);
        assert!(list.is_excluded("node_modules", "node_modules"));
        assert!(list.is_excluded("a.pyc", "src/a.pyc"));
        assert!(!list.is_excluded("a.py", "src/a.py"));
    }

    #[test]
    fn load_reads_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("dirscope.ignore");
        fs::write(&path, "target\n*.log\n").unwrap();

        let list = IgnoreList::load(&path);
        assert_eq!(list.len(), 2);
        assert!(list.is_excluded("target", "target"));
        assert!(list.is_excluded("run.log", "logs/run.log"));
    }

    #[test]
    fn load_falls_back_to_defaults() {
        let temp = tempdir().unwrap();
        let list = IgnoreList::load(&temp.path().join("missing.ignore"));
        assert_eq!(list.len(), DEFAULT_PATTERNS.len());
        assert!(list.is_excluded("node_modules", "node_modules"));
        assert!(list.is_excluded("mod.pyc", "pkg/mod.pyc"));
    }

    #[test]
    fn relative_path_matching_excludes_nested_entries() {
        let list = IgnoreList::from_lines("src/generated*\n");
        assert!(list.is_excluded("generated_api", "src/generated_api"));
        assert!(!list.is_excluded("api", "src/api"));
    }
}
