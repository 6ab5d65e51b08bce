use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Session state shared by both tools: the set of canonical file paths
/// reported by the most recent `list_structure` traversal.
///
/// The ledger is advisory. `read_files` consults it only to warn about paths
/// the last traversal never saw; unknown paths are still read. Overlapping
/// calls can clear the ledger mid-read, producing spurious warnings - an
/// accepted race, since the ledger never gates access.
#[derive(Debug, Default)]
pub struct InspectSession {
    known_files: HashSet<PathBuf>,
}

impl InspectSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the ledger. Called once at the start of every traversal, not
    /// per directory - the ledger is not additive across listings.
    pub fn begin_listing(&mut self) {
        self.known_files.clear();
    }

    pub fn record(&mut self, path: PathBuf) {
        self.known_files.insert(path);
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.known_files.contains(path)
    }

    pub fn len(&self) -> usize {
        self.known_files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known_files.is_empty()
    }
}

pub type SharedSession = Arc<Mutex<InspectSession>>;

pub fn shared_session() -> SharedSession {
    Arc::new(Mutex::new(InspectSession::new()))
}
