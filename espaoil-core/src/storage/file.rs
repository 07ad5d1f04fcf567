//! File-backed store: one file per key under a data directory.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use super::StateStore;

/// A `StateStore` that keeps each key in its own file.
///
/// IO errors are logged at debug level and otherwise swallowed, per the
/// fail-soft persistence policy.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn put(&self, key: &str, value: &str) {
        if let Err(e) = fs::create_dir_all(&self.dir) {
            debug!(error = %e, dir = %self.dir.display(), "state dir unavailable, dropping write");
            return;
        }
        if let Err(e) = fs::write(self.path_for(key), value) {
            debug!(error = %e, key, "state write dropped");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = fs::remove_file(self.path_for(key)) {
            debug!(error = %e, key, "state remove dropped");
        }
    }
}
