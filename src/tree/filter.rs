//! Allow-list filtering for first-level directories

use std::path::Path;

use super::config::WalkerConfig;

/// Decides whether a directory's contents should be printed.
/// Only directories whose parent is the root are ever pruned.
pub struct TopLevelFilter<'a> {
    config: &'a WalkerConfig,
}

impl<'a> TopLevelFilter<'a> {
    pub fn new(config: &'a WalkerConfig) -> Self {
        Self { config }
    }

    /// True when `dir` sits directly under the root and its name is not allowed.
    pub fn is_pruned(&self, dir: &Path, is_root: bool) -> bool {
        if is_root || dir.parent() != Some(self.config.root()) {
            return false;
        }
        let name = dir
            .file_name()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        !self.config.is_allowed(&name)
    }
}
