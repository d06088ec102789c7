//! TreeWalker - depth-first printing of a directory tree

use std::path::Path;

use log::{debug, info};

use crate::error::{Result, TreeError};
use crate::output::{PlainFormatter, TreeOutput};

use super::config::WalkerConfig;
use super::filter::TopLevelFilter;
use super::traversal::{branch, child_prefix, read_sorted_entries, root_name};

/// Streams a directory tree to a `TreeOutput`.
/// Uses O(depth) memory: one sorted listing per level on the call stack.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Print the root's bare name, then everything below it.
    ///
    /// Output already written stays written if a listing fails part way.
    pub fn walk<O: TreeOutput>(&self, output: &mut O) -> Result<()> {
        let root = self.config.root();
        info!(
            "walking {} ({} allowed top-level names)",
            root.display(),
            self.config.allowed_top_level.len()
        );

        output
            .root_line(&root_name(root))
            .map_err(TreeError::Output)?;
        self.print_tree(root, "", true, output)?;
        output.finish().map_err(TreeError::Output)
    }

    /// Print the children of `dir`, each line starting with `prefix`.
    ///
    /// A first-level directory missing from the allow-list returns before
    /// listing, so its own line (already printed by the caller) is kept
    /// but its contents are not.
    pub fn print_tree<O: TreeOutput>(
        &self,
        dir: &Path,
        prefix: &str,
        is_root: bool,
        output: &mut O,
    ) -> Result<()> {
        if TopLevelFilter::new(&self.config).is_pruned(dir, is_root) {
            debug!("pruned {}", dir.display());
            return Ok(());
        }

        let entries = read_sorted_entries(dir)?;
        let total = entries.len();

        for (i, entry) in entries.iter().enumerate() {
            let is_last = i == total - 1;
            output
                .entry_line(prefix, branch(is_last), &entry.name)
                .map_err(TreeError::Output)?;

            if entry.is_dir {
                self.print_tree(&entry.path, &child_prefix(prefix, is_last), false, output)?;
            }
        }
        Ok(())
    }
}

/// Render the whole tree for `config` into a string.
pub fn render_to_string(config: WalkerConfig) -> Result<String> {
    let mut formatter = PlainFormatter::new(Vec::new());
    TreeWalker::new(config).walk(&mut formatter)?;
    Ok(String::from_utf8_lossy(&formatter.into_inner()).into_owned())
}
