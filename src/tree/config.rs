//! Configuration types for tree walkers

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Top-level directory names descended into when no allow-list is given.
pub const DEFAULT_ALLOWED_TOP_LEVEL: [&str; 5] = ["components", "lib", "pages", "types", "utils"];

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkerConfig {
    /// Where traversal begins.
    pub root: PathBuf,
    /// Names of first-level directories whose contents are printed.
    /// Other first-level directories are listed but not descended into.
    pub allowed_top_level: BTreeSet<String>,
}

impl WalkerConfig {
    /// Config for `root` with the default allow-list.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            allowed_top_level: DEFAULT_ALLOWED_TOP_LEVEL
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Replace the allow-list.
    pub fn with_allowed<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_top_level = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_allowed(&self, name: &str) -> bool {
        self.allowed_top_level.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allow_list() {
        let config = WalkerConfig::new("project");
        for name in DEFAULT_ALLOWED_TOP_LEVEL {
            assert!(config.is_allowed(name), "{name} should be allowed");
        }
        assert!(!config.is_allowed("secrets"));
        assert_eq!(config.root(), Path::new("project"));
    }

    #[test]
    fn test_with_allowed_replaces_defaults() {
        let config = WalkerConfig::new("project").with_allowed(["src", "docs"]);
        assert!(config.is_allowed("src"));
        assert!(config.is_allowed("docs"));
        assert!(!config.is_allowed("lib"));
    }

    #[test]
    fn test_allow_list_is_case_sensitive() {
        let config = WalkerConfig::new("project");
        assert!(!config.is_allowed("Lib"));
    }
}
