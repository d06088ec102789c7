//! Directory listing, ordering and prefix bookkeeping used by the walker.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use log::trace;

use crate::error::{Result, TreeError};

pub const BRANCH: &str = "├── ";
pub const LAST_BRANCH: &str = "└── ";
const CONTINUATION: &str = "│   ";
const LAST_CONTINUATION: &str = "    ";

/// One child of a listed directory, classified once at listing time.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    /// Plain file (symlinks followed).
    pub is_file: bool,
    /// Directory (symlinks followed).
    pub is_dir: bool,
}

impl Entry {
    fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        Self {
            name,
            is_file: path.is_file(),
            is_dir: path.is_dir(),
            path,
        }
    }
}

/// Directories (and anything else that is not a plain file) first,
/// then case-insensitive by name. The raw name settles exact-lowercase ties.
pub fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    a.is_file
        .cmp(&b.is_file)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

/// List `dir`'s direct children in display order.
pub fn read_sorted_entries(dir: &Path) -> Result<Vec<Entry>> {
    let read = fs::read_dir(dir).map_err(|e| TreeError::from_listing(dir, e))?;

    let mut entries = Vec::new();
    for entry in read {
        let entry = entry.map_err(|e| TreeError::from_listing(dir, e))?;
        entries.push(Entry::from_path(entry.path()));
    }
    entries.sort_by(compare_entries);

    trace!("listed {} ({} entries)", dir.display(), entries.len());
    Ok(entries)
}

/// Glyph placed before an entry's name.
pub fn branch(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// Prefix for the children of an entry printed with `current_prefix`.
pub fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", current_prefix, LAST_CONTINUATION)
    } else {
        format!("{}{}", current_prefix, CONTINUATION)
    }
}

/// Name printed on the first line for `root`.
pub fn root_name(root: &Path) -> String {
    if let Some(name) = root.file_name() {
        return name.to_string_lossy().to_string();
    }
    root.canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|s| s.to_string_lossy().to_string()))
        .unwrap_or_else(|| root.display().to_string())
}
