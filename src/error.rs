//! Error types for tree printing

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Everything that can stop a walk. None of these are recovered from.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("cannot access '{}': No such file or directory", path.display())]
    NotFound { path: PathBuf },
    #[error("cannot open directory '{}': Permission denied", path.display())]
    PermissionDenied { path: PathBuf },
    #[error("'{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error writing output: {0}")]
    Output(#[source] io::Error),
}

impl TreeError {
    /// Classify a failure to list `path` by its `io::ErrorKind`.
    pub fn from_listing(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => TreeError::NotFound { path },
            io::ErrorKind::PermissionDenied => TreeError::PermissionDenied { path },
            io::ErrorKind::NotADirectory => TreeError::NotADirectory { path },
            _ => TreeError::Io { path, source },
        }
    }
}

pub type Result<T> = std::result::Result<T, TreeError>;
