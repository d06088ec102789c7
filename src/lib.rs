//! toptree - print a directory tree, descending only into allowed top-level folders

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::TreeError;
pub use output::{PlainFormatter, TreeOutput};
pub use tree::{DEFAULT_ALLOWED_TOP_LEVEL, TreeWalker, WalkerConfig, render_to_string};
