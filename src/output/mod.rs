//! Output formatting for directory trees
//!
//! The walker streams lines through the `TreeOutput` trait. `PlainFormatter`
//! writes them as UTF-8 text to any `Write` sink.

mod plain;

pub use plain::PlainFormatter;

use std::io;

/// Callback for streaming output - receives each line as it is produced.
pub trait TreeOutput {
    /// First line: the root directory's bare name.
    fn root_line(&mut self, name: &str) -> io::Result<()>;

    /// One entry: `prefix + branch + name`.
    fn entry_line(&mut self, prefix: &str, branch: &str, name: &str) -> io::Result<()>;

    fn finish(&mut self) -> io::Result<()>;
}
