//! Directory tree walking logic
//!
//! `TreeWalker` lists each directory once, sorts it (directories first, then
//! case-insensitive by name) and streams one line per entry to a
//! `TreeOutput`. First-level directories outside the allow-list are printed
//! but not descended into.

mod config;
mod filter;
mod traversal;
mod walker;

// Re-export public types
pub use config::{DEFAULT_ALLOWED_TOP_LEVEL, WalkerConfig};
pub use filter::TopLevelFilter;
pub use traversal::{Entry, compare_entries, read_sorted_entries};
pub use walker::{TreeWalker, render_to_string};
