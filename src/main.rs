//! CLI entry point for toptree

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::debug;
use toptree::{PlainFormatter, TreeOutput, TreeWalker, WalkerConfig};

#[derive(Parser, Debug)]
#[command(name = "toptree")]
#[command(about = "Print a directory tree, descending only into allowed top-level folders")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(env = "TOPTREE_ROOT")]
    root: PathBuf,

    /// Top-level directory whose contents are shown (repeatable or comma-separated).
    /// Defaults to: components, lib, pages, types, utils
    #[arg(
        short = 'a',
        long = "allow",
        value_name = "NAME",
        env = "TOPTREE_ALLOW",
        value_delimiter = ','
    )]
    allow: Vec<String>,
}

impl Args {
    fn walker_config(&self) -> WalkerConfig {
        let config = WalkerConfig::new(&self.root);
        let names: Vec<&str> = self
            .allow
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        if names.is_empty() {
            config
        } else {
            config.with_allowed(names)
        }
    }
}

fn main() {
    // RUST_LOG controls verbosity; records go to stderr.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = args.walker_config();
    debug!("config: {:?}", config);

    let stdout = io::stdout();
    let mut formatter = PlainFormatter::new(BufWriter::new(stdout.lock()));

    if let Err(e) = TreeWalker::new(config).walk(&mut formatter) {
        // Keep whatever was printed before the failure; best effort.
        let _ = formatter.finish();
        eprintln!("toptree: {}", e);
        process::exit(1);
    }
}
