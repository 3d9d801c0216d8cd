//! Builds a tree, prints its size and contents in order, then removes every key.
//!
//! ```text
//! cargo run --example driver -- 20 12 4 500 68 497
//! RUST_LOG=bst_engine=trace cargo run --example driver
//! ```

use bst_engine::engine::{self, Link};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Exercise the BST engine with a sequence of keys")]
struct Args {
    /// Keys to insert, in order. The first one becomes the root.
    #[arg(default_values_t = [20, 12, 4, 500, 68, 497])]
    keys: Vec<i64>,

    /// Leave the keys in place instead of removing them at the end.
    #[arg(long)]
    keep: bool,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    let args = Args::parse();

    let mut root: Link<i64> = None;
    for key in &args.keys {
        root = engine::insert(root, *key);
    }

    println!("Tree Count: {}", engine::count(&root));
    for key in engine::traverse(&root) {
        println!("{}", key);
    }

    if let (Some(min), Some(max)) = (engine::find_minimum(&root), engine::find_maximum(&root)) {
        info!(min = %min, max = %max, height = engine::height(&root), "tree built");
    }

    if !args.keep {
        for key in &args.keys {
            root = engine::remove(root, key);
        }
        info!(remaining = engine::count(&root), "removed every key");
    }

    Ok(())
}
