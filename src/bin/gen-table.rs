//! gen-table — write the optable body from primitive doc comments.
//!
//! `gen-table <source_dir> <output>`

use anyhow::{Context, Result};
use clap::Parser;
use primgen::config::{CollisionPolicy, GenOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gen-table", about = "Generate table.c from primitive docs")]
struct Cli {
    /// Repository root (contains src/builtin)
    source_dir: PathBuf,

    /// Output file for the table body
    output: PathBuf,

    /// Fail when two primitives share an optable index
    #[arg(long)]
    deny_collisions: bool,
}

fn main() -> Result<()> {
    primgen::init_tracing();
    let cli = Cli::parse();

    let policy = if cli.deny_collisions {
        CollisionPolicy::Deny
    } else {
        CollisionPolicy::Warn
    };
    let opts = GenOptions::default().with_collisions(policy);

    let artifact = primgen::generate_table(&cli.source_dir, &cli.output, &opts)
        .with_context(|| format!("failed to generate table from {}", cli.source_dir.display()))?;
    primgen::write_artifact(&artifact)
        .with_context(|| format!("failed to write {}", artifact.path.display()))?;
    println!("Wrote {}", artifact.path.display());

    Ok(())
}
