//! gen-builtins — write `builtin.c` and `builtin.h` for the Joy interpreter.
//!
//! `gen-builtins <source_dir> <output_dir>`

use anyhow::{Context, Result};
use clap::Parser;
use primgen::config::{CollisionPolicy, GenOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gen-builtins",
    about = "Generate the builtin include glue and declarations"
)]
struct Cli {
    /// Repository root (contains src/builtin)
    source_dir: PathBuf,

    /// Directory for builtin.c and builtin.h
    output_dir: PathBuf,

    /// Fail when a symbol is declared both native-only and unconditionally
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

    let artifacts = primgen::generate_builtins(&cli.source_dir, &cli.output_dir, &opts)
        .with_context(|| format!("failed to generate builtins from {}", cli.source_dir.display()))?;

    for artifact in &artifacts {
        primgen::write_artifact(artifact)
            .with_context(|| format!("failed to write {}", artifact.path.display()))?;
        println!("Wrote {}", artifact.path.display());
    }

    Ok(())
}
