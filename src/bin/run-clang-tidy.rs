//! run-clang-tidy — lint every interpreter source in the compile database.
//!
//! `run-clang-tidy <build_dir> <clang_tidy>`

use anyhow::Result;
use clap::Parser;
use primgen::tidy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "run-clang-tidy",
    about = "Run clang-tidy across all sources in compile_commands.json"
)]
struct Cli {
    /// Build directory containing compile_commands.json
    build_dir: PathBuf,

    /// clang-tidy executable
    clang_tidy: PathBuf,
}

fn main() -> Result<()> {
    primgen::init_tracing();
    let cli = Cli::parse();

    let build_dir = tidy::normalize(&cli.build_dir);
    let sources = tidy::load_sources(&build_dir)?;
    let sdkroot = tidy::probe_sdkroot();

    for source in &sources {
        println!("Running clang-tidy on {}", source.display());
        let status = tidy::run_one(&cli.clang_tidy, &build_dir, source, sdkroot.as_deref())?;
        if !status.success() {
            std::process::exit(status.code().unwrap_or(1));
        }
    }

    Ok(())
}
