//! primgen — build-time generators for the Joy interpreter's builtins.
//!
//! Primitive implementations live in `src/builtin/*.c`, each preceded by a
//! doc comment such as
//!
//! ```text
//! /**
//! Q0  OK  1380  +\0plus  :  M I  ->  N
//! Numeric N is the result of adding integer I to numeric M.
//! */
//! void plus_(pEnv env) { ... }
//! ```
//!
//! From those files the generators produce:
//!
//! - `builtin.c` — includes every grouped builtin file
//! - `builtin.h` — declares every primitive entry point
//! - `table.c` — the optable body, ordered by index
//!
//! Output depends only on file contents and names, so re-running on
//! unchanged input rewrites identical bytes.

pub mod assemble;
pub mod config;
pub mod discover;
pub mod error;
pub mod model;
pub mod names;
pub mod render;
pub mod scanner;
pub mod table;
pub mod tidy;

use crate::config::GenOptions;
use crate::error::{io_at, Result};
use crate::model::GeneratedArtifact;
use crate::render::{create_renderer, ArtifactKind};
use std::fs;
use std::io::IsTerminal;
use std::path::Path;

/// Render `builtin.c` and `builtin.h` for the sources under `root`.
pub fn generate_builtins(
    root: &Path,
    output_dir: &Path,
    opts: &GenOptions,
) -> Result<Vec<GeneratedArtifact>> {
    let set = discover::load_sources(root, opts)?;
    let assembly = assemble::assemble(&set);
    assemble::enforce(&assembly, ArtifactKind::Header, opts.collisions)?;

    Ok([ArtifactKind::Aggregate, ArtifactKind::Header]
        .into_iter()
        .map(|kind| {
            let renderer = create_renderer(kind);
            GeneratedArtifact {
                path: output_dir.join(renderer.file_name()),
                contents: renderer.render(&assembly),
            }
        })
        .collect())
}

/// Render the optable body for the sources under `root`.
pub fn generate_table(root: &Path, output: &Path, opts: &GenOptions) -> Result<GeneratedArtifact> {
    let set = discover::load_sources(root, opts)?;
    let assembly = assemble::assemble(&set);
    assemble::enforce(&assembly, ArtifactKind::Table, opts.collisions)?;

    Ok(GeneratedArtifact {
        path: output.to_path_buf(),
        contents: create_renderer(ArtifactKind::Table).render(&assembly),
    })
}

/// Write an artifact, creating parent directories as needed.
pub fn write_artifact(artifact: &GeneratedArtifact) -> Result<()> {
    if let Some(parent) = artifact.path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_at(parent))?;
        }
    }
    fs::write(&artifact.path, &artifact.contents).map_err(io_at(&artifact.path))
}

/// Initialize stderr logging from `RUST_LOG`, defaulting to warnings only.
/// Colour only when stderr is a terminal.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}
