//! Source discovery — glob the builtin directory and read each file once.

use crate::config::GenOptions;
use crate::error::{io_at, GenError, Result};
use crate::model::SourceUnit;
use std::fs;
use std::path::{Path, PathBuf};

/// File extension of primitive sources.
pub const SOURCE_EXTENSION: &str = "c";

/// All sources for one run, in lexicographic order.
#[derive(Debug)]
pub struct SourceSet {
    pub root: PathBuf,
    /// Top-level grouped files; each gets an include directive
    pub grouped: Vec<SourceUnit>,
    /// Single-primitive files, pulled in by the grouped files themselves
    pub individual: Vec<SourceUnit>,
}

/// Load the grouped sources (required) and the individual sources (if the
/// directory exists).
///
/// The root is canonicalized first, so every globbed path shares its prefix
/// however the root was spelled (`./joy`, `joy/`, `../joy`).
pub fn load_sources(root: &Path, opts: &GenOptions) -> Result<SourceSet> {
    if !root.join(&opts.builtin_dir).is_dir() {
        return Err(GenError::MissingSourceDir(root.join(&opts.builtin_dir)));
    }
    let root = fs::canonicalize(root).map_err(io_at(root))?;
    let builtin_dir = root.join(&opts.builtin_dir);

    let grouped = read_units(&list_sources(&builtin_dir)?)?;

    let individual_dir = builtin_dir.join(&opts.individual_dir);
    let individual = if individual_dir.is_dir() {
        read_units(&list_sources(&individual_dir)?)?
    } else {
        Vec::new()
    };

    tracing::info!(
        root = %root.display(),
        grouped = grouped.len(),
        individual = individual.len(),
        "loaded sources"
    );

    Ok(SourceSet {
        root,
        grouped,
        individual,
    })
}

/// `*.c` regular files directly inside `dir`, sorted.
pub fn list_sources(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!(
        "{}/*.{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        SOURCE_EXTENSION
    );
    let mut files: Vec<PathBuf> = glob::glob(&pattern)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();
    // Sort for deterministic output
    files.sort();
    Ok(files)
}

fn read_units(paths: &[PathBuf]) -> Result<Vec<SourceUnit>> {
    paths
        .iter()
        .map(|path| {
            let text = fs::read_to_string(path).map_err(io_at(path))?;
            Ok(SourceUnit {
                path: path.clone(),
                text,
            })
        })
        .collect()
}

/// Include path for a source, relative to the repository root, always with
/// forward slashes. Both paths must be spelled the same way; [`load_sources`]
/// guarantees that for the units it returns.
pub fn include_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
