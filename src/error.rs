//! Fatal conditions. Anything malformed inside a comment is not an error —
//! it is simply not a table entry.

use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenError>;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("source directory not found: {}", .0.display())]
    MissingSourceDir(PathBuf),

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("{} not found; run `make joy` first.", .0.display())]
    MissingCompileDatabase(PathBuf),

    #[error("malformed compile database {}: {source}", .path.display())]
    CompileDatabase {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No source files discovered for clang-tidy.")]
    NoTidySources,

    #[error("{} collision(s) in primitive metadata:\n{}", .0.len(), .0.join("\n"))]
    Collisions(Vec<String>),
}

/// Adapter for `map_err` that attaches the offending path.
pub fn io_at(path: &Path) -> impl FnOnce(std::io::Error) -> GenError + '_ {
    move |source| GenError::Io {
        path: path.to_path_buf(),
        source,
    }
}
