//! Generator options — the conventional Joy source layout plus the
//! collision policy selected on the command line.

use std::path::PathBuf;

/// What to do when two table rows share an index, or a symbol is declared
/// both natively and unconditionally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Log and keep going: duplicates both emit, native wins.
    #[default]
    Warn,
    /// Fail the run before anything is written.
    Deny,
}

#[derive(Debug, Clone)]
pub struct GenOptions {
    /// Grouped primitive sources, relative to the repository root.
    pub builtin_dir: PathBuf,
    /// Single-primitive files, relative to `builtin_dir`. Optional on disk.
    pub individual_dir: PathBuf,
    pub collisions: CollisionPolicy,
}

impl Default for GenOptions {
    fn default() -> Self {
        Self {
            builtin_dir: PathBuf::from("src").join("builtin"),
            individual_dir: PathBuf::from("individual"),
            collisions: CollisionPolicy::Warn,
        }
    }
}

impl GenOptions {
    pub fn with_collisions(mut self, policy: CollisionPolicy) -> Self {
        self.collisions = policy;
        self
    }
}
