//! Cross-file assembly: merge every file's scan into one deduplicated,
//! ordered set of declarations and table rows.
//!
//! Collisions are detected here. What happens to them depends on the
//! [`CollisionPolicy`]: by default they are logged and the documented
//! resolution applies (native wins, duplicate indices both emit in discovery
//! order); under `Deny` the run fails before anything is rendered.

use crate::config::CollisionPolicy;
use crate::discover::{include_path, SourceSet};
use crate::error::{GenError, Result};
use crate::model::{RawDeclaration, TableEntry};
use crate::render::ArtifactKind;
use crate::scanner::{self, DeclSource};
use crate::table;
use std::collections::BTreeSet;
use std::fmt;

/// Header declarations, split by guard section.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DeclarationSet {
    pub regular: BTreeSet<String>,
    /// Emitted inside the `JOY_NATIVE_TYPES` guard
    pub native: BTreeSet<String>,
}

/// Something the input declares twice in incompatible ways.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collision {
    /// Several rows share one optable index.
    DuplicateIndex { index: i64, names: Vec<String> },
    /// A symbol is declared both natively and unconditionally.
    NativeConflict { symbol: String },
}

impl Collision {
    /// Which artifact the collision changes.
    pub fn affects(&self) -> ArtifactKind {
        match self {
            Collision::DuplicateIndex { .. } => ArtifactKind::Table,
            Collision::NativeConflict { .. } => ArtifactKind::Header,
        }
    }
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collision::DuplicateIndex { index, names } => {
                write!(f, "index {} used by {}", index, names.join(", "))
            }
            Collision::NativeConflict { symbol } => {
                write!(f, "{} declared both native-only and unconditionally", symbol)
            }
        }
    }
}

/// Everything the renderers need.
#[derive(Debug, Default)]
pub struct Assembly {
    /// Root-relative include paths of the grouped sources
    pub includes: Vec<String>,
    pub declarations: DeclarationSet,
    /// Sorted by index, stable
    pub entries: Vec<TableEntry>,
    pub collisions: Vec<Collision>,
}

/// Scan every source and merge the results.
///
/// Grouped files contribute declarations by pattern; individual files by
/// filename. Both contribute doc blocks.
pub fn assemble(set: &SourceSet) -> Assembly {
    let scans = set
        .grouped
        .iter()
        .map(|unit| scanner::scan(unit, DeclSource::Patterns))
        .chain(
            set.individual
                .iter()
                .map(|unit| scanner::scan(unit, DeclSource::FileStems)),
        );

    let mut declarations = Vec::new();
    let mut blocks = Vec::new();
    for scan in scans {
        declarations.extend(scan.declarations);
        blocks.extend(scan.doc_blocks);
    }

    let (declarations, mut collisions) = merge_declarations(declarations);
    let (entries, index_collisions) = order_entries(table::build_entries(&blocks));
    collisions.extend(index_collisions);

    Assembly {
        includes: set
            .grouped
            .iter()
            .map(|unit| include_path(&set.root, &unit.path))
            .collect(),
        declarations,
        entries,
        collisions,
    }
}

/// Deduplicate symbols and split them into regular and native sections.
/// A symbol seen both ways is native-only.
pub fn merge_declarations(
    decls: impl IntoIterator<Item = RawDeclaration>,
) -> (DeclarationSet, Vec<Collision>) {
    let mut set = DeclarationSet::default();
    for decl in decls {
        let symbol = decl.symbol();
        if decl.native {
            set.native.insert(symbol);
        } else {
            set.regular.insert(symbol);
        }
    }

    let collisions = set
        .regular
        .intersection(&set.native)
        .map(|symbol| Collision::NativeConflict {
            symbol: symbol.clone(),
        })
        .collect();

    let native = &set.native;
    set.regular.retain(|symbol| !native.contains(symbol));
    (set, collisions)
}

/// Stable sort by numeric index, reporting indices used more than once.
pub fn order_entries(mut entries: Vec<TableEntry>) -> (Vec<TableEntry>, Vec<Collision>) {
    entries.sort_by_key(|entry| entry.index);

    let collisions = entries
        .chunk_by(|a, b| a.index == b.index)
        .filter(|group| group.len() > 1)
        .map(|group| Collision::DuplicateIndex {
            index: group[0].index,
            names: group.iter().map(|e| e.name.clone()).collect(),
        })
        .collect();

    (entries, collisions)
}

/// Apply the collision policy to the collisions that touch `kind`.
pub fn enforce(assembly: &Assembly, kind: ArtifactKind, policy: CollisionPolicy) -> Result<()> {
    let relevant: Vec<&Collision> = assembly
        .collisions
        .iter()
        .filter(|c| c.affects() == kind)
        .collect();

    match policy {
        CollisionPolicy::Warn => {
            for collision in relevant {
                tracing::warn!("{}", collision);
            }
            Ok(())
        }
        CollisionPolicy::Deny if relevant.is_empty() => Ok(()),
        CollisionPolicy::Deny => Err(GenError::Collisions(
            relevant.iter().map(|c| c.to_string()).collect(),
        )),
    }
}
