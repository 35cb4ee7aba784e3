//! Data model for extracted primitive metadata — shared by the scanner,
//! the table builder and the renderers.

use crate::names;
use std::path::PathBuf;

/// One input file, read once per run.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub text: String,
}

/// How a declaration was discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    /// `void name_(pEnv env)` definition or prototype.
    Direct,
    /// `MACRO(name_, ...)` invocation that expands to a definition.
    MacroInvoked,
    /// Filename stem of a single-primitive file (`individual/pmap.c`).
    FileStem,
}

/// A function identity found in source, before mangling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDeclaration {
    pub token: String,
    pub kind: DeclKind,
    pub origin: PathBuf,
    /// Preceded by a comment carrying `[NATIVE]`
    pub native: bool,
}

impl RawDeclaration {
    /// Symbol emitted into the header.
    ///
    /// Pattern-matched tokens already carry the trailing `_`; file stems are
    /// bare primitive names and go through the name resolver.
    pub fn symbol(&self) -> String {
        match self.kind {
            DeclKind::Direct | DeclKind::MacroInvoked => self.token.clone(),
            DeclKind::FileStem => names::resolve_symbol(&self.token),
        }
    }
}

/// Fields of an accepted `Q...` header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocHeader {
    pub qcode: String,
    pub flags: String,
    /// Raw index text; validated by the table builder
    pub index: String,
    pub name: String,
    /// Everything after the first colon, trimmed
    pub signature: String,
}

/// A `/** ... */` comment whose header passed the prefix and arity checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocBlock {
    pub header: DocHeader,
    pub description: String,
    pub origin: PathBuf,
}

/// One optable row. String fields are already escaped for a C literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    pub index: i64,
    /// Index as written, echoed into the row comment
    pub index_text: String,
    pub qcode: String,
    pub flags: String,
    pub name: String,
    pub symbol: String,
    pub signature: String,
    pub description: String,
}

/// Everything one source file contributes.
#[derive(Debug, Default)]
pub struct FileScan {
    pub declarations: Vec<RawDeclaration>,
    pub doc_blocks: Vec<DocBlock>,
}

/// Rendered output plus where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub path: PathBuf,
    pub contents: String,
}
