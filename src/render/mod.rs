//! Renderer module — one trait implementation per generated artifact.

pub mod aggregate;
pub mod header;
pub mod table;

use crate::assemble::Assembly;

/// Trait for rendering an [`Assembly`] into one generated file.
pub trait Renderer {
    fn render(&self, assembly: &Assembly) -> String;
    /// Conventional file name inside the output directory.
    fn file_name(&self) -> &str;
}

/// The three files the generators produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// `builtin.c` — include list of the grouped sources
    Aggregate,
    /// `builtin.h` — primitive declarations
    Header,
    /// `table.c` — optable body
    Table,
}

/// Create the renderer for an artifact kind.
pub fn create_renderer(kind: ArtifactKind) -> Box<dyn Renderer> {
    match kind {
        ArtifactKind::Aggregate => Box::new(aggregate::AggregateRenderer),
        ArtifactKind::Header => Box::new(header::HeaderRenderer),
        ArtifactKind::Table => Box::new(table::TableRenderer),
    }
}

/// First lines of every generated C file.
const GENERATED_BANNER: &str = "/* Generated file - do not edit */\n";
