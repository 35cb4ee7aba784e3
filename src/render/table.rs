//! Optable body — one brace-delimited record per line, for textual
//! inclusion into the interpreter's table definition.
//!
//! ```text
//! /* 1380 */ { Q0, OK, "+\0plus", plus_, "M I -> N", "Numeric N is ..." },
//! ```

use super::Renderer;
use crate::assemble::Assembly;
use crate::model::TableEntry;

pub struct TableRenderer;

impl Renderer for TableRenderer {
    fn render(&self, assembly: &Assembly) -> String {
        assembly.entries.iter().map(render_row).collect()
    }

    fn file_name(&self) -> &str {
        "table.c"
    }
}

fn render_row(entry: &TableEntry) -> String {
    format!(
        "/* {:>4} */ {{ {}, {}, \"{}\", {}, \"{}\", \"{}\" }},\n",
        entry.index_text,
        entry.qcode,
        entry.flags,
        entry.name,
        entry.symbol,
        entry.signature,
        entry.description
    )
}
