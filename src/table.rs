//! Table entry builder — turns accepted doc blocks into optable rows.

use crate::model::{DocBlock, TableEntry};
use crate::names;
use std::num::IntErrorKind;

/// Build the row for one doc block. A non-numeric index means the block is
/// not a table entry. Indices are bounded to `i64`; a numeric index beyond
/// that is dropped too, with a warning since it is almost certainly a typo.
pub fn build_entry(block: &DocBlock) -> Option<TableEntry> {
    let header = &block.header;
    let index = match header.index.parse::<i64>() {
        Ok(index) => index,
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            tracing::warn!(
                file = %block.origin.display(),
                index = %header.index,
                name = %header.name,
                "skipping doc block with out-of-range index"
            );
            return None;
        }
        Err(_) => {
            tracing::debug!(
                file = %block.origin.display(),
                index = %header.index,
                name = %header.name,
                "skipping doc block with non-numeric index"
            );
            return None;
        }
    };

    Some(TableEntry {
        index,
        index_text: header.index.clone(),
        qcode: header.qcode.clone(),
        flags: header.flags.clone(),
        name: escape_c_string(&header.name),
        symbol: names::resolve_symbol(&header.name),
        signature: escape_c_string(&header.signature),
        description: escape_c_string(&block.description),
    })
}

pub fn build_entries<'a>(blocks: impl IntoIterator<Item = &'a DocBlock>) -> Vec<TableEntry> {
    blocks.into_iter().filter_map(build_entry).collect()
}

/// Escape text for a C string literal: quotes and newlines only.
///
/// Backslashes pass through untouched so a `\0` written in a display name
/// reaches the C compiler as the glyph separator.
pub fn escape_c_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out
}
