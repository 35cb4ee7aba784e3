//! Doc-block reader for primitive table headers.
//!
//! ```text
//! /**
//! Q0  OK  1380  +\0plus  :  M I  ->  N
//! Numeric N is the result of adding integer I to numeric M.
//! */
//! ```
//!
//! The first non-blank line is the header: op-code, flags, index and name
//! before the first colon, the stack signature after it. Everything below
//! the header is the description. Blocks that do not fit are ordinary
//! comments and are skipped.

use super::lexer::Token;
use crate::model::{DocBlock, DocHeader};
use std::path::Path;

/// First character of every table header's op-code token.
pub const HEADER_PREFIX: char = 'Q';

/// Collect every accepted doc block, in source order.
pub fn read_doc_blocks(tokens: &[Token<'_>], origin: &Path) -> Vec<DocBlock> {
    tokens
        .iter()
        .filter_map(|token| match token {
            Token::Comment { body, doc: true } => parse_block(body, origin),
            _ => None,
        })
        .collect()
}

/// Split a doc comment body into header and description.
pub fn parse_block(body: &str, origin: &Path) -> Option<DocBlock> {
    let lines: Vec<&str> = body.lines().map(str::trim_end).collect();
    let first = lines.iter().position(|line| !line.trim().is_empty())?;

    let Some(header) = parse_header(lines[first]) else {
        tracing::debug!(
            file = %origin.display(),
            line = lines[first].trim(),
            "skipping comment without table header"
        );
        return None;
    };

    Some(DocBlock {
        header,
        description: lines[first + 1..].join("\n").trim().to_string(),
        origin: origin.to_path_buf(),
    })
}

/// Parse a `Q...` header line. Needs the prefix and at least four tokens
/// before the colon; extra tokens are ignored.
pub fn parse_header(line: &str) -> Option<DocHeader> {
    let line = line.trim();
    if !line.starts_with(HEADER_PREFIX) {
        return None;
    }

    let (lhs, signature) = match line.split_once(':') {
        Some((lhs, rhs)) => (lhs, rhs.trim()),
        None => (line, ""),
    };

    let mut fields = lhs.split_whitespace();
    let qcode = fields.next()?;
    let flags = fields.next()?;
    let index = fields.next()?;
    let name = fields.next()?;

    Some(DocHeader {
        qcode: qcode.to_string(),
        flags: flags.to_string(),
        index: index.to_string(),
        name: name.to_string(),
        signature: signature.to_string(),
    })
}
