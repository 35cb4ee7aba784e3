//! Minimal C tokenizer — just enough structure for the declaration and
//! doc-block matchers.
//!
//! Whitespace is dropped. `//` comments survive as bodiless
//! [`Token::LineComment`]s so they still separate neighbouring tokens. String
//! and character literals become opaque [`Token::Literal`]s so nothing inside
//! them can look like a declaration or a doc comment. Single forward pass, no
//! backtracking.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Ident(&'a str),
    Punct(char),
    /// Block comment body without the delimiters. For `/** ... */` the
    /// leading `*` is stripped too and `doc` is set.
    Comment { body: &'a str, doc: bool },
    /// `// ...` up to the end of the line.
    LineComment,
    /// Number, string or character literal.
    Literal,
}

pub fn tokenize(src: &str) -> Vec<Token<'_>> {
    let bytes = src.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        let next = bytes.get(i + 1).copied();

        if b.is_ascii_whitespace() {
            i += 1;
        } else if b == b'/' && next == Some(b'*') {
            let start = i + 2;
            let Some(len) = src[start..].find("*/") else {
                // Unterminated comment swallows the rest of the file
                break;
            };
            let raw = &src[start..start + len];
            tokens.push(match raw.strip_prefix('*') {
                Some(body) => Token::Comment { body, doc: true },
                None => Token::Comment {
                    body: raw,
                    doc: false,
                },
            });
            i = start + len + 2;
        } else if b == b'/' && next == Some(b'/') {
            i = src[i..].find('\n').map_or(bytes.len(), |n| i + n);
            tokens.push(Token::LineComment);
        } else if b == b'"' || b == b'\'' {
            i = skip_quoted(bytes, i);
            tokens.push(Token::Literal);
        } else if is_ident_start(b) {
            let start = i;
            while i < bytes.len() && is_ident_continue(bytes[i]) {
                i += 1;
            }
            tokens.push(Token::Ident(&src[start..i]));
        } else if b.is_ascii_digit() {
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'.') {
                i += 1;
            }
            tokens.push(Token::Literal);
        } else {
            let ch = src[i..].chars().next().unwrap_or('\u{fffd}');
            tokens.push(Token::Punct(ch));
            i += ch.len_utf8();
        }
    }

    tokens
}

/// Return the offset just past the closing quote. An unterminated literal
/// ends at the newline, like a C compiler's recovery.
fn skip_quoted(bytes: &[u8], open: usize) -> usize {
    let quote = bytes[open];
    let mut j = open + 1;
    while j < bytes.len() {
        match bytes[j] {
            b'\\' => j += 2,
            b'\n' => return j,
            c if c == quote => return j + 1,
            _ => j += 1,
        }
    }
    bytes.len()
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
