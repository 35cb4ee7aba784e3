//! Symbol mangling for primitive names found in doc-comment headers.
//!
//! - `plus` → `plus_`
//! - `+\0plus` → `plus_` (operator glyph, then the internal name)
//! - `#genrec` → `genrecaux_` (auxiliary function)

/// Separator between the user-facing glyph and the internal name. This is the
/// two-character sequence backslash-zero as written in the comment.
pub const GLYPH_SEPARATOR: &str = "\\0";

/// Prefix marking an auxiliary (helper) primitive.
pub const AUX_PREFIX: char = '#';

pub const AUX_SUFFIX: &str = "aux_";
pub const SYMBOL_SUFFIX: &str = "_";

/// Map a display name to the C symbol implementing it.
///
/// The glyph separator is handled first so a glyph that happens to start with
/// `#` never triggers the auxiliary rule.
pub fn resolve_symbol(name: &str) -> String {
    let internal = name.rsplit(GLYPH_SEPARATOR).next().unwrap_or(name);
    match internal.strip_prefix(AUX_PREFIX) {
        Some(base) => format!("{base}{AUX_SUFFIX}"),
        None => format!("{internal}{SYMBOL_SUFFIX}"),
    }
}
