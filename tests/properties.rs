//! Property-based tests for name resolution and table assembly.

use primgen::assemble::{merge_declarations, order_entries};
use primgen::model::{DeclKind, DocBlock, DocHeader, RawDeclaration};
use primgen::names::resolve_symbol;
use primgen::table::{build_entries, escape_c_string};
use proptest::prelude::*;
use std::path::PathBuf;

fn doc_block(index: String, name: String, description: String) -> DocBlock {
    DocBlock {
        header: DocHeader {
            qcode: "Q0".to_string(),
            flags: "OK".to_string(),
            index,
            name,
            signature: "->".to_string(),
        },
        description,
        origin: PathBuf::from("t.c"),
    }
}

// Strategy for primitive display names as they appear in headers
fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z_][a-z0-9_]{0,12}",
        "#[a-z][a-z0-9]{0,8}",
        "[-+*/<>=!]{1,2}\\\\0[a-z]{1,8}",
    ]
}

proptest! {
    /// Property: every resolved symbol is a usable C identifier ending in `_`
    #[test]
    fn resolved_symbols_are_identifiers(name in name_strategy()) {
        let symbol = resolve_symbol(&name);
        prop_assert!(symbol.ends_with('_'));
        prop_assert!(symbol.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
    }

    /// Property: resolution never panics, whatever the token
    #[test]
    fn resolution_is_total(name in ".*") {
        let _ = resolve_symbol(&name);
    }

    /// Property: table rows come out in non-decreasing index order, and
    /// only numeric indices survive
    #[test]
    fn entries_ordered_by_index(
        rows in prop::collection::vec(
            (prop_oneof!["-?[0-9]{1,6}", "[a-z]{1,4}"], name_strategy()),
            0..40,
        )
    ) {
        let blocks: Vec<DocBlock> = rows
            .iter()
            .map(|(index, name)| doc_block(index.clone(), name.clone(), String::new()))
            .collect();
        let numeric = rows.iter().filter(|(i, _)| i.parse::<i64>().is_ok()).count();

        let (entries, _) = order_entries(build_entries(&blocks));
        prop_assert_eq!(entries.len(), numeric);
        prop_assert!(entries.windows(2).all(|w| w[0].index <= w[1].index));
    }

    /// Property: ordering the same input twice gives the same rows
    #[test]
    fn ordering_is_deterministic(
        indices in prop::collection::vec(0i64..20, 0..30)
    ) {
        let blocks: Vec<DocBlock> = indices
            .iter()
            .enumerate()
            .map(|(n, i)| doc_block(i.to_string(), format!("p{n}"), String::new()))
            .collect();
        let (first, _) = order_entries(build_entries(&blocks));
        let (second, _) = order_entries(build_entries(&blocks));
        prop_assert_eq!(first, second);
    }

    /// Property: escaped text never holds a raw newline or an unescaped quote
    #[test]
    fn escaped_text_is_literal_safe(text in "[a-z \"\n]{0,40}") {
        let escaped = escape_c_string(&text);
        prop_assert!(!escaped.contains('\n'));
        let bytes = escaped.as_bytes();
        for (i, b) in bytes.iter().enumerate() {
            if *b == b'"' {
                prop_assert!(i > 0 && bytes[i - 1] == b'\\');
            }
        }
    }

    /// Property: a symbol lands in exactly one header section
    #[test]
    fn header_sections_disjoint(
        decls in prop::collection::vec(("[a-e]_", any::<bool>()), 0..20)
    ) {
        let raw: Vec<RawDeclaration> = decls
            .iter()
            .map(|(token, native)| RawDeclaration {
                token: token.clone(),
                kind: DeclKind::Direct,
                origin: PathBuf::from("t.c"),
                native: *native,
            })
            .collect();
        let (set, _) = merge_declarations(raw);
        prop_assert!(set.regular.is_disjoint(&set.native));
        for (token, native) in &decls {
            if *native {
                prop_assert!(set.native.contains(token));
            }
        }
    }
}
