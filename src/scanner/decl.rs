//! Declaration matcher over the token stream.
//!
//! Two idioms introduce a primitive:
//! - `void name_(pEnv env)` — a direct definition (or prototype)
//! - `MACRO(name_, ...)` — an all-caps helper macro that expands to one
//!
//! A direct definition immediately preceded by a block comment containing
//! `[NATIVE]` is only compiled with native types enabled.

use super::lexer::Token;
use crate::model::{DeclKind, RawDeclaration};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

pub const NATIVE_MARKER: &str = "[NATIVE]";

/// Return type and sole parameter type of every primitive.
const RETURN_TYPE: &str = "void";
const PARAM_TYPE: &str = "pEnv";

static RE_PRIMITIVE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\w+_$").unwrap());

static RE_MACRO_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z0-9_]+$").unwrap());

/// Collect every direct and macro-invoked declaration, in source order.
pub fn match_declarations(tokens: &[Token<'_>], origin: &Path) -> Vec<RawDeclaration> {
    let mut decls = Vec::new();

    for i in 0..tokens.len() {
        let rest = &tokens[i..];
        let (token, kind) = if let Some(name) = match_direct(rest) {
            (name, DeclKind::Direct)
        } else if let Some(name) = match_macro(rest) {
            (name, DeclKind::MacroInvoked)
        } else {
            continue;
        };

        let native = kind == DeclKind::Direct
            && i.checked_sub(1)
                .is_some_and(|prev| is_native_comment(&tokens[prev]));

        decls.push(RawDeclaration {
            token: token.to_string(),
            kind,
            origin: origin.to_path_buf(),
            native,
        });
    }

    decls
}

/// `void IDENT_ ( pEnv IDENT )`
fn match_direct<'a>(tokens: &[Token<'a>]) -> Option<&'a str> {
    match tokens {
        [Token::Ident(ret), Token::Ident(name), Token::Punct('('), Token::Ident(ty), Token::Ident(_), Token::Punct(')'), ..]
            if *ret == RETURN_TYPE && *ty == PARAM_TYPE && RE_PRIMITIVE.is_match(name) =>
        {
            Some(*name)
        }
        _ => None,
    }
}

/// `UPPER ( IDENT_ ,`
fn match_macro<'a>(tokens: &[Token<'a>]) -> Option<&'a str> {
    match tokens {
        [Token::Ident(mac), Token::Punct('('), Token::Ident(arg), Token::Punct(','), ..]
            if RE_MACRO_NAME.is_match(mac) && RE_PRIMITIVE.is_match(arg) =>
        {
            Some(*arg)
        }
        _ => None,
    }
}

fn is_native_comment(token: &Token<'_>) -> bool {
    matches!(token, Token::Comment { body, .. } if body.contains(NATIVE_MARKER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::lexer::tokenize;

    fn decls(src: &str) -> Vec<(String, DeclKind, bool)> {
        match_declarations(&tokenize(src), Path::new("t.c"))
            .into_iter()
            .map(|d| (d.token, d.kind, d.native))
            .collect()
    }

    #[test]
    fn direct_definition() {
        assert_eq!(
            decls("void plus_(pEnv env)\n{\n}\n"),
            vec![("plus_".to_string(), DeclKind::Direct, false)]
        );
    }

    #[test]
    fn direct_requires_suffix_and_env_param() {
        assert!(decls("void plus(pEnv env) {}").is_empty());
        assert!(decls("void plus_(int env) {}").is_empty());
        assert!(decls("void plus_(pEnv env, int x) {}").is_empty());
        assert!(decls("int plus_(pEnv env) {}").is_empty());
    }

    #[test]
    fn macro_invocation() {
        assert_eq!(
            decls("PLUSMINUS(plus_, \"+\", +)\nUFLOAT(ceil_, \"ceil\", ceil)\n"),
            vec![
                ("plus_".to_string(), DeclKind::MacroInvoked, false),
                ("ceil_".to_string(), DeclKind::MacroInvoked, false),
            ]
        );
    }

    #[test]
    fn macro_name_rules() {
        // Lowercase call, single-letter macro, unsuffixed first argument
        assert!(decls("printf(fmt_, x);").is_empty());
        assert!(decls("X(plus_, y);").is_empty());
        assert!(decls("TWOPARAMS(name, y);").is_empty());
        assert_eq!(decls("B2(and_, x)").len(), 1);
    }

    #[test]
    fn macro_definition_parameters_ignored() {
        assert!(decls("#define BFLOAT(PROCEDURE, NAME, FUNC) void PROCEDURE(pEnv env)").is_empty());
    }

    #[test]
    fn native_marker_in_preceding_comment() {
        let src = "/**\nQ0 OK 9000 vnew : I -> V\n[NATIVE] Make a vector.\n*/\nvoid vnew_(pEnv env) {}\n";
        assert_eq!(
            decls(src),
            vec![("vnew_".to_string(), DeclKind::Direct, true)]
        );
    }

    #[test]
    fn native_marker_in_plain_block_comment() {
        let src = "/* [NATIVE] */ void vnew_(pEnv env);";
        assert!(decls(src)[0].2);
    }

    #[test]
    fn native_marker_must_be_adjacent() {
        let src = "/* [NATIVE] */ static void vnew_(pEnv env) {}";
        assert_eq!(decls(src), vec![("vnew_".to_string(), DeclKind::Direct, false)]);
    }

    #[test]
    fn line_comment_breaks_native_adjacency() {
        let src = "/* [NATIVE] */\n// helper\nvoid vnew_(pEnv env) {}";
        assert_eq!(decls(src), vec![("vnew_".to_string(), DeclKind::Direct, false)]);
    }

    #[test]
    fn trailing_line_comment_after_declaration() {
        let src = "/* [NATIVE] */\nvoid vnew_(pEnv env) // vector ctor\n{}";
        assert!(decls(src)[0].2);
    }

    #[test]
    fn comment_without_marker_is_regular() {
        let src = "/** Q0 OK 1 id : -> */ void id_(pEnv env) {}";
        assert!(!decls(src)[0].2);
    }

    #[test]
    fn declarations_inside_comments_ignored() {
        assert!(decls("/* void gone_(pEnv env) */ // PLUS(x_, y)").is_empty());
    }
}
