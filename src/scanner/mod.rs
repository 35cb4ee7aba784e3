//! Source scanner — one pass of the tokenizer per file, then declaration
//! and doc-block extraction over the shared token stream.

pub mod decl;
pub mod doc;
pub mod lexer;

use crate::model::{DeclKind, FileScan, RawDeclaration, SourceUnit};

/// Where a file's declarations come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclSource {
    /// `void name_(pEnv env)` and `MACRO(name_, ...)` in the file text.
    Patterns,
    /// The filename itself names the primitive (`individual/pmap.c`).
    FileStems,
}

impl DeclSource {
    fn declarations(self, unit: &SourceUnit, tokens: &[lexer::Token<'_>]) -> Vec<RawDeclaration> {
        match self {
            DeclSource::Patterns => decl::match_declarations(tokens, &unit.path),
            DeclSource::FileStems => unit
                .path
                .file_stem()
                .map(|stem| RawDeclaration {
                    token: stem.to_string_lossy().to_string(),
                    kind: DeclKind::FileStem,
                    origin: unit.path.clone(),
                    native: false,
                })
                .into_iter()
                .collect(),
        }
    }
}

/// Extract declarations and table doc blocks from one source file.
pub fn scan(unit: &SourceUnit, source: DeclSource) -> FileScan {
    let tokens = lexer::tokenize(&unit.text);
    let scan = FileScan {
        declarations: source.declarations(unit, &tokens),
        doc_blocks: doc::read_doc_blocks(&tokens, &unit.path),
    };
    tracing::debug!(
        file = %unit.path.display(),
        declarations = scan.declarations.len(),
        doc_blocks = scan.doc_blocks.len(),
        "scanned"
    );
    scan
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn unit(path: &str, text: &str) -> SourceUnit {
        SourceUnit {
            path: PathBuf::from(path),
            text: text.to_string(),
        }
    }

    #[test]
    fn patterns_and_docs_from_one_file() {
        let src = "/**\nQ0 OK 1380 +\\0plus : M I -> N\nAdd two numbers.\n*/\nvoid plus_(pEnv env) { }\nPLUSMINUS(minus_, \"-\", -)\n";
        let result = scan(&unit("src/builtin/arith.c", src), DeclSource::Patterns);
        let tokens: Vec<_> = result.declarations.iter().map(|d| d.token.as_str()).collect();
        assert_eq!(tokens, vec!["plus_", "minus_"]);
        assert_eq!(result.doc_blocks.len(), 1);
        assert_eq!(result.doc_blocks[0].description, "Add two numbers.");
    }

    #[test]
    fn file_stem_ignores_text() {
        let result = scan(
            &unit("src/builtin/individual/pmap.c", "void other_(pEnv env) {}"),
            DeclSource::FileStems,
        );
        assert_eq!(result.declarations.len(), 1);
        assert_eq!(result.declarations[0].token, "pmap");
        assert_eq!(result.declarations[0].symbol(), "pmap_");
    }

    #[test]
    fn file_stem_still_reads_doc_blocks() {
        let result = scan(
            &unit("pmap.c", "/**\nQ1 OK 3270 pmap : A [P] -> B\nParallel map.\n*/"),
            DeclSource::FileStems,
        );
        assert_eq!(result.doc_blocks.len(), 1);
    }
}
