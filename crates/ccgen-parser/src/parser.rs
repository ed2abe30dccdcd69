//! ast-grep wrapper and input kind detection from file extensions.

use std::path::Path;

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

/// The concrete AST tree type returned by [`parse_source`].
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// How an input file is turned into declaration records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// C++ source parsed with tree-sitter.
    Header,
    /// Pre-parsed records serialized as JSON.
    Records,
}

/// Detect the input kind from a file path extension.
///
/// Returns `None` for unsupported or unrecognized extensions.
#[must_use]
pub fn detect_input_kind(path: &Path) -> Option<InputKind> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "h" | "hh" | "hpp" | "hxx" | "h++" | "inl" | "cpp" | "cc" | "cxx" => {
            Some(InputKind::Header)
        }
        "json" => Some(InputKind::Records),
        _ => None,
    }
}

/// Parse C++ source code into an ast-grep tree.
#[must_use]
pub fn parse_source(source: &str) -> AstTree {
    use ast_grep_language::LanguageExt;
    SupportLang::Cpp.ast_grep(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("include/player.h")]
    #[case("player.hh")]
    #[case("player.hpp")]
    #[case("player.hxx")]
    #[case("player.HPP")]
    #[case("detail/player.inl")]
    #[case("player.cpp")]
    fn detects_headers(#[case] path: &str) {
        assert_eq!(detect_input_kind(Path::new(path)), Some(InputKind::Header));
    }

    #[test]
    fn detects_record_files() {
        assert_eq!(
            detect_input_kind(Path::new("out/records.json")),
            Some(InputKind::Records)
        );
    }

    #[test]
    fn detect_unknown_returns_none() {
        assert_eq!(detect_input_kind(Path::new("notes.txt")), None);
        assert_eq!(detect_input_kind(Path::new("Makefile")), None);
    }

    #[test]
    fn parse_source_produces_translation_unit() {
        let tree = parse_source("struct A {};");
        assert_eq!(tree.root().kind().as_ref(), "translation_unit");
    }
}
