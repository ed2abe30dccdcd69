//! C++ header parser.
//!
//! Walks the tree-sitter C++ tree for the declarations code generation cares
//! about: namespaces (which only contribute to reported names), `class` and
//! `struct` definitions with their base classes, data members, nested types
//! and Doxygen comments, and `enum` definitions with their enumerators.
//! Functions, methods, aliases and forward declarations are ignored.

mod comments;
mod declarations;
mod members;

#[cfg(test)]
mod tests;

use std::path::Path;

use ast_grep_core::Node;
use ccgen_core::HeaderUnit;

use crate::error::ParserError;
use crate::parser::parse_source;
use crate::source::{HeaderParser, ParserOptions, read_input};

/// [`HeaderParser`] for C++ sources backed by ast-grep.
#[derive(Debug, Clone, Copy, Default)]
pub struct AstGrepHeaderParser {
    options: ParserOptions,
}

impl AstGrepHeaderParser {
    #[must_use]
    pub const fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// Parse already-loaded source text; `path` is only used for reporting.
    ///
    /// # Errors
    /// Returns [`ParserError::Syntax`] in strict mode when the tree contains
    /// error nodes.
    pub fn parse_str(&self, path: &Path, source: &str) -> Result<HeaderUnit, ParserError> {
        let root = parse_source(source);
        if let Some(line) = first_error_line(&root.root()) {
            if self.options.strict {
                return Err(ParserError::Syntax {
                    path: path.to_path_buf(),
                    line,
                });
            }
            tracing::warn!(
                path = %path.display(),
                line,
                "syntax error in header; declarations around it may be missing"
            );
        }
        Ok(extract(&root))
    }
}

impl HeaderParser for AstGrepHeaderParser {
    fn parse_file(&self, path: &Path) -> Result<HeaderUnit, ParserError> {
        let source = read_input(path)?;
        self.parse_str(path, &source)
    }
}

/// Extract the top-level declaration records of a parsed C++ file.
pub fn extract<D: ast_grep_core::Doc>(root: &ast_grep_core::AstGrep<D>) -> HeaderUnit {
    let mut unit = HeaderUnit::default();
    let mut namespace = Vec::new();
    declarations::collect_declarations(&root.root(), &mut namespace, &mut unit);
    unit
}

/// One-based line of the first tree-sitter `ERROR` node, if any.
fn first_error_line<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<usize> {
    if node.kind().as_ref() == "ERROR" {
        return Some(node.start_pos().line() + 1);
    }
    node.children().find_map(|child| first_error_line(&child))
}
