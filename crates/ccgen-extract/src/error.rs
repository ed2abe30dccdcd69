//! Error types for ccgen-extract.

use std::path::PathBuf;

use ccgen_parser::ParserError;

use crate::session::SymbolKind;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("no input file specified")]
    NoInputFiles,

    #[error(transparent)]
    Parse(#[from] ParserError),

    #[error("{kind} {name} is exported by both {} and {}", first.display(), second.display())]
    NameCollision {
        kind: SymbolKind,
        name: String,
        first: PathBuf,
        second: PathBuf,
    },
}
