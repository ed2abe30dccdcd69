//! Parser error types for ccgen-parser.

use std::path::PathBuf;

/// Errors that abort parsing of an input file.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported input {}: expected a C++ header or a .json record file", path.display())]
    UnsupportedInput { path: PathBuf },

    #[error("syntax error in {} at line {line}", path.display())]
    Syntax { path: PathBuf, line: usize },

    #[error("invalid record file {}: {source}", path.display())]
    Records {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
