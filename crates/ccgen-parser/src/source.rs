//! The parser seam used by the extraction engine, and its file-backed
//! implementations.

use std::path::Path;
use std::time::Instant;

use ccgen_core::HeaderUnit;

use crate::cpp::AstGrepHeaderParser;
use crate::error::ParserError;
use crate::parser::{InputKind, detect_input_kind};

/// Produces the declaration records of one input file.
///
/// Implementations must be shareable across threads: files are parsed in
/// parallel and merged afterwards in input order.
pub trait HeaderParser: Sync {
    /// Parse `path` into its top-level declaration records.
    ///
    /// # Errors
    /// Returns `ParserError` when the file cannot be read or processed.
    fn parse_file(&self, path: &Path) -> Result<HeaderUnit, ParserError>;
}

/// Parser behaviour switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Treat tree-sitter error nodes as a fatal [`ParserError::Syntax`]
    /// instead of a logged warning.
    pub strict: bool,
}

/// Loads `HeaderUnit` records serialized as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordFileParser;

impl HeaderParser for RecordFileParser {
    fn parse_file(&self, path: &Path) -> Result<HeaderUnit, ParserError> {
        let text = read_input(path)?;
        serde_json::from_str(&text).map_err(|source| ParserError::Records {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Dispatches each input to the C++ parser or the record loader by extension.
#[derive(Debug, Clone, Default)]
pub struct SourceParser {
    headers: AstGrepHeaderParser,
    records: RecordFileParser,
}

impl SourceParser {
    #[must_use]
    pub const fn new(options: ParserOptions) -> Self {
        Self {
            headers: AstGrepHeaderParser::new(options),
            records: RecordFileParser,
        }
    }
}

impl HeaderParser for SourceParser {
    fn parse_file(&self, path: &Path) -> Result<HeaderUnit, ParserError> {
        let start = Instant::now();
        let unit = match detect_input_kind(path) {
            Some(InputKind::Header) => self.headers.parse_file(path)?,
            Some(InputKind::Records) => self.records.parse_file(path)?,
            None => {
                return Err(ParserError::UnsupportedInput {
                    path: path.to_path_buf(),
                });
            }
        };
        tracing::info!(
            "parse {}: done in {}s",
            path.display(),
            start.elapsed().as_secs_f64()
        );
        Ok(unit)
    }
}

pub(crate) fn read_input(path: &Path) -> Result<String, ParserError> {
    std::fs::read_to_string(path).map_err(|source| ParserError::Io {
        path: path.to_path_buf(),
        source,
    })
}
