//! # ccgen-parser
//!
//! Turns input files into [`HeaderUnit`](ccgen_core::HeaderUnit) declaration
//! records for the extraction engine.
//!
//! - **C++ headers** are parsed with ast-grep (tree-sitter C++) and walked for
//!   namespaces, classes, structs, enums, data members, base classes and
//!   Doxygen comments.
//! - **Record files** (`.json`) are deserialized directly, for records
//!   produced by another parser.
//!
//! The engine only sees the [`HeaderParser`] trait.

pub mod cpp;
pub mod error;
pub mod parser;
pub mod source;

pub use cpp::AstGrepHeaderParser;
pub use error::ParserError;
pub use parser::{InputKind, detect_input_kind};
pub use source::{HeaderParser, ParserOptions, RecordFileParser, SourceParser};
