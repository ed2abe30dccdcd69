//! # ccgen-extract
//!
//! Turns parsed declaration records into the exported [`SymbolTable`]:
//! - per-file collection of documented classes and enums under
//!   fully-qualified names
//! - cross-file aggregation with a configurable collision policy
//! - two-pass resolution of base-class names against the exported classes
//!
//! [`SymbolTable`]: ccgen_core::SymbolTable

pub mod aggregate;
pub mod classes;
pub mod collected;
pub mod enums;
pub mod error;
pub mod paths;
pub mod resolve;
pub mod scope;
pub mod session;

pub use aggregate::{ExtractOptions, SourceCollector, collect_unit};
pub use classes::collect_class;
pub use collected::CollectedSymbols;
pub use enums::collect_enum;
pub use error::ExtractError;
pub use resolve::{ResolveOptions, correct_parent_names, resolve_parent_name};
pub use session::{Diagnostic, ExtractionSession, SymbolKind};
