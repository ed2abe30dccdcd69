//! # ccgen-core
//!
//! Core types shared across all ccgen crates:
//! - Declaration records produced by the header parser (classes, enums, properties)
//! - Exported symbol entries and the merged [`SymbolTable`]
//! - Access levels for class members
//! - The cross-file name collision policy
//! - Documentation filtering (Doxygen comment detection and marker stripping)

pub mod access;
pub mod docs;
pub mod policy;
pub mod records;
pub mod symbols;

pub use access::AccessLevel;
pub use policy::CollisionPolicy;
pub use records::{
    BaseClassRecord, ClassRecord, EnumRecord, EnumValueRecord, HeaderUnit, PropertyRecord,
};
pub use symbols::{Attribute, ClassEntry, ClassMap, EnumEntry, EnumMap, SymbolTable};
