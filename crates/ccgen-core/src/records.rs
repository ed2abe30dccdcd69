//! Declaration records produced by the header parser.
//!
//! The records are an immutable tree owned by the parser: one [`HeaderUnit`]
//! per input file, holding top-level classes and enums, with nested
//! declarations reachable through [`ClassRecord`]. They deserialize from the
//! same JSON shape they serialize to, so pre-parsed record files can stand in
//! for C++ headers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::AccessLevel;

/// Top-level declarations of one parsed file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderUnit {
    #[serde(default)]
    pub classes: Vec<ClassRecord>,
    #[serde(default)]
    pub enums: Vec<EnumRecord>,
}

/// A parsed `class` or `struct` definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    /// Declared name; empty for anonymous classes.
    #[serde(default)]
    pub name: String,
    /// Enclosing namespace as reported by the parser, `::`-joined without a
    /// trailing separator (`"outer::inner"`).
    #[serde(default)]
    pub namespace: String,
    /// Raw Doxygen comment attached to the declaration.
    #[serde(default)]
    pub documentation: String,
    #[serde(default)]
    pub nested_classes: Vec<ClassRecord>,
    #[serde(default)]
    pub nested_enums: BTreeMap<AccessLevel, Vec<EnumRecord>>,
    #[serde(default)]
    pub properties: BTreeMap<AccessLevel, Vec<PropertyRecord>>,
    #[serde(default)]
    pub inherits_from: Vec<BaseClassRecord>,
}

impl ClassRecord {
    /// Iterate every property with its access level, in access order then
    /// declaration order.
    pub fn all_properties(&self) -> impl Iterator<Item = (AccessLevel, &PropertyRecord)> {
        self.properties
            .iter()
            .flat_map(|(access, props)| props.iter().map(move |p| (*access, p)))
    }

    /// Iterate every nested enum regardless of access level.
    pub fn all_nested_enums(&self) -> impl Iterator<Item = &EnumRecord> {
        self.nested_enums.values().flatten()
    }
}

/// One entry of a class's base-class clause.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseClassRecord {
    /// Base class name exactly as written (`Base`, `ns::Base`, `::Base`).
    #[serde(rename = "class")]
    pub class_name: String,
}

impl BaseClassRecord {
    #[must_use]
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
        }
    }
}

/// A parsed `enum` or `enum class` definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumRecord {
    #[serde(default)]
    pub name: String,
    /// Enclosing namespace as reported by the parser, carrying its own
    /// trailing separator (`"outer::inner::"`).
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub documentation: String,
    #[serde(default)]
    pub values: Vec<EnumValueRecord>,
}

/// One enumerator. Unnamed entries are tolerated and skipped on collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValueRecord {
    #[serde(default)]
    pub name: String,
}

impl EnumValueRecord {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A data member of a class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_name: String,
    #[serde(default)]
    pub documentation: String,
}
