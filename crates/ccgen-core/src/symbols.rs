//! Exported symbol entries and the merged symbol table.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::AccessLevel;

/// Exported classes keyed by fully-qualified name.
pub type ClassMap = BTreeMap<String, ClassEntry>;

/// Exported enums keyed by fully-qualified name.
pub type EnumMap = BTreeMap<String, EnumEntry>;

/// An exported enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumEntry {
    /// Fully-qualified name; always equal to the entry's key in an [`EnumMap`].
    pub name: String,
    /// Enumerator names in declaration order.
    pub values: Vec<String>,
}

/// A documented data member of an exported class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub doc: String,
    pub access: AccessLevel,
}

/// An exported class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassEntry {
    /// Fully-qualified name; always equal to the entry's key in a [`ClassMap`].
    pub name: String,
    pub attributes: Vec<Attribute>,
    /// Base classes: raw names after collection, exported fully-qualified
    /// names once resolution has run.
    pub parents: Vec<String>,
    pub doc: String,
    /// Scope the class was declared in (enclosing class or namespace).
    pub scope: String,
}

/// The merged, resolved result of one run.
///
/// Maps are ordered so serialization is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolTable {
    /// Inputs that exported at least one class or enum, in input order.
    pub files: Vec<PathBuf>,
    pub classes: ClassMap,
    pub enums: EnumMap,
}

impl SymbolTable {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.enums.is_empty()
    }

    /// Contributing files as display strings, for templates and dumps.
    #[must_use]
    pub fn file_names(&self) -> Vec<String> {
        self.files
            .iter()
            .map(|path| path.display().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_with_template_field_names() {
        let mut table = SymbolTable::default();
        table.files.push(PathBuf::from("include/player.hh"));
        table.classes.insert(
            "game::Player".into(),
            ClassEntry {
                name: "game::Player".into(),
                attributes: vec![Attribute {
                    name: "health".into(),
                    type_name: "int".into(),
                    doc: "///< hp".into(),
                    access: AccessLevel::Public,
                }],
                parents: vec!["game::Entity".into()],
                doc: "/// player".into(),
                scope: "game".into(),
            },
        );

        let value = serde_json::to_value(&table).expect("serialize table");
        let player = &value["classes"]["game::Player"];
        assert_eq!(player["attributes"][0]["type"], "int");
        assert_eq!(player["attributes"][0]["access"], "public");
        assert_eq!(player["parents"][0], "game::Entity");
        assert_eq!(value["files"][0], "include/player.hh");
        assert!(value["enums"].as_object().is_some_and(serde_json::Map::is_empty));
    }

    #[test]
    fn empty_table_reports_empty() {
        let table = SymbolTable::default();
        assert!(table.is_empty());
        assert!(table.file_names().is_empty());
    }
}
