//! The JSON symbol table and the human-readable dump.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use ccgen_core::SymbolTable;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::RenderError;

/// Write `table` as four-space indented JSON with every object's keys
/// sorted, struct fields included.
///
/// # Errors
/// Serialization or write failure.
pub fn write_json(table: &SymbolTable, path: &Path) -> Result<(), RenderError> {
    // `Value` objects are BTreeMaps, so going through one sorts the fields.
    let value = serde_json::to_value(table)?;
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    buf.push(b'\n');
    write_file(path, &buf)
}

/// Write the dump produced by [`dump_string`].
///
/// # Errors
/// Write failure.
pub fn write_dump(table: &SymbolTable, path: &Path) -> Result<(), RenderError> {
    write_file(path, dump_string(table).as_bytes())
}

/// Contributing headers, enums with their values and classes with their
/// attribute names, one per line.
#[must_use]
pub fn dump_string(table: &SymbolTable) -> String {
    let mut out = String::from("affected headers:\n\n");
    for file in table.file_names() {
        let _ = writeln!(out, "header: {file}");
    }
    out.push('\n');

    out.push_str("affected enums:\n\n");
    for entry in table.enums.values() {
        let _ = writeln!(out, "enum: {}", entry.name);
        for value in &entry.values {
            let _ = writeln!(out, "  value: {value}");
        }
        out.push('\n');
    }

    out.push_str("affected classes:\n\n");
    for entry in table.classes.values() {
        let _ = writeln!(out, "class: {}", entry.name);
        for attribute in &entry.attributes {
            let _ = writeln!(out, "  attribute: {}", attribute.name);
        }
        out.push('\n');
    }
    out
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), RenderError> {
    fs::write(path, contents).map_err(|source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccgen_core::{AccessLevel, Attribute, ClassEntry, EnumEntry};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn table() -> SymbolTable {
        let mut table = SymbolTable::default();
        table.files.push(PathBuf::from("shapes.hh"));
        table.enums.insert(
            "Shapes::Color".into(),
            EnumEntry {
                name: "Shapes::Color".into(),
                values: vec!["Red".into(), "Green".into()],
            },
        );
        table.classes.insert(
            "Shapes::Circle".into(),
            ClassEntry {
                name: "Shapes::Circle".into(),
                attributes: vec![Attribute {
                    name: "radius".into(),
                    type_name: "float".into(),
                    doc: "///< r".into(),
                    access: AccessLevel::Public,
                }],
                parents: Vec::new(),
                doc: "/// circle".into(),
                scope: "Shapes".into(),
            },
        );
        table
    }

    #[test]
    fn dump_lists_headers_enums_and_classes() {
        let expected = "affected headers:\n\n\
header: shapes.hh\n\n\
affected enums:\n\n\
enum: Shapes::Color\n  value: Red\n  value: Green\n\n\
affected classes:\n\n\
class: Shapes::Circle\n  attribute: radius\n\n";
        assert_eq!(dump_string(&table()), expected);
    }

    #[test]
    fn dump_of_empty_table_keeps_section_headings() {
        assert_eq!(
            dump_string(&SymbolTable::default()),
            "affected headers:\n\n\naffected enums:\n\naffected classes:\n\n"
        );
    }

    #[test]
    fn json_uses_four_space_indent() {
        let dir = tempfile::tempdir().expect("tempdir should create");
        let path = dir.path().join("ccgen.json");
        write_json(&table(), &path).expect("write json");

        let text = std::fs::read_to_string(&path).expect("read json");
        assert!(text.starts_with("{\n    \"classes\""), "got {text}");
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(value["classes"]["Shapes::Circle"]["attributes"][0]["name"], "radius");
    }

    #[test]
    fn json_keys_are_sorted_at_every_level() {
        let dir = tempfile::tempdir().expect("tempdir should create");
        let path = dir.path().join("ccgen.json");
        write_json(&table(), &path).expect("write json");

        let text = std::fs::read_to_string(&path).expect("read json");
        let position = |key: &str| {
            text.find(&format!("\"{key}\":"))
                .unwrap_or_else(|| panic!("{key} missing from {text}"))
        };
        // Top level, then class fields, then attribute fields.
        assert!(position("classes") < position("enums"));
        assert!(position("enums") < position("files"));
        assert!(position("attributes") < position("doc"));
        assert!(position("scope") > position("parents"));
        assert!(position("access") < position("type"));
    }
}
