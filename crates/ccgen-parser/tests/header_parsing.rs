//! Integration tests: parse C++ fixtures from disk through `SourceParser`.

use std::path::PathBuf;

use ccgen_core::{AccessLevel, HeaderUnit};
use ccgen_parser::{HeaderParser, ParserOptions, SourceParser};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn parse_scene() -> HeaderUnit {
    SourceParser::new(ParserOptions { strict: true })
        .parse_file(&fixture("scene.hh"))
        .expect("scene fixture parses")
}

#[test]
fn scene_top_level_declarations() {
    let unit = parse_scene();
    let classes: Vec<_> = unit.classes.iter().map(|c| c.name.as_str()).collect();
    let enums: Vec<_> = unit.enums.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(classes, vec!["Shape", "Circle", "Registry", "Settings"]);
    assert_eq!(enums, vec!["ShapeKind"]);
}

#[test]
fn scene_namespaces() {
    let unit = parse_scene();
    assert_eq!(unit.classes[0].namespace, "scene");
    assert_eq!(unit.enums[0].namespace, "scene::");
    assert!(unit.classes[3].namespace.is_empty());
}

#[test]
fn scene_shape_members() {
    let unit = parse_scene();
    let shape = &unit.classes[0];
    assert_eq!(shape.documentation, "/// Base of every drawable object.");
    let props = &shape.properties[&AccessLevel::Public];
    let docs: Vec<_> = props
        .iter()
        .map(|p| (p.name.as_str(), p.documentation.as_str()))
        .collect();
    assert_eq!(
        docs,
        vec![("id", "/// Stable identifier."), ("debug_name", "")]
    );
}

#[test]
fn scene_circle_inherits_and_documents_members() {
    let unit = parse_scene();
    let circle = &unit.classes[1];
    assert_eq!(circle.inherits_from[0].class_name, "Shape");
    assert_eq!(
        circle.properties[&AccessLevel::Public][0].documentation,
        "///< Radius in meters."
    );
    assert_eq!(circle.properties[&AccessLevel::Private][0].name, "cached_area");
}

#[test]
fn scene_registry_nests_types() {
    let unit = parse_scene();
    let registry = &unit.classes[2];
    assert!(registry.documentation.is_empty());
    assert_eq!(registry.nested_classes.len(), 1);
    let entry = &registry.nested_classes[0];
    assert_eq!(entry.name, "Entry");
    assert_eq!(entry.documentation, "/// Exported even though Registry is not.");
    assert_eq!(
        registry.nested_enums[&AccessLevel::Public][0].values.len(),
        2
    );
}

#[test]
fn scene_settings_has_qualified_base() {
    let unit = parse_scene();
    assert_eq!(unit.classes[3].inherits_from[0].class_name, "scene::Shape");
}

#[test]
fn include_guarded_header_exports_its_declarations() {
    let unit = SourceParser::new(ParserOptions { strict: true })
        .parse_file(&fixture("guarded.hh"))
        .expect("guarded fixture parses");

    let stack = unit
        .classes
        .iter()
        .find(|c| c.name == "Stack")
        .expect("Stack is found under the include guard");
    assert_eq!(stack.namespace, "inventory");
    assert_eq!(stack.documentation, "/// A stack of items.");
    let members: Vec<_> = stack.properties[&AccessLevel::Public]
        .iter()
        .map(|p| (p.name.as_str(), p.documentation.as_str()))
        .collect();
    assert_eq!(
        members,
        vec![
            ("item", "/// Item identifier."),
            ("weight", "///< Weight per item."),
            ("count", "///< Items in the stack."),
        ]
    );
}
